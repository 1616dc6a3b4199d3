//! Bounded outbound queue of parameter events for `no_std` environments.
//!
//! The fade engine pushes events from its tick context; the transport task
//! drains them onto the bus. Built on `critical-section` and
//! `heapless::Deque`, so it is safe to share between tasks and interrupts.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::ParameterChannel;
use crate::error::ChannelError;
use crate::parameter::{LightParameter, ParameterEvent};

/// Error returned when trying to receive from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe queue of [`ParameterEvent`]s.
///
/// A full queue rejects the send instead of blocking, which the engine
/// reports as an unavailable channel.
pub struct ParameterQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ParameterEvent, SIZE>>>,
}

impl<const SIZE: usize> ParameterQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    pub const fn sender(&self) -> Sender<'_, SIZE> {
        Sender { queue: self }
    }

    /// Get a receiver handle for this queue.
    pub const fn receiver(&self) -> Receiver<'_, SIZE> {
        Receiver { queue: self }
    }

    /// Try to push an event into the queue.
    pub fn try_send(&self, event: ParameterEvent) -> Result<(), ChannelError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(|_| ChannelError::Full)
        })
    }

    /// Try to pop the oldest event from the queue.
    pub fn try_receive(&self) -> Result<ParameterEvent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of events that can still be queued
    pub fn free_slots(&self) -> usize {
        SIZE - self.len()
    }
}

impl<const SIZE: usize> Default for ParameterQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> ParameterChannel for ParameterQueue<SIZE> {
    fn send(&mut self, parameter: LightParameter, value: u8) -> Result<(), ChannelError> {
        self.try_send(ParameterEvent::new(parameter, value))
    }
}

/// A sender handle for a [`ParameterQueue`].
///
/// This is a lightweight reference that can be copied into the engine.
#[derive(Clone, Copy)]
pub struct Sender<'a, const SIZE: usize> {
    queue: &'a ParameterQueue<SIZE>,
}

impl<const SIZE: usize> ParameterChannel for Sender<'_, SIZE> {
    fn send(&mut self, parameter: LightParameter, value: u8) -> Result<(), ChannelError> {
        self.queue.try_send(ParameterEvent::new(parameter, value))
    }
}

/// A receiver handle for a [`ParameterQueue`].
#[derive(Clone, Copy)]
pub struct Receiver<'a, const SIZE: usize> {
    queue: &'a ParameterQueue<SIZE>,
}

impl<const SIZE: usize> Receiver<'_, SIZE> {
    /// Try to receive the oldest queued event.
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<ParameterEvent, TryReceiveError> {
        self.queue.try_receive()
    }
}

impl<const SIZE: usize> Iterator for Receiver<'_, SIZE> {
    type Item = ParameterEvent;

    /// Drains the queue; yields `None` once it is empty.
    fn next(&mut self) -> Option<ParameterEvent> {
        self.queue.try_receive().ok()
    }
}
