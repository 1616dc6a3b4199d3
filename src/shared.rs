//! Fade engine shared between execution contexts
//!
//! The tick task and the UI task can both hold a `&SharedFadeEngine`. Every
//! operation runs inside a short critical section, so mutations are
//! serialized and readers only ever see committed state. Sends happen inside
//! the mutating call, so the channel must be non-blocking.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;

use crate::ParameterChannel;
use crate::clock::Clock;
use crate::engine::{FadeEngine, FadeState};
use crate::error::{FadeError, FadeResult};
use crate::progress::ProgressSnapshot;
use crate::state::{FadeRequest, LightingState};

/// Thread-safe handle around an optional [`FadeEngine`]
///
/// Const-constructible, so it can live in a `static`. Operations fail with
/// [`FadeError::NotInitialized`] until [`SharedFadeEngine::init`] is called.
pub struct SharedFadeEngine<C: ParameterChannel, K: Clock> {
    engine: Mutex<RefCell<Option<FadeEngine<C>>>>,
    clock: K,
}

impl<C: ParameterChannel, K: Clock> SharedFadeEngine<C, K> {
    pub const fn new(clock: K) -> Self {
        Self {
            engine: Mutex::new(RefCell::new(None)),
            clock,
        }
    }

    /// Create the engine around `channel`.
    ///
    /// A second call keeps the running engine and drops `channel`.
    pub fn init(&self, channel: C) {
        critical_section::with(|cs| {
            let mut slot = self.engine.borrow(cs).borrow_mut();
            if slot.is_some() {
                log::warn!("fade: already initialized");
                return;
            }
            *slot = Some(FadeEngine::new(channel));
            log::info!("fade: controller initialized");
        });
    }

    /// Tear down the engine, returning its channel
    pub fn shutdown(&self) -> Option<C> {
        let engine = critical_section::with(|cs| self.engine.borrow(cs).borrow_mut().take());
        if engine.is_some() {
            log::info!("fade: controller shut down");
        }
        engine.map(FadeEngine::into_channel)
    }

    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.engine.borrow(cs).borrow().is_some())
    }

    /// Run `f` on the engine inside a critical section
    fn with_engine<R>(
        &self,
        f: impl FnOnce(&mut FadeEngine<C>, Instant) -> R,
    ) -> Result<R, FadeError> {
        critical_section::with(|cs| {
            let mut slot = self.engine.borrow(cs).borrow_mut();
            let engine = slot.as_mut().ok_or(FadeError::NotInitialized)?;
            // Sampled under the lock so committed timestamps never go backwards
            let now = self.clock.now();
            Ok(f(engine, now))
        })
    }

    pub fn start(&self, request: FadeRequest) -> FadeResult {
        self.with_engine(|engine, now| engine.start(request, now))?
    }

    pub fn apply_immediate(&self, state: LightingState) -> FadeResult {
        self.with_engine(|engine, now| engine.apply_immediate(state, now))?
    }

    /// Advance the engine, returning the state after the tick
    pub fn tick(&self) -> Result<FadeState, FadeError> {
        self.with_engine(|engine, now| engine.tick(now))
    }

    /// Current progress; a zeroed idle snapshot before initialization
    pub fn progress(&self) -> (FadeState, ProgressSnapshot) {
        self.with_engine(|engine, now| engine.progress(now))
            .unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.with_engine(|engine, _| engine.is_active())
            .unwrap_or(false)
    }

    /// Abort any running fade. Does nothing before initialization.
    pub fn abort(&self) {
        let _ = self.with_engine(|engine, _| engine.abort());
    }

    pub fn current(&self) -> Result<LightingState, FadeError> {
        self.with_engine(|engine, _| engine.current())
    }

    pub fn set_current(&self, state: LightingState) -> FadeResult {
        self.with_engine(|engine, _| engine.set_current(state))
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }
}
