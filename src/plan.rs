//! Fade segmentation
//!
//! The bus encodes a transition duration in a single byte of whole seconds,
//! so a fade longer than [`MAX_SEGMENT_MS`] is split into equal-duration
//! segments with intermediate targets. Segment targets are always derived
//! from the original start/target pair, never by accumulating deltas, so the
//! last segment lands exactly on the requested target.

use embassy_time::Duration;

use crate::math8::{lerp8, segment_fraction};
use crate::state::{FadeRequest, LightingState};

/// Longest duration a single command can carry, in seconds
pub const MAX_SEGMENT_SECS: u32 = 255;

/// Longest duration a single command can carry, in milliseconds
pub const MAX_SEGMENT_MS: u32 = MAX_SEGMENT_SECS * 1000;

/// One bus-encodable part of a fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Zero-based position within the plan
    pub index: u32,
    /// State the actuators fade toward during this segment
    pub target: LightingState,
    /// Segment duration in milliseconds
    pub duration_ms: u32,
}

impl Segment {
    /// Duration as sent on the bus: whole seconds, sub-second part truncated
    #[allow(clippy::cast_possible_truncation)]
    pub const fn duration_secs(&self) -> u8 {
        let secs = self.duration_ms / 1000;
        if secs > MAX_SEGMENT_SECS {
            return MAX_SEGMENT_SECS as u8;
        }
        secs as u8
    }

    #[allow(clippy::cast_lossless)]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms as u64)
    }
}

/// Segment plan of a single fade
///
/// Segments are computed on demand, so a plan is a few bytes regardless of
/// the fade duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadePlan {
    start: LightingState,
    target: LightingState,
    total_ms: u32,
    segment_count: u32,
    segment_ms: u32,
}

impl FadePlan {
    /// Split a fade from `start` to `target` over `total_ms` into segments
    pub const fn new(start: LightingState, target: LightingState, total_ms: u32) -> Self {
        let segment_count = if total_ms == 0 {
            1
        } else {
            total_ms.div_ceil(MAX_SEGMENT_MS)
        };

        Self {
            start,
            target,
            total_ms,
            segment_count,
            segment_ms: total_ms / segment_count,
        }
    }

    /// Plan a request starting from `start`
    pub const fn from_request(start: LightingState, request: &FadeRequest) -> Self {
        Self::new(start, request.target, request.duration_ms)
    }

    /// State the fade started from
    pub const fn start(&self) -> LightingState {
        self.start
    }

    /// Final target of the fade
    pub const fn target(&self) -> LightingState {
        self.target
    }

    /// Requested total duration in milliseconds
    pub const fn total_ms(&self) -> u32 {
        self.total_ms
    }

    /// Number of segments, always at least one
    pub const fn segment_count(&self) -> u32 {
        self.segment_count
    }

    /// Duration shared by every segment, in milliseconds
    pub const fn segment_ms(&self) -> u32 {
        self.segment_ms
    }

    /// Get segment `index`, or `None` past the end of the plan
    pub fn segment(&self, index: u32) -> Option<Segment> {
        if index >= self.segment_count {
            return None;
        }

        let target = if index + 1 == self.segment_count {
            self.target
        } else {
            let fraction = segment_fraction(index, self.segment_count);
            self.start
                .zip_with(&self.target, |from, to| lerp8(from, to, fraction))
        };

        Some(Segment {
            index,
            target,
            duration_ms: self.segment_ms,
        })
    }

    /// Iterate over all segments in transmission order
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            plan: self,
            next: 0,
        }
    }
}

/// Iterator over the segments of a [`FadePlan`]
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    plan: &'a FadePlan,
    next: u32,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let segment = self.plan.segment(self.next)?;
        self.next += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.segment_count.saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}
