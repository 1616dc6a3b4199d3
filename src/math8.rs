/// Linear interpolation between two 8-bit values
///
/// `fraction` is clamped to `0.0..=1.0`. The delta is rounded to the nearest
/// integer, so `fraction == 1.0` always yields exactly `end`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lerp8(start: u8, end: u8, fraction: f32) -> u8 {
    let fraction = fraction.clamp(0.0, 1.0);
    let delta = f32::from(end) - f32::from(start);
    let value = i16::from(start) + libm::roundf(delta * fraction) as i16;

    value.clamp(0, 255) as u8
}

/// Progress fraction at the end of segment `index` out of `count`
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn segment_fraction(index: u32, count: u32) -> f32 {
    if count == 0 || index.saturating_add(1) >= count {
        return 1.0;
    }
    (index + 1) as f32 / count as f32
}

/// Calculate progress (0-100) from elapsed and total milliseconds
///
/// A zero `total` counts as finished.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn percent(elapsed_ms: u32, total_ms: u32) -> u8 {
    if total_ms == 0 || elapsed_ms >= total_ms {
        return 100;
    }
    ((elapsed_ms as u64 * 100) / total_ms as u64) as u8
}
