//! # Utility Module
//!
//! Small numeric helpers shared by the generation stages.
//!
//! ## Example Function: `clamp`
//!
//! The `clamp` function restricts a value to lie within a specified range. If the value
//! is below the minimum, it returns the minimum; if it's above the maximum, it returns the
//! maximum; otherwise, it returns the value unchanged. Unlike `Ord::clamp` it does not
//! panic when `min > max`; the minimum wins, which is what the room placer wants when a
//! space is narrower than the requested room.

/// Clamps a value between a minimum and maximum.
///
/// # Arguments
///
/// * `value` - The input value to be clamped.
/// * `min` - The minimum allowable value.
/// * `max` - The maximum allowable value.
///
/// # Examples
///
/// ```
/// use bsp_mapgen::utils::util::clamp;
///
/// assert_eq!(clamp(5, 0, 10), 5);
/// assert_eq!(clamp(-5, 0, 10), 0);
/// assert_eq!(clamp(15, 0, 10), 10);
/// ```
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Iterates `from..=to` regardless of which end is larger.
pub fn span(from: i64, to: i64) -> std::ops::RangeInclusive<i64> {
    if from <= to {
        from..=to
    } else {
        to..=from
    }
}
