//! Pitch wraparound
//!
//! Values below the interval take one upward wrap. Values at or above it
//! are wrapped down repeatedly until they drop under the upper bound, and
//! then get the same below-the-interval check.

use crate::models::PitchBounds;

use super::Result;

/// Wrap `value` into `[bounds.low, bounds.high)`
///
/// Bounds are validated first, so a bad configuration fails with
/// `InvalidRange` instead of looping.
pub fn sanitize(value: u32, bounds: &PitchBounds) -> Result<u32> {
    bounds.validate()?;
    Ok(wrap(value, bounds))
}

/// [`sanitize`] for bounds that already passed validation
pub(crate) fn wrap(value: u32, bounds: &PitchBounds) -> u32 {
    let mut value = value;
    if value >= bounds.high {
        // Closed form of subtracting `wrap_down` until below `high`
        value = bounds.high - bounds.wrap_down + (value - bounds.high) % bounds.wrap_down;
    }
    if value < bounds.low {
        value += bounds.wrap_up;
    }
    value
}
