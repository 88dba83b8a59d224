//! Duration from the control field
//!
//! The low bit of the control field is the dot bit and the remaining bits
//! shift the profile's smallest duration. The x1.5 multiplier goes to the
//! dot bit state chosen by the [`DotRule`].

use crate::models::{DotRule, Ticks};

/// Resolve the duration encoded by `control`
///
/// The profile validation guarantees the shift cannot overflow.
pub fn resolve(control: u32, smallest_duration: u64, rule: DotRule) -> Ticks {
    let is_dot = control & 1 == 1;
    let shift_amount = control >> 1;
    let magnitude = Ticks::from_integer(smallest_duration << shift_amount);

    let dotted = match rule {
        DotRule::Inverted => !is_dot,
        DotRule::Conventional => is_dot,
    };
    if dotted {
        magnitude * Ticks::new(3, 2)
    } else {
        magnitude
    }
}
