//! Time units

use core::fmt::Display;
use core::ops::{Div, Mul};

/// Hertz
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug, Eq, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hertz(pub u32);

impl Display for Hertz {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

impl Hertz {
    /// Create a `Hertz` from the given hertz.
    pub const fn hz(hertz: u32) -> Self {
        Self(hertz)
    }

    /// Raw value in hertz.
    pub const fn to_hz(self) -> u32 {
        self.0
    }
}

/// This is a convenience shortcut for [`Hertz::hz`]
pub const fn hz(hertz: u32) -> Hertz {
    Hertz::hz(hertz)
}

// Clock math wraps like the 32-bit registers it mirrors.
impl Mul<u32> for Hertz {
    type Output = Hertz;
    fn mul(self, rhs: u32) -> Self::Output {
        Hertz(self.0.wrapping_mul(rhs))
    }
}

impl Div<u32> for Hertz {
    type Output = Hertz;
    fn div(self, rhs: u32) -> Self::Output {
        Hertz(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_wraps_at_32_bits() {
        assert_eq!(hz(100_000_000) * 2, Hertz(200_000_000));
        assert_eq!(Hertz(100_000_000) * 1024, Hertz(100_000_000u32.wrapping_mul(1024)));
        assert_eq!(Hertz(200_000_000) / 3, Hertz(66_666_666));
        assert_eq!(Hertz(42).to_hz(), 42);
    }
}
