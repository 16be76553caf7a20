//! Console UART helpers.
//!
//! The console is a 16550-compatible UART clocked from PCLK0.

use crate::rcc::Clocks;
use crate::time::Hertz;

/// Baud rate configuration error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A baud rate of zero was requested.
    BaudZero,
    /// The divisor does not fit the 16-bit DLL/DLM pair.
    DivisorOutOfRange { divisor: u32 },
}

/// Divisor latch value for `baudrate` with 16x oversampling, rounded to nearest.
pub fn baud_divisor(clk: Hertz, baudrate: u32) -> Result<u16, Error> {
    if baudrate == 0 {
        return Err(Error::BaudZero);
    }

    let oversampled = baudrate as u64 * 16;
    let divisor = (clk.0 as u64 + oversampled / 2) / oversampled;
    match u16::try_from(divisor) {
        Ok(0) | Err(_) => Err(Error::DivisorOutOfRange {
            divisor: divisor as u32,
        }),
        Ok(d) => Ok(d),
    }
}

/// Divisor latch value for the console at `baudrate`.
pub fn console_divisor(clocks: &Clocks, baudrate: u32) -> Result<u16, Error> {
    baud_divisor(clocks.console_clock(), baudrate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rcc::{derive, RegisterSnapshot};

    #[test]
    fn common_rates() {
        assert_eq!(baud_divisor(Hertz(50_000_000), 115_200), Ok(27));
        assert_eq!(baud_divisor(Hertz(100_000_000), 115_200), Ok(54));
        assert_eq!(baud_divisor(Hertz(25_000_000), 9_600), Ok(163));
    }

    #[test]
    fn zero_baud_rejected() {
        assert_eq!(baud_divisor(Hertz(50_000_000), 0), Err(Error::BaudZero));
    }

    #[test]
    fn divisor_must_fit_latch() {
        assert_eq!(
            baud_divisor(Hertz(1_000), 115_200),
            Err(Error::DivisorOutOfRange { divisor: 0 })
        );
        assert_eq!(
            baud_divisor(Hertz(4_000_000_000), 300),
            Err(Error::DivisorOutOfRange { divisor: 833_333 })
        );
    }

    #[test]
    fn console_uses_pclk0() {
        // DDR 200 MHz, CLK_A 200 MHz, APB0 field 2 -> /4 -> 50 MHz
        let clocks = derive(Hertz(100_000_000), &RegisterSnapshot::from_bits(2 << 2, 0, 0));
        assert_eq!(console_divisor(&clocks, 115_200), Ok(27));
    }
}
