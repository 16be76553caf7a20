//! Reset and clock control: MPLL bring-up and clock learning.
//!
//! Boot code calls [`crate::init`] once. It locks the MPLL, reads the
//! divider registers and returns the resulting [`Clocks`]. Drivers query
//! frequencies from that value, nothing is recomputed afterwards.

mod clock;
pub use clock::*;
mod clock_config;
pub(crate) use clock_config::init;
pub use clock_config::Config;
mod clock_read;
pub use clock_read::{derive, learn, RegisterSnapshot};
mod divisor;
pub use divisor::{decode, decode_field, DIVISOR_FIELD_MASK};
mod mpll;
pub use mpll::bring_up;

// Re-export PAC register types
pub use crate::pac::sysreg::regs::{Facc1Cr, PllStatus, PllStatusHighCr, PllStatusLowCr};
pub use crate::utils::PollLimit;

use crate::pac::sysreg::Sysreg;

/// Clock bring-up error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The fabric CCC PLL feeding the MPLL did not lock within the poll limit.
    FabricPllLockTimeout,
    /// The MPLL did not lock within the poll limit.
    MpllLockTimeout,
}

/// Access to the SYSREG registers involved in clock bring-up and learning.
pub trait ClockRegisters {
    fn facc1(&self) -> Facc1Cr;

    fn set_facc1(&mut self, value: Facc1Cr);

    fn pll_status_low(&self) -> PllStatusLowCr;

    fn pll_status_high(&self) -> PllStatusHighCr;

    fn set_pll_status_high(&mut self, value: PllStatusHighCr);

    fn pll_status(&self) -> PllStatus;

    /// Read-modify-write `MSSDDR_FACC1_CR`.
    fn modify_facc1(&mut self, f: impl FnOnce(&mut Facc1Cr)) {
        let mut value = self.facc1();
        f(&mut value);
        self.set_facc1(value);
    }

    /// Read-modify-write `MSSDDR_PLL_STATUS_HIGH_CR`.
    fn modify_pll_status_high(&mut self, f: impl FnOnce(&mut PllStatusHighCr)) {
        let mut value = self.pll_status_high();
        f(&mut value);
        self.set_pll_status_high(value);
    }
}

impl ClockRegisters for Sysreg {
    fn facc1(&self) -> Facc1Cr {
        self.mssddr_facc1_cr().read()
    }

    fn set_facc1(&mut self, value: Facc1Cr) {
        self.mssddr_facc1_cr().write_value(value);
    }

    fn pll_status_low(&self) -> PllStatusLowCr {
        self.mssddr_pll_status_low_cr().read()
    }

    fn pll_status_high(&self) -> PllStatusHighCr {
        self.mssddr_pll_status_high_cr().read()
    }

    fn set_pll_status_high(&mut self, value: PllStatusHighCr) {
        self.mssddr_pll_status_high_cr().write_value(value);
    }

    fn pll_status(&self) -> PllStatus {
        self.mssddr_pll_status().read()
    }
}

/// Log every clock domain.
pub fn log_clocks(clocks: &Clocks) {
    for (domain, freq) in clocks.iter() {
        info!("rcc: {} = {} Hz", domain.name(), freq.0);
    }
}
