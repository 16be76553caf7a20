//! Watchdog timer (WDT)
//!
//! The timeout is fixed by flash bits in the FPGA flow, software can only
//! enable, disable and refresh the watchdog. It is also the only way out of
//! an MPLL lock wait that never completes.

use crate::pac::{self, sysreg::Sysreg, wdt::Wdt};

/// Value that must be written to WDOGREFRESH to reload the counter.
pub const REFRESH_KEY: u32 = 0xAC15_DE42;

/// Watchdog driver.
pub struct Watchdog {
    regs: Wdt,
    sysreg: Sysreg,
}

impl Watchdog {
    pub fn new() -> Self {
        Self::with_regs(pac::WDT, pac::SYSREG)
    }

    pub(crate) const fn with_regs(regs: Wdt, sysreg: Sysreg) -> Self {
        Self { regs, sysreg }
    }

    /// Enable the watchdog and refresh it straight away.
    pub fn enable(&mut self) {
        self.sysreg.wdog_cr().modify(|w| w.set_enable(true));
        self.strobe();
    }

    pub fn disable(&mut self) {
        self.sysreg.wdog_cr().modify(|w| w.set_enable(false));
    }

    pub fn is_enabled(&self) -> bool {
        self.regs.wdogenable().read().enabled()
    }

    /// Current counter value.
    pub fn counter(&self) -> u32 {
        self.regs.wdogvalue().read()
    }

    /// Refresh the watchdog if the counter is inside the refresh window.
    ///
    /// Returns `false` when a refresh is not permitted yet.
    pub fn strobe(&mut self) -> bool {
        if self.regs.wdogstatus().read().refreshstatus() {
            self.regs.wdogrefresh().write_value(REFRESH_KEY);
            true
        } else {
            trace!("wdt: refresh not permitted at {}", self.counter());
            false
        }
    }
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new()
    }
}

impl embedded_hal_02::watchdog::Watchdog for Watchdog {
    fn feed(&mut self) {
        self.strobe();
    }
}

impl embedded_hal_02::watchdog::WatchdogEnable for Watchdog {
    /// The period is set by flash bits.
    type Time = ();

    fn start<T>(&mut self, _period: T)
    where
        T: Into<Self::Time>,
    {
        self.enable();
    }
}

impl embedded_hal_02::watchdog::WatchdogDisable for Watchdog {
    fn disable(&mut self) {
        Watchdog::disable(self);
    }
}
