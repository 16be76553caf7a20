//! Clock configuration and initialization.

use core::sync::atomic::{AtomicBool, Ordering};

use super::{bring_up, learn, Clocks, Error, DEFAULT_SYSREF};
use crate::pac;
use crate::time::Hertz;
use crate::utils::PollLimit;

/// Set by the first `init()`.
static CLOCKS_INIT: AtomicBool = AtomicBool::new(false);

/// Clock configuration
///
/// Defaults match the reference board: 100 MHz SYSREF and lock waits
/// without a bound.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Frequency of the system reference clock from the fabric CCC.
    pub sysref: Hertz,
    /// Bound for each of the two PLL lock waits.
    pub lock_wait: PollLimit,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            sysref: DEFAULT_SYSREF,
            lock_wait: PollLimit::Forever,
        }
    }

    pub const fn with_sysref(mut self, sysref: Hertz) -> Self {
        self.sysref = sysref;
        self
    }

    pub const fn with_lock_wait(mut self, lock_wait: PollLimit) -> Self {
        self.lock_wait = lock_wait;
        self
    }
}

/// Bring up the MPLL and learn the clock tree.
///
/// Runs with interrupts masked. The clock store is filled exactly once per
/// boot: a failed bring-up cannot be retried without a reset.
///
/// # Panics
///
/// Panics if called a second time.
pub(crate) fn init(config: Config) -> Result<Clocks, Error> {
    assert!(
        !CLOCKS_INIT.swap(true, Ordering::AcqRel),
        "rcc: init() called twice"
    );

    critical_section::with(|_cs| {
        let mut sysreg = pac::SYSREG;
        bring_up(&mut sysreg, config.lock_wait)?;
        // Let the mux switch settle before the dividers are read back.
        cortex_m::asm::dsb();
        Ok(learn(&sysreg, config.sysref))
    })
}
