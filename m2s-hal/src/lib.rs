#![no_std]
#![doc = include_str!("../README.md")]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod utils;

pub mod pac;
pub mod rcc;
pub mod time;
pub mod wdt;
pub mod console;

/// HAL configuration for SmartFusion2
pub mod config {
    use crate::rcc;

    /// HAL configuration passed when initializing.
    #[non_exhaustive]
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Config {
        pub rcc: rcc::Config,
    }
}
pub use config::Config;

/// Initialize the `m2s-hal` with the provided configuration.
///
/// Locks the MPLL, switches the MSS onto it and returns the learned clock
/// frequencies.
///
/// This should only be called once at startup, otherwise it panics.
pub fn init(config: Config) -> Result<rcc::Clocks, rcc::Error> {
    let clocks = rcc::init(config.rcc)?;
    rcc::log_clocks(&clocks);
    Ok(clocks)
}
