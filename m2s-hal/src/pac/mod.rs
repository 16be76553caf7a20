//! Register blocks of the SmartFusion2 microcontroller subsystem.
//!
//! Only the blocks the HAL drives are described here. Handles are plain
//! pointer wrappers, every access is volatile.

pub mod common;
pub mod sysreg;
pub mod wdt;

/// System register block (clock, reset and configuration control).
pub const SYSREG: sysreg::Sysreg = unsafe { sysreg::Sysreg::from_ptr(0x4003_8000usize as _) };
/// Watchdog timer.
pub const WDT: wdt::Wdt = unsafe { wdt::Wdt::from_ptr(0x4000_5000usize as _) };
