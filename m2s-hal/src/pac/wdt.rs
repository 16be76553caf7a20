//! WDT: watchdog timer.
//!
//! Most of these registers are read-only. The values are set either in the
//! SYSREG block or fixed by flash bits through the FPGA flow.

use super::common::{Reg, R, RW, W};

/// WDT register block.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Wdt {
    ptr: *mut u8,
}
unsafe impl Send for Wdt {}
unsafe impl Sync for Wdt {}

impl Wdt {
    #[allow(clippy::missing_safety_doc)]
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }

    /// Current counter value.
    #[inline(always)]
    pub const fn wdogvalue(self) -> Reg<u32, R> {
        unsafe { Reg::from_ptr(self.ptr.add(0x00) as _) }
    }

    /// Reload value.
    #[inline(always)]
    pub const fn wdogload(self) -> Reg<u32, R> {
        unsafe { Reg::from_ptr(self.ptr.add(0x04) as _) }
    }

    /// Maximum value at which a refresh is permitted.
    #[inline(always)]
    pub const fn wdogmvrp(self) -> Reg<u32, R> {
        unsafe { Reg::from_ptr(self.ptr.add(0x08) as _) }
    }

    /// Refresh key register.
    #[inline(always)]
    pub const fn wdogrefresh(self) -> Reg<u32, W> {
        unsafe { Reg::from_ptr(self.ptr.add(0x0c) as _) }
    }

    #[inline(always)]
    pub const fn wdogenable(self) -> Reg<regs::Wdogenable, R> {
        unsafe { Reg::from_ptr(self.ptr.add(0x10) as _) }
    }

    #[inline(always)]
    pub const fn wdogcontrol(self) -> Reg<regs::Wdogcontrol, RW> {
        unsafe { Reg::from_ptr(self.ptr.add(0x14) as _) }
    }

    #[inline(always)]
    pub const fn wdogstatus(self) -> Reg<regs::Wdogstatus, R> {
        unsafe { Reg::from_ptr(self.ptr.add(0x18) as _) }
    }

    /// Raw interrupt status, write one to clear.
    #[inline(always)]
    pub const fn wdogris(self) -> Reg<regs::Wdogris, RW> {
        unsafe { Reg::from_ptr(self.ptr.add(0x1c) as _) }
    }
}

pub mod regs {
    #[allow(unused_macros)]
    macro_rules! panic {
        ($($x:tt)*) => {
            ::core::panic!($($x)*)
        };
    }
    #[allow(unused_macros)]
    macro_rules! assert {
        ($($x:tt)*) => {
            ::core::assert!($($x)*)
        };
    }

    use bitfield_struct::bitfield;

    #[bitfield(u32, defmt = cfg(feature = "defmt"))]
    #[derive(PartialEq, Eq)]
    pub struct Wdogenable {
        pub enabled: bool,
        #[bits(31)]
        __: u32,
    }

    #[bitfield(u32, defmt = cfg(feature = "defmt"))]
    #[derive(PartialEq, Eq)]
    pub struct Wdogcontrol {
        pub timeoutinten: bool,
        pub wakeupinten: bool,
        pub mode: bool,
        #[bits(29)]
        __: u32,
    }

    #[bitfield(u32, defmt = cfg(feature = "defmt"))]
    #[derive(PartialEq, Eq)]
    pub struct Wdogstatus {
        /// Counter is below WDOGMVRP, a refresh is allowed
        pub refreshstatus: bool,
        #[bits(31)]
        __: u32,
    }

    #[bitfield(u32, defmt = cfg(feature = "defmt"))]
    #[derive(PartialEq, Eq)]
    pub struct Wdogris {
        pub timeoutrs: bool,
        pub wakeuprs: bool,
        #[bits(30)]
        __: u32,
    }
}
