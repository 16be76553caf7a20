//! SYSREG: MSS system registers.

use super::common::{Reg, R, RW};

/// SYSREG register block.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Sysreg {
    ptr: *mut u8,
}
unsafe impl Send for Sysreg {}
unsafe impl Sync for Sysreg {}

impl Sysreg {
    #[allow(clippy::missing_safety_doc)]
    #[inline(always)]
    pub const unsafe fn from_ptr(ptr: *mut ()) -> Self {
        Self { ptr: ptr as _ }
    }

    #[inline(always)]
    pub const fn as_ptr(&self) -> *mut () {
        self.ptr as _
    }

    /// Watchdog configuration.
    #[inline(always)]
    pub const fn wdog_cr(self) -> Reg<regs::WdogCr, RW> {
        unsafe { Reg::from_ptr(self.ptr.add(0x06c) as _) }
    }

    /// MPLL factors, programmed by the FPGA design flow.
    #[inline(always)]
    pub const fn mssddr_pll_status_low_cr(self) -> Reg<regs::PllStatusLowCr, RW> {
        unsafe { Reg::from_ptr(self.ptr.add(0x090) as _) }
    }

    /// MPLL mode, bypass and feedback control.
    #[inline(always)]
    pub const fn mssddr_pll_status_high_cr(self) -> Reg<regs::PllStatusHighCr, RW> {
        unsafe { Reg::from_ptr(self.ptr.add(0x094) as _) }
    }

    /// Fabric alignment clock controller dividers.
    #[inline(always)]
    pub const fn mssddr_facc1_cr(self) -> Reg<regs::Facc1Cr, RW> {
        unsafe { Reg::from_ptr(self.ptr.add(0x098) as _) }
    }

    /// PLL lock status.
    #[inline(always)]
    pub const fn mssddr_pll_status(self) -> Reg<regs::PllStatus, R> {
        unsafe { Reg::from_ptr(self.ptr.add(0x150) as _) }
    }
}

pub mod regs {
    // `bitfield-struct` setters are `const fn` and call `panic!`/`assert!`.
    // Shadow the crate-level logging macros so the generated code uses `core`.
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
    pub struct WdogCr {
        /// [0] ENABLE
        pub enable: bool,
        /// [1] MODE: 0 = reset on timeout, 1 = interrupt
        pub mode: bool,
        #[bits(30)]
        __: u32,
    }

    #[bitfield(u32, defmt = cfg(feature = "defmt"))]
    #[derive(PartialEq, Eq)]
    pub struct PllStatusLowCr {
        /// [5:0] FACC_PLL_DIVR, reference divider minus one
        #[bits(6)]
        pub divr: u8,
        /// [15:6] FACC_PLL_DIVF, feedback divider minus one
        #[bits(10)]
        pub divf: u16,
        /// [18:16] FACC_PLL_DIVQ, output stage divider (extended encoding)
        #[bits(3)]
        pub divq: u8,
        /// [22:19] FACC_PLL_RANGE
        #[bits(4)]
        pub range: u8,
        /// [25:23] FACC_PLL_LOCKWIN
        #[bits(3)]
        pub lockwin: u8,
        /// [29:26] FACC_PLL_LOCKCNT
        #[bits(4)]
        pub lockcnt: u8,
        #[bits(2)]
        __: u8,
    }

    #[bitfield(u32, defmt = cfg(feature = "defmt"))]
    #[derive(PartialEq, Eq)]
    pub struct PllStatusHighCr {
        /// [0] FACC_PLL_BYPASS
        pub bypass: bool,
        /// [1] FACC_PLL_MODE_1V2
        pub mode_1v2: bool,
        /// [2] FACC_PLL_MODE_3V3, analog supply select
        pub mode_3v3: bool,
        /// [3] FACC_PLL_FSE, feedback taken from the PLL output
        pub fse: bool,
        /// [4] FACC_PLL_PD
        pub pd: bool,
        /// [5] FACC_PLL_SSE
        pub sse: bool,
        /// [7:6] FACC_PLL_SSMD
        #[bits(2)]
        pub ssmd: u8,
        /// [12:8] FACC_PLL_SSMF
        #[bits(5)]
        pub ssmf: u8,
        #[bits(19)]
        __: u32,
    }

    #[bitfield(u32, defmt = cfg(feature = "defmt"))]
    #[derive(PartialEq, Eq)]
    pub struct Facc1Cr {
        /// [1:0] DIVISOR_A, CLK_A = CLK_DDR / (DIVISOR_A + 1)
        #[bits(2)]
        pub divisor_a: u8,
        /// [4:2] APB0_DIVISOR
        #[bits(3)]
        pub apb0_divisor: u8,
        /// [7:5] APB1_DIVISOR
        #[bits(3)]
        pub apb1_divisor: u8,
        /// [8] DDR_CLK_EN
        pub ddr_clk_en: bool,
        /// [11:9] M3_CLK_DIVISOR
        #[bits(3)]
        pub m3_clk_divisor: u8,
        /// [12] FACC_GLMUX_SEL: 1 = M3/APB clocks bypass the stage 2 dividers
        pub facc_glmux_sel: bool,
        /// [15:13] FIC_0_DIVISOR
        #[bits(3)]
        pub fic0_divisor: u8,
        /// [18:16] FIC_1_DIVISOR
        #[bits(3)]
        pub fic1_divisor: u8,
        /// [21:19] DDR_FIC_DIVISOR
        #[bits(3)]
        pub ddr_fic_divisor: u8,
        #[bits(10)]
        __: u16,
    }

    #[bitfield(u32, defmt = cfg(feature = "defmt"))]
    #[derive(PartialEq, Eq)]
    pub struct PllStatus {
        /// [0] fabric CCC PLL locked
        pub fab_pll_lock: bool,
        /// [1] MPLL locked
        pub mpll_lock: bool,
        /// [2] RC oscillator divided by two
        pub rcosc_div2: bool,
        #[bits(29)]
        __: u32,
    }
}
