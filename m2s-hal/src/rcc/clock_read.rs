//! Clock learning: rebuild the clock tree from the divider registers.
//!
//! The registers are captured once into a [`RegisterSnapshot`], then the tree
//! is evaluated from the snapshot alone, parents before children.

use super::divisor::decode_field;
use super::{ClockDomain, ClockRegisters, Clocks, Facc1Cr, PllStatusHighCr, PllStatusLowCr};
use crate::time::Hertz;

/// The three control words the clock tree depends on, read at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterSnapshot {
    /// `MSSDDR_FACC1_CR`
    pub facc1: Facc1Cr,
    /// `MSSDDR_PLL_STATUS_LOW_CR`
    pub pll_low: PllStatusLowCr,
    /// `MSSDDR_PLL_STATUS_HIGH_CR`
    pub pll_high: PllStatusHighCr,
}

impl RegisterSnapshot {
    /// Build a snapshot from raw register values.
    pub const fn from_bits(facc1: u32, pll_low: u32, pll_high: u32) -> Self {
        Self {
            facc1: Facc1Cr::from_bits(facc1),
            pll_low: PllStatusLowCr::from_bits(pll_low),
            pll_high: PllStatusHighCr::from_bits(pll_high),
        }
    }

    /// Capture the current register contents.
    pub fn read<R: ClockRegisters>(regs: &R) -> Self {
        Self {
            facc1: regs.facc1(),
            pll_low: regs.pll_status_low(),
            pll_high: regs.pll_status_high(),
        }
    }

    /// Decoded FACC_PLL_DIVQ.
    ///
    /// Only applied to the MPLL output when FSE is set.
    pub const fn divq(&self) -> u32 {
        decode_field(self.pll_low.divq(), true)
    }

    /// MPLL output for reference `sysref`.
    ///
    /// Divides before multiplying so the intermediate stays within 32 bits
    /// for sane factors. Larger products wrap like they do on the target.
    pub fn mpll_output(&self, sysref: Hertz) -> Hertz {
        let vco = sysref / (self.pll_low.divr() as u32 + 1) * (self.pll_low.divf() as u32 + 1);
        if self.pll_high.fse() {
            vco / self.divq()
        } else {
            // External divide-by-2 sits in the alternate feedback path.
            vco * 2
        }
    }

    /// Frequency of `domain` given the frequency of its parent.
    fn stage(&self, domain: ClockDomain, parent: Hertz) -> Hertz {
        let facc1 = self.facc1;
        match domain {
            ClockDomain::Sysref => parent,
            ClockDomain::Ddr => self.mpll_output(parent),
            ClockDomain::ClkA => parent / (facc1.divisor_a() as u32 + 1),
            ClockDomain::Systick => parent / decode_field(facc1.m3_clk_divisor(), false),
            ClockDomain::Pclk0 => parent / decode_field(facc1.apb0_divisor(), false),
            ClockDomain::Pclk1 => parent / decode_field(facc1.apb1_divisor(), false),
            ClockDomain::Fic0 => parent / decode_field(facc1.fic0_divisor(), false),
            ClockDomain::Fic1 => parent / decode_field(facc1.fic1_divisor(), false),
            ClockDomain::DdrFic => parent / decode_field(facc1.ddr_fic_divisor(), false),
        }
    }
}

/// Evaluate the clock tree for reference `sysref` and register state `snapshot`.
///
/// No plausibility checks are made, a malformed configuration yields whatever
/// the dividers say.
pub fn derive(sysref: Hertz, snapshot: &RegisterSnapshot) -> Clocks {
    let mut clocks = Clocks::ZERO;
    for domain in ClockDomain::ALL {
        let freq = match domain.parent() {
            None => sysref,
            Some(parent) => snapshot.stage(domain, clocks.get(parent)),
        };
        clocks.set(domain, freq);
    }
    clocks
}

/// Snapshot `regs` and evaluate the clock tree.
///
/// Only meaningful once the MPLL is locked and driving the tree, see
/// [`bring_up`](super::bring_up).
pub fn learn<R: ClockRegisters>(regs: &R, sysref: Hertz) -> Clocks {
    let snapshot = RegisterSnapshot::read(regs);
    trace!(
        "rcc: facc1=0x{:08X} pll_low=0x{:08X} pll_high=0x{:08X}",
        snapshot.facc1.into_bits(),
        snapshot.pll_low.into_bits(),
        snapshot.pll_high.into_bits()
    );
    derive(sysref, &snapshot)
}
