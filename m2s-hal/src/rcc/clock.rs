//! Clock domains, the frequency store, and constants.

use crate::time::Hertz;

// =============================================================================
// Constants
// =============================================================================

/// System reference clock of the reference board, as delivered by the fabric CCC.
///
/// There is no way to measure it at run time, so it is a build-time fact.
pub const DEFAULT_SYSREF: Hertz = Hertz(100_000_000);

// =============================================================================
// Clock domains
// =============================================================================

/// A node of the MSS clock tree.
///
/// ```text
///                +------+       +----------+
/// SYSREF ------> | DIVR | ----> | REF      |
///                +------+       |          |        +------+
///                               | PLL  OUT | --+--> | DIVQ | --+--> DDR
///                +------+       |          |   |    +------+   |
///          +---> | DIVF | ----> | FB       |   |               |
///          |     +------+       +----------+   |               |
///          |               /|                  |               |
///          |              /1| <----------------+               |
///          +------------ |  | FSE                   +-----+    |
///                         \0| <-------------------- | / 2 | <--+
///                          \|                       +-----+
///
/// DDR --> DIVISOR_A --> CLK_A --+--> M3_CLK_DIVISOR  --> SYSTICK
///                               +--> APB0_DIVISOR    --> PCLK0
///                               +--> APB1_DIVISOR    --> PCLK1
///                               +--> FIC_0_DIVISOR   --> FIC0
///                               +--> FIC_1_DIVISOR   --> FIC1
///                               +--> DDR_FIC_DIVISOR --> DDR_FIC
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ClockDomain {
    /// System reference from the fabric CCC
    Sysref = 0,
    /// MPLL output, DDR controller clock
    Ddr = 1,
    /// Common source of the stage 2 dividers
    ClkA = 2,
    /// Cortex-M3 core and SysTick clock
    Systick = 3,
    /// APB bus 0
    Pclk0 = 4,
    /// APB bus 1
    Pclk1 = 5,
    /// Fabric interface controller 0
    Fic0 = 6,
    /// Fabric interface controller 1
    Fic1 = 7,
    /// DDR fabric interface controller
    DdrFic = 8,
}

impl ClockDomain {
    pub const COUNT: usize = 9;

    /// Every domain, each listed after its parent.
    pub const ALL: [ClockDomain; Self::COUNT] = [
        ClockDomain::Sysref,
        ClockDomain::Ddr,
        ClockDomain::ClkA,
        ClockDomain::Systick,
        ClockDomain::Pclk0,
        ClockDomain::Pclk1,
        ClockDomain::Fic0,
        ClockDomain::Fic1,
        ClockDomain::DdrFic,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The domain this one is divided down from. `None` for the reference.
    pub const fn parent(self) -> Option<ClockDomain> {
        match self {
            ClockDomain::Sysref => None,
            ClockDomain::Ddr => Some(ClockDomain::Sysref),
            ClockDomain::ClkA => Some(ClockDomain::Ddr),
            ClockDomain::Systick
            | ClockDomain::Pclk0
            | ClockDomain::Pclk1
            | ClockDomain::Fic0
            | ClockDomain::Fic1
            | ClockDomain::DdrFic => Some(ClockDomain::ClkA),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ClockDomain::Sysref => "sysref",
            ClockDomain::Ddr => "ddr",
            ClockDomain::ClkA => "clk_a",
            ClockDomain::Systick => "systick",
            ClockDomain::Pclk0 => "pclk0",
            ClockDomain::Pclk1 => "pclk1",
            ClockDomain::Fic0 => "fic0",
            ClockDomain::Fic1 => "fic1",
            ClockDomain::DdrFic => "ddr_fic",
        }
    }
}

/// A raw domain index outside the known set.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidDomain(pub u8);

impl TryFrom<u8> for ClockDomain {
    type Error = InvalidDomain;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        ClockDomain::ALL
            .get(index as usize)
            .copied()
            .ok_or(InvalidDomain(index))
    }
}

// =============================================================================
// Clocks struct
// =============================================================================

/// Frequencies of every clock domain.
///
/// Built once by [`derive`](super::derive) and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clocks {
    freqs: [Hertz; ClockDomain::COUNT],
}

impl Clocks {
    pub(crate) const ZERO: Self = Self {
        freqs: [Hertz(0); ClockDomain::COUNT],
    };

    /// Frequency of `domain`.
    pub const fn get(&self, domain: ClockDomain) -> Hertz {
        self.freqs[domain.index()]
    }

    /// Frequency of the domain with raw index `index`.
    ///
    /// Unknown indices read as 0 Hz, the same as a domain that is not
    /// clocked. Use [`ClockDomain::try_from`] first to tell them apart.
    pub fn get_by_index(&self, index: u8) -> Hertz {
        self.freqs.get(index as usize).copied().unwrap_or(Hertz(0))
    }

    /// Clock feeding the console UART.
    pub const fn console_clock(&self) -> Hertz {
        self.get(ClockDomain::Pclk0)
    }

    /// `(domain, frequency)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (ClockDomain, Hertz)> + '_ {
        ClockDomain::ALL.iter().map(move |&d| (d, self.get(d)))
    }

    pub(crate) fn set(&mut self, domain: ClockDomain, freq: Hertz) {
        self.freqs[domain.index()] = freq;
    }
}
