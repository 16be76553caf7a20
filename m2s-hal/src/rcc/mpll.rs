//! MSS DDR PLL (MPLL) bring-up.

use super::{ClockRegisters, Error};
use crate::utils::{wait_until, PollLimit};

/// Kick off the MPLL and switch the M3/APB clocks over to it.
///
/// The MPLL takes its reference from the fabric CCC PLL, so that one must
/// lock first. With [`PollLimit::Forever`] each lock wait spins until the PLL
/// locks and only a watchdog reset gets the system out of a PLL that never
/// does. A bounded limit turns that into an error, and nothing after the
/// failing wait is touched.
pub fn bring_up<R: ClockRegisters>(regs: &mut R, lock_wait: PollLimit) -> Result<(), Error> {
    // Libero sets the analog supply to 2.5 V regardless of the project setting.
    regs.modify_pll_status_high(|w| w.set_mode_3v3(false));

    wait_until(|| regs.pll_status().fab_pll_lock(), lock_wait).map_err(|_| {
        error!("mpll: fabric PLL did not lock");
        Error::FabricPllLockTimeout
    })?;
    debug!("mpll: fabric PLL locked");

    regs.modify_pll_status_high(|w| w.set_bypass(false));

    wait_until(|| regs.pll_status().mpll_lock(), lock_wait).map_err(|_| {
        error!("mpll: MPLL did not lock");
        Error::MpllLockTimeout
    })?;
    debug!("mpll: locked");

    // Drive M3, PCLK0 and PCLK1 from the stage 2 dividers.
    // This is what actually enables the MPLL output.
    regs.modify_facc1(|w| w.set_facc_glmux_sel(false));
    info!("mpll: running");

    Ok(())
}
