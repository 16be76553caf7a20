/// Upper bound for a hardware poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollLimit {
    /// Spin until the condition holds. A condition that never holds hangs
    /// the caller until an external reset.
    #[default]
    Forever,
    /// Give up after this many polls. `Iterations(0)` fails without polling.
    Iterations(u32),
}

/// Blocks until `condition` becomes true or the poll limit is reached.
#[inline]
pub fn wait_until<F>(mut condition: F, limit: PollLimit) -> Result<(), ()>
where
    F: FnMut() -> bool,
{
    match limit {
        PollLimit::Forever => {
            while !condition() {
                core::hint::spin_loop();
            }
            Ok(())
        }
        PollLimit::Iterations(max) => {
            for _ in 0..max {
                if condition() {
                    return Ok(());
                }
                core::hint::spin_loop();
            }
            Err(())
        }
    }
}
