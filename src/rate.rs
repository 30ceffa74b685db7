use crate::sample::Snapshot;

/// Aggregate receive/transmit byte rates for one completed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateResult {
    /// Receive rate in bytes per second.
    pub rx_rate: u64,
    /// Transmit rate in bytes per second.
    pub tx_rate: u64,
}

impl RateResult {
    /// Compute aggregate rates from two consecutive snapshots taken
    /// `interval_secs` apart (whole seconds, at least 1).
    ///
    /// Samples are matched by name; an interface present only in the
    /// current snapshot contributes nothing this interval. Division
    /// truncates toward zero.
    ///
    /// A counter that decreased since the previous snapshot (interface
    /// reset, wraparound) underflows to a huge rate. That artifact is part
    /// of the observable contract and is deliberately not clamped.
    #[must_use]
    pub fn between(prev: &Snapshot, curr: &Snapshot, interval_secs: u64) -> Self {
        let mut rx_rate: u64 = 0;
        let mut tx_rate: u64 = 0;

        for sample in curr.iter() {
            let Some(previous) = prev.get(&sample.name) else {
                continue;
            };
            rx_rate = rx_rate
                .wrapping_add(sample.rx_bytes.wrapping_sub(previous.rx_bytes) / interval_secs);
            tx_rate = tx_rate
                .wrapping_add(sample.tx_bytes.wrapping_sub(previous.tx_bytes) / interval_secs);
        }

        Self { rx_rate, tx_rate }
    }
}
