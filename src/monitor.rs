use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::rate::RateResult;
use crate::sample::{Snapshot, PROC_NET_DEV};
use crate::select::Selection;
use crate::status::StatusRecord;

/// Drives the sample/compute/emit cycle at a fixed cadence.
///
/// Single-threaded and synchronous: each tick sleeps, reads a fresh
/// snapshot, rates it against the retained previous one, and emits a
/// record. The previous snapshot is the only state carried across ticks.
pub struct Sampler {
    interval_secs: u64,
    selection: Selection,
    source: PathBuf,
}

impl Sampler {
    /// Create a sampler reading `/proc/net/dev` every `interval_secs`
    /// seconds. The interval must already be validated to be at least 1.
    pub fn new(interval_secs: u64, selection: Selection) -> Self {
        Self {
            interval_secs,
            selection,
            source: PathBuf::from(PROC_NET_DEV),
        }
    }

    /// Read from an alternative statistics table (tests use fixtures).
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Run the sampling loop, writing one record per tick to `out`.
    ///
    /// Never returns on the success path; the process is expected to be
    /// terminated externally.
    ///
    /// # Errors
    /// Returns an error if the initial read fails or matches no interface
    /// (after emitting the error record where one is due), or if `out`
    /// becomes unwritable.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut prev = match self.read_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                StatusRecord::error("Error", &err.to_string()).emit(out)?;
                return Err(err);
            }
        };
        if prev.is_empty() {
            return Err(Error::NoInterfaces);
        }
        log::info!(
            "sampling {} interface(s) every {}s",
            prev.len(),
            self.interval_secs
        );

        loop {
            thread::sleep(Duration::from_secs(self.interval_secs));
            self.tick(&mut prev, out)?;
        }
    }

    /// One sampling step: read a fresh snapshot and rate it against
    /// `prev`. A failed read emits the error record and leaves `prev`
    /// untouched for the next comparison; a read matching no interface
    /// produces no output at all. Only a successful read emits a rate
    /// record and replaces `prev`.
    fn tick<W: Write>(&self, prev: &mut Snapshot, out: &mut W) -> Result<()> {
        let curr = match self.read_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                // Statistics source went away mid-run; surface it on the
                // bar but keep the previous snapshot.
                log::warn!("tick skipped: {err}");
                StatusRecord::error("Error", &err.to_string()).emit(out)?;
                return Ok(());
            }
        };
        if curr.is_empty() {
            log::debug!("tick skipped: no interfaces matched");
            return Ok(());
        }

        let rates = RateResult::between(prev, &curr, self.interval_secs);
        StatusRecord::rates(rates).emit(out)?;
        *prev = curr;
        Ok(())
    }

    fn read_snapshot(&self) -> Result<Snapshot> {
        Snapshot::read_from(&self.source, &self.selection)
    }
}
