use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::select::Selection;

/// Interface statistics table exposed by the kernel.
pub const PROC_NET_DEV: &str = "/proc/net/dev";

/// Upper bound on interfaces per snapshot. Keeps memory bounded even if the
/// statistics source is malformed or the host has an absurd device count.
pub const MAX_INTERFACES: usize = 32;

/// Interface names longer than this are truncated.
const MAX_NAME_LEN: usize = 15;

/// Number of numeric counter fields per `/proc/net/dev` record.
const FIELDS_PER_LINE: usize = 16;

/// One interface's cumulative byte counters at one point in time.
///
/// Counters count from interface reset/boot and normally only grow, but may
/// wrap or restart from zero when the interface resets. That case is not
/// guarded against here; see [`crate::rate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSample {
    pub name: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// A complete set of per-interface counters captured at one instant.
///
/// Names are unique within a snapshot. Entry order follows kernel
/// enumeration order and may differ between snapshots; lookups go by name.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    samples: Vec<InterfaceSample>,
}

impl Snapshot {
    /// Read a fresh snapshot from a `/proc/net/dev`-formatted statistics
    /// file, keeping only interfaces accepted by `selection`. Production
    /// callers pass [`PROC_NET_DEV`]; tests point this at a fixture. The
    /// file is opened and fully consumed on every call.
    ///
    /// # Errors
    /// Returns [`Error::ResourceAccess`] if the statistics table cannot be
    /// opened.
    pub fn read_from(path: &Path, selection: &Selection) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::resource_access(path.display().to_string(), e.to_string()))?;
        Self::parse(BufReader::new(file), selection)
    }

    /// Parse a `/proc/net/dev`-formatted table: two header lines, then one
    /// `name: <16 numeric fields>` record per interface. Field 1 is rx
    /// bytes, field 9 is tx bytes; the rest are ignored. Malformed lines
    /// are skipped, and interfaces beyond [`MAX_INTERFACES`] are dropped.
    pub fn parse<R: BufRead>(reader: R, selection: &Selection) -> Result<Self> {
        let mut samples = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if samples.len() >= MAX_INTERFACES {
                break;
            }

            // Header lines carry no colon-terminated interface name.
            let Some((name, counters)) = line.split_once(':') else {
                continue;
            };
            let name = name.trim_start();

            if !selection.includes(name) {
                continue;
            }

            let fields: std::result::Result<Vec<u64>, _> = counters
                .split_whitespace()
                .take(FIELDS_PER_LINE)
                .map(str::parse)
                .collect();
            let Ok(fields) = fields else {
                log::debug!("skipping malformed statistics line for {name}");
                continue;
            };
            if fields.len() < FIELDS_PER_LINE {
                log::debug!("skipping short statistics line for {name}");
                continue;
            }

            samples.push(InterfaceSample {
                name: truncate_name(name),
                rx_bytes: fields[0],
                tx_bytes: fields[8],
            });
        }

        Ok(Self { samples })
    }

    /// Number of interfaces captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Find a sample by interface name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&InterfaceSample> {
        self.samples.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InterfaceSample> {
        self.samples.iter()
    }

    #[cfg(test)]
    pub(crate) fn from_samples(samples: Vec<InterfaceSample>) -> Self {
        Self { samples }
    }
}

fn truncate_name(name: &str) -> String {
    if name.len() <= MAX_NAME_LEN {
        name.to_string()
    } else {
        name.chars().take(MAX_NAME_LEN).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo: 2776770   11307    0    0    0     0          0         0  2776770   11307    0    0    0     0       0          0
  eth0: 1500000    9988    0    0    0     0          0         0   750000    8102    0    0    0     0       0          0
 wlan0:  123456     400    0    0    0     0          0         0    65432     300    0    0    0     0       0          0
";

    #[test]
    fn parses_selected_interfaces() {
        let snap = Snapshot::parse(TABLE.as_bytes(), &Selection::Auto).unwrap();
        assert_eq!(snap.len(), 2);

        let eth0 = snap.get("eth0").unwrap();
        assert_eq!(eth0.rx_bytes, 1_500_000);
        assert_eq!(eth0.tx_bytes, 750_000);

        let wlan0 = snap.get("wlan0").unwrap();
        assert_eq!(wlan0.rx_bytes, 123_456);
        assert_eq!(wlan0.tx_bytes, 65_432);

        // Loopback fails the heuristic.
        assert!(snap.get("lo").is_none());
    }

    #[test]
    fn allow_list_overrides_heuristic() {
        let sel = Selection::AllowList(vec!["lo".into()]);
        let snap = Snapshot::parse(TABLE.as_bytes(), &sel).unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.get("lo").unwrap().rx_bytes, 2_776_770);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let table = "\
header one
header two
  eth0: 100 0 0 0 0 0 0 0 50 0 0 0 0 0 0 0
  eth1: 100 0 0 nonsense 0 0 0 0 50 0 0 0 0 0 0 0
  eth2: 100 0 0
line without any separator
  eth3: 200 0 0 0 0 0 0 0 75 0 0 0 0 0 0 0
";
        let snap = Snapshot::parse(table.as_bytes(), &Selection::Auto).unwrap();
        assert_eq!(snap.len(), 2);
        assert!(snap.get("eth0").is_some());
        assert!(snap.get("eth3").is_some());
    }

    #[test]
    fn long_names_are_truncated() {
        let table = "h1\nh2\n  eth0123456789abcdef: 1 0 0 0 0 0 0 0 2 0 0 0 0 0 0 0\n";
        let snap = Snapshot::parse(table.as_bytes(), &Selection::Auto).unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.iter().next().unwrap().name, "eth0123456789ab");
    }

    #[test]
    fn capacity_is_capped() {
        let mut table = String::from("h1\nh2\n");
        for i in 0..40 {
            table.push_str(&format!(
                "  eth{i}: 1 0 0 0 0 0 0 0 2 0 0 0 0 0 0 0\n"
            ));
        }
        let snap = Snapshot::parse(table.as_bytes(), &Selection::Auto).unwrap();
        assert_eq!(snap.len(), MAX_INTERFACES);
    }

    #[test]
    fn missing_table_is_a_resource_error() {
        let err = Snapshot::read_from(Path::new("/nonexistent/net/dev"), &Selection::Auto)
            .unwrap_err();
        assert!(matches!(err, Error::ResourceAccess { .. }));
    }
}
