use std::io::{self, Write};

use serde::Serialize;

use crate::rate::RateResult;

/// Unit suffixes for decimal (SI) scaling, bytes through petabytes.
const UNITS: [&str; 6] = ["B", "K", "M", "G", "T", "P"];

const DECIMAL_BASE: f64 = 1000.0;

/// Render a byte count or byte rate as a compact human-readable string.
///
/// Values below 1000 render as the plain integer plus `B`; larger values
/// are divided by 1000 (decimal scaling, not 1024) until they drop below
/// 1000 or the largest unit is reached, then rendered with one fractional
/// digit. At most 15 characters.
#[must_use]
pub fn human_readable(bytes: u64) -> String {
    if bytes < DECIMAL_BASE as u64 {
        return format!("{bytes}{}", UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= DECIMAL_BASE && unit < UNITS.len() - 1 {
        value /= DECIMAL_BASE;
        unit += 1;
    }

    format!("{value:.1}{}", UNITS[unit])
}

/// One status-bar record, emitted as a single JSON line.
///
/// The success shape carries only `text`; the error shape adds a tooltip
/// and an `error` class for the widget's styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl StatusRecord {
    /// Success record: the two formatted rates, each right-aligned to four
    /// columns so the widget text keeps a stable width.
    #[must_use]
    pub fn rates(rates: RateResult) -> Self {
        let rx = human_readable(rates.rx_rate);
        let tx = human_readable(rates.tx_rate);
        Self {
            text: format!("{rx:>4}  {tx:>4} "),
            tooltip: None,
            class: None,
        }
    }

    /// Error record: warning glyph plus a short label, with the detail in
    /// the tooltip.
    #[must_use]
    pub fn error(label: &str, tooltip: &str) -> Self {
        Self {
            text: format!("\u{26a0} {label}"),
            tooltip: Some(tooltip.to_string()),
            class: Some("error".to_string()),
        }
    }

    /// Serialize the whole record in memory, then write it as one
    /// newline-terminated line and flush so a polling consumer sees it
    /// immediately.
    pub fn emit<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let line = serde_json::to_string(self).map_err(io::Error::from)?;
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}
