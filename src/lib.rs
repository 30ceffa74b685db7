//! # netspeed
//!
//! A periodic network-bandwidth sampler for status-bar widgets.
//!
//! The crate samples the kernel's per-interface byte counters at a fixed
//! interval, differences consecutive snapshots into aggregate
//! receive/transmit rates, and emits one compact JSON line per tick:
//!
//! ```text
//! {"text": "12.3K  1.5M "}
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use netspeed::{Sampler, Selection};
//!
//! let sampler = Sampler::new(1, Selection::Auto);
//! sampler.run(&mut std::io::stdout().lock())?;
//! # Ok::<(), netspeed::Error>(())
//! ```
//!
//! Interfaces are chosen either by an explicit allow-list (validated
//! against `/sys/class/net` at startup) or, by default, by a name-prefix
//! heuristic that keeps standard wired and wireless devices and drops
//! loopback, container, and tunnel interfaces.

mod error;

pub mod monitor;
pub mod rate;
pub mod sample;
pub mod select;
pub mod status;

// Re-export core types
pub use error::{Error, Result};
pub use monitor::Sampler;
pub use rate::RateResult;
pub use sample::{InterfaceSample, Snapshot, MAX_INTERFACES, PROC_NET_DEV};
pub use select::Selection;
pub use status::{human_readable, StatusRecord};
