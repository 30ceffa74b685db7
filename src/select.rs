use std::path::Path;

use crate::error::{Error, Result};

/// Name prefixes accepted by the auto-detect heuristic. Anchored at the
/// start of the name, case-sensitive; excludes loopback, container, and
/// tunnel interfaces by default.
const DEFAULT_PREFIXES: [&str; 4] = ["eth", "wlan", "enp", "wlp"];

/// Per-interface device directory used for existence checks.
const SYS_CLASS_NET: &str = "/sys/class/net";

/// Decides which interfaces a snapshot includes.
///
/// Exactly one mode is active for the lifetime of the process, fixed at
/// startup: an explicit allow-list supplied on the command line, or the
/// built-in name-prefix heuristic when no list is given.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Include interfaces whose name starts with a standard wired or
    /// wireless prefix.
    Auto,
    /// Include only interfaces named exactly (case-sensitive) in the list.
    AllowList(Vec<String>),
}

impl Selection {
    /// Build a selection from command-line positionals: an empty list means
    /// the heuristic stays active.
    pub fn from_args(names: Vec<String>) -> Self {
        if names.is_empty() {
            Self::Auto
        } else {
            Self::AllowList(names)
        }
    }

    /// Whether `name` should be included in a snapshot.
    #[must_use]
    pub fn includes(&self, name: &str) -> bool {
        match self {
            Self::Auto => DEFAULT_PREFIXES.iter().any(|p| name.starts_with(p)),
            Self::AllowList(names) => names.iter().any(|n| n == name),
        }
    }

    /// Validate every allow-list entry against the host's device registry.
    ///
    /// Performed once at startup, not per tick. The heuristic mode has
    /// nothing to validate.
    ///
    /// # Errors
    /// Returns [`Error::InterfaceNotFound`] for the first entry with no
    /// corresponding device directory.
    pub fn validate(&self) -> Result<()> {
        self.validate_in(Path::new(SYS_CLASS_NET))
    }

    /// Existence check against an explicit registry root (tests point this
    /// at a fabricated directory tree).
    pub fn validate_in(&self, registry: &Path) -> Result<()> {
        if let Self::AllowList(names) = self {
            for name in names {
                if !registry.join(name).exists() {
                    return Err(Error::interface_not_found(name));
                }
            }
        }
        Ok(())
    }
}
