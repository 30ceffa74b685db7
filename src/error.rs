use std::io;

/// The error type for sampling operations.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error occurred reading a system file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to access the interface statistics source
    #[error("Failed to access {resource}: {reason}")]
    ResourceAccess { resource: String, reason: String },

    /// Requested network interface does not exist on this host
    #[error("Network interface '{name}' not found")]
    InterfaceNotFound { name: String },

    /// No interface matched the active selection
    #[error("No network interfaces matched the selection")]
    NoInterfaces,

    /// Polling interval outside the accepted range
    #[error("Invalid polling interval: {value}")]
    InvalidInterval { value: i64 },
}

impl Error {
    /// Create a new resource access error
    pub fn resource_access(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceAccess {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Create a new interface not found error
    pub fn interface_not_found(name: impl Into<String>) -> Self {
        Self::InterfaceNotFound { name: name.into() }
    }
}

/// A specialized `Result` type for sampling operations.
pub type Result<T> = std::result::Result<T, Error>;
