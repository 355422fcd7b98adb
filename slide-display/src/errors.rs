//! Error types for display-surface setup.

use thiserror::Error;

/// Errors that abort construction of a [`DisplayWindow`](crate::DisplayWindow).
///
/// Everything that can go wrong after construction is handled internally
/// (timer retry, documented no-ops), so this enum only covers configuration
/// problems.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The host could not enumerate a single monitor.
    #[error("No monitors available on the default display")]
    NoMonitors,

    /// An explicit monitor index points past the last monitor.
    #[error("Monitor index {index} out of range ({count} monitor(s) available)")]
    MonitorOutOfRange { index: usize, count: usize },
}
