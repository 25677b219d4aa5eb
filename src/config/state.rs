// Application state module
// Immutable configuration plus per-process runtime counters

use std::sync::atomic::AtomicUsize;

use super::types::Config;

/// Shared application state
///
/// Configuration is set once at startup and never mutated; the only runtime
/// state is the active connection counter.
pub struct AppState {
    pub config: Config,
    /// Number of connections currently being served
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            active_connections: AtomicUsize::new(0),
        }
    }
}
