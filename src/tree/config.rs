//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Sort siblings by file name. When false, entries come in the order
    /// the filesystem returns them.
    pub sorted: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self { sorted: true }
    }
}
