//! Configuration module for holdr
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HOLDR_*)
//! 3. Project config (holdr.toml)
//! 4. User config (~/.config/holdr/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, Verbosity};
