//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HoldrResult;

use super::loader::{self, ConfigWarning};

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level, ordered from least to most output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a level name; unknown names fall back to `Normal`
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base package of the application (`com.example.app`)
    #[serde(default)]
    pub package: Option<String>,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_res_dirs")]
    pub res_dirs: Vec<PathBuf>,

    /// Include elements with an id unless they opt out
    #[serde(default = "default_true")]
    pub default_include: bool,

    /// Package prepended to unqualified tags
    #[serde(default = "default_widget_package")]
    pub widget_package: String,

    /// Parser threads; 0 lets rayon decide
    #[serde(default)]
    pub jobs: usize,

    #[serde(default)]
    pub prune_stale: bool,

    #[serde(default)]
    pub write_unchanged: bool,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: None,
            output_dir: default_output_dir(),
            res_dirs: default_res_dirs(),
            default_include: true,
            widget_package: default_widget_package(),
            jobs: 0,
            prune_stale: false,
            write_unchanged: false,
            output: OutputConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build/generated/holdr")
}

fn default_res_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("src/main/res")]
}

fn default_widget_package() -> String {
    crate::domain::services::DEFAULT_WIDGET_PACKAGE.to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HoldrResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> HoldrResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (HOLDR_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
