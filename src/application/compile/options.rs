//! Compile Options
//!
//! Configuration types for compile operations.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::services::DEFAULT_WIDGET_PACKAGE;
use crate::error::{HoldrError, HoldrResult};

/// Options for the compile use case, fixed for the compiler's lifetime
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Root directory for generated sources
    pub output_dir: PathBuf,
    /// Resource roots of the project; pruning keeps holders still backed by any of them
    pub res_dirs: Vec<PathBuf>,
    /// Base package of the application; holders live in `<package>.holdr`
    pub package: String,
    /// Include elements with an id unless they opt out
    pub default_include: bool,
    /// Package prepended to unqualified tags
    pub widget_package: String,
    /// Parser threads (0 = rayon default, 1 = sequential)
    pub jobs: usize,
    /// Delete holders whose layout no longer yields one
    pub prune_stale: bool,
    /// Rewrite outputs even when their content is unchanged
    pub write_unchanged: bool,
}

impl CompileOptions {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            output_dir: PathBuf::from("build/generated/holdr"),
            res_dirs: vec![PathBuf::from("src/main/res")],
            package: package.into(),
            default_include: true,
            widget_package: DEFAULT_WIDGET_PACKAGE.to_string(),
            jobs: 0,
            prune_stale: false,
            write_unchanged: false,
        }
    }

    /// Options from a loaded configuration; the package is mandatory
    pub fn from_config(config: &Config) -> HoldrResult<Self> {
        let package = config
            .package
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(HoldrError::MissingPackage)?;

        Ok(Self::new(package)
            .with_output_dir(config.output_dir.clone())
            .with_res_dirs(config.res_dirs.clone())
            .with_default_include(config.default_include)
            .with_widget_package(config.widget_package.clone())
            .with_jobs(config.jobs)
            .with_prune_stale(config.prune_stale)
            .with_write_unchanged(config.write_unchanged))
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_res_dirs(mut self, res_dirs: Vec<PathBuf>) -> Self {
        self.res_dirs = res_dirs;
        self
    }

    pub fn with_default_include(mut self, default_include: bool) -> Self {
        self.default_include = default_include;
        self
    }

    pub fn with_widget_package(mut self, widget_package: impl Into<String>) -> Self {
        self.widget_package = widget_package.into();
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_prune_stale(mut self, prune: bool) -> Self {
        self.prune_stale = prune;
        self
    }

    pub fn with_write_unchanged(mut self, write_unchanged: bool) -> Self {
        self.write_unchanged = write_unchanged;
        self
    }
}
