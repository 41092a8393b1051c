//! Command implementations for the holdr binary

mod class_name;
mod compile;
mod watch;

pub use class_name::cmd_class_name;
pub use compile::{cmd_compile, cmd_incremental};
pub use watch::cmd_watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use holdr::application::CompileOptions;
use holdr::config::{Config, ConfigWarning, Verbosity, PROJECT_CONFIG_FILE};
use holdr::domain::ports::CompileEventSink;
use holdr::infrastructure::{ConsoleEventSink, JsonEventSink};

use crate::cli::{Cli, CompileArgs};

/// Settings shared by every command, resolved from flags and config
pub struct Session {
    pub config: Config,
    pub json: bool,
    pub verbosity: Verbosity,
}

impl Session {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref(), cli.json)?;
        let verbosity = if cli.quiet {
            Verbosity::Quiet
        } else {
            match cli.verbose {
                0 => config.output.verbosity,
                1 => Verbosity::Verbose,
                _ => Verbosity::Debug,
            }
        };

        Ok(Self {
            config,
            json: cli.json,
            verbosity,
        })
    }

    /// Config with command-line overrides applied
    pub fn effective_config(&self, args: &CompileArgs) -> Config {
        let mut config = self.config.clone();
        if !args.res_dirs.is_empty() {
            config.res_dirs = args.res_dirs.clone();
        }
        if let Some(dir) = &args.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(package) = &args.package {
            config.package = Some(package.clone());
        }
        if args.no_default_include {
            config.default_include = false;
        }
        if let Some(jobs) = args.jobs {
            config.jobs = jobs;
        }
        if args.prune {
            config.prune_stale = true;
        }
        config
    }

    pub fn compile_options(&self, config: &Config) -> Result<CompileOptions> {
        Ok(CompileOptions::from_config(config)?)
    }

    pub fn event_sink(&self) -> Arc<dyn CompileEventSink> {
        if self.json {
            Arc::new(JsonEventSink::stdout())
        } else {
            Arc::new(ConsoleEventSink::stderr(self.verbosity))
        }
    }
}

/// Explicit `--config`, else `./holdr.toml`, else user config and defaults
fn load_config(explicit: Option<&Path>, json: bool) -> Result<Config> {
    let path: Option<PathBuf> = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(PROJECT_CONFIG_FILE)).filter(|p| p.is_file()),
    };

    let Some(path) = path else {
        return Ok(Config::load_or_default(None));
    };

    let (config, warnings) = Config::load_with_warnings(&path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    if !json {
        for warning in &warnings {
            eprintln!("{}", format_warning(warning));
        }
    }

    Ok(config.with_env_overrides())
}

fn format_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => format!(
            "warning: unknown config key `{}` in {} (did you mean `{}`?)",
            warning.key, location, suggestion
        ),
        None => format!(
            "warning: unknown config key `{}` in {}",
            warning.key, location
        ),
    }
}
