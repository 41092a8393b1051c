use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// holdr - typed view holders from Android layout files
#[derive(Parser, Debug)]
#[command(name = "holdr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./holdr.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every compiling command
#[derive(clap::Args, Debug, Default)]
pub struct CompileArgs {
    /// Resource root holding layout directories (repeatable)
    #[arg(long = "res", value_name = "DIR")]
    pub res_dirs: Vec<PathBuf>,

    /// Output directory for generated sources
    #[arg(long = "out", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base package of the application
    #[arg(long)]
    pub package: Option<String>,

    /// Only generate fields for elements marked holdr_include
    #[arg(long)]
    pub no_default_include: bool,

    /// Parser threads (0 = one per core, 1 = sequential)
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Delete holders whose layout no longer produces one
    #[arg(long)]
    pub prune: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate holders for every layout
    Compile {
        #[command(flatten)]
        args: CompileArgs,
    },

    /// Regenerate holders affected by changed or removed layout files
    Incremental {
        /// Created or modified layout files
        #[arg(long, num_args = 1.., value_name = "FILE")]
        changed: Vec<PathBuf>,

        /// Deleted layout files
        #[arg(long, num_args = 1.., value_name = "FILE")]
        removed: Vec<PathBuf>,

        #[command(flatten)]
        args: CompileArgs,
    },

    /// Compile, then recompile on every layout change until Ctrl+C
    Watch {
        #[command(flatten)]
        args: CompileArgs,
    },

    /// Print the holder class name of a layout
    ClassName {
        /// Layout name (file name without extension)
        name: String,
    },
}
