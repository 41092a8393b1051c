//! holdr CLI - typed view holders from Android layout files
//!
//! Usage: holdr <COMMAND>
//!
//! Commands:
//!   compile      Generate holders for every layout
//!   incremental  Regenerate holders affected by changed or removed layouts
//!   watch        Recompile continuously while layouts change
//!   class-name   Print the holder class name of a layout

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::ClassName { name } = &cli.command {
        return commands::cmd_class_name(name);
    }

    let session = Session::from_cli(&cli)?;
    match &cli.command {
        Commands::Compile { args } => commands::cmd_compile(&session, args),
        Commands::Incremental {
            changed,
            removed,
            args,
        } => commands::cmd_incremental(&session, changed, removed, args),
        Commands::Watch { args } => commands::cmd_watch(&session, args),
        Commands::ClassName { name } => commands::cmd_class_name(name),
    }
}
