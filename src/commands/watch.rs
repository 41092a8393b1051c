use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use holdr::application::{HoldrCompiler, WatchEvent, WatchOptions, WatchUseCase};
use holdr::config::Verbosity;
use holdr::infrastructure::LocalFs;

use super::Session;
use crate::cli::CompileArgs;

pub fn cmd_watch(session: &Session, args: &CompileArgs) -> Result<()> {
    let config = session.effective_config(args);
    let compiler = HoldrCompiler::new(LocalFs::new(), session.compile_options(&config)?);
    let use_case = WatchUseCase::new(compiler, WatchOptions::new(config.res_dirs.clone()));

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    let json = session.json;
    let verbosity = session.verbosity;
    use_case.start(running, |event| {
        if json {
            println!("{}", event.to_json());
        } else if let Some(line) = render(&event, verbosity) {
            match event {
                WatchEvent::Error { .. } => eprintln!("{line}"),
                _ => println!("{line}"),
            }
        }
    })?;

    Ok(())
}

fn render(event: &WatchEvent, verbosity: Verbosity) -> Option<String> {
    match event {
        WatchEvent::Error { message } => Some(format!("error: {message}")),
        _ if verbosity == Verbosity::Quiet => None,
        WatchEvent::WatchStarted { watching } => Some(format!(
            "watching {} (Ctrl+C to stop)",
            watching.join(", ")
        )),
        WatchEvent::FileChanged { path } => Some(format!("changed {path}")),
        WatchEvent::FileRemoved { path } => Some(format!("removed {path}")),
        WatchEvent::CompileStarted => None,
        WatchEvent::CompileComplete {
            written,
            unchanged,
            pruned,
        } => Some(format!(
            "compiled: {written} written, {unchanged} unchanged, {pruned} pruned"
        )),
        WatchEvent::Shutdown => Some("stopped".to_string()),
    }
}
