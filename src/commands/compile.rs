use std::path::PathBuf;

use anyhow::Result;

use holdr::application::HoldrCompiler;
use holdr::infrastructure::LocalFs;

use super::Session;
use crate::cli::CompileArgs;

pub fn cmd_compile(session: &Session, args: &CompileArgs) -> Result<()> {
    let config = session.effective_config(args);
    let compiler = HoldrCompiler::new(LocalFs::new(), session.compile_options(&config)?)
        .with_events(session.event_sink());

    compiler.compile(&config.res_dirs)?;
    Ok(())
}

pub fn cmd_incremental(
    session: &Session,
    changed: &[PathBuf],
    removed: &[PathBuf],
    args: &CompileArgs,
) -> Result<()> {
    let config = session.effective_config(args);
    let compiler = HoldrCompiler::new(LocalFs::new(), session.compile_options(&config)?)
        .with_events(session.event_sink());

    compiler.compile_incremental(changed, removed)?;
    Ok(())
}
