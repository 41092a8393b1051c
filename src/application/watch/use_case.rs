//! Watch Use Case implementation

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::compile::{CompileResult, HoldrCompiler};
use crate::domain::ports::FileSystem;
use crate::error::HoldrResult;

use super::event::{classify_changes, is_layout_candidate, WatchEvent, WatchOptions, WatcherState};

/// Watch Use Case
///
/// Runs a full compile, then recompiles the layouts touched by every debounced
/// batch of file system events. Compile failures are reported as
/// [`WatchEvent::Error`] and watching continues.
pub struct WatchUseCase<FS: FileSystem> {
    compiler: HoldrCompiler<FS>,
    options: WatchOptions,
}

impl<FS: FileSystem> WatchUseCase<FS> {
    pub fn new(compiler: HoldrCompiler<FS>, options: WatchOptions) -> Self {
        Self { compiler, options }
    }

    pub fn compiler(&self) -> &HoldrCompiler<FS> {
        &self.compiler
    }

    /// Start watching (blocking)
    ///
    /// Blocks until `running` is set to false.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> HoldrResult<()>
    where
        F: Fn(WatchEvent),
    {
        let watching: Vec<PathBuf> = self
            .options
            .res_dirs
            .iter()
            .filter(|dir| dir.is_dir())
            .cloned()
            .collect();

        on_event(WatchEvent::WatchStarted {
            watching: watching.iter().map(|d| d.display().to_string()).collect(),
        });

        self.initial_compile(&on_event);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )?;

        for dir in &watching {
            watcher.watch(dir, RecursiveMode::Recursive)?;
        }

        // notify may replay events for existing files right after registration
        let cooldown_end = Instant::now() + self.options.startup_cooldown;
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        let mut state = WatcherState::new();
        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                if is_layout_candidate(&path) {
                    state.add_change(path);
                }
            }

            if state.should_sync() {
                self.process_batch(state.take_changes(), &on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// Full compile of every watched resource root
    pub fn initial_compile(&self, on_event: &impl Fn(WatchEvent)) {
        on_event(WatchEvent::CompileStarted);
        let result = self.compiler.compile(&self.options.res_dirs);
        report(result, on_event);
    }

    /// Incremental compile for one debounced batch of paths
    pub fn process_batch(&self, paths: Vec<PathBuf>, on_event: &impl Fn(WatchEvent)) {
        let fs = self.compiler.file_system();
        let (changed, removed) = classify_changes(paths, |path| fs.is_file(path));
        if changed.is_empty() && removed.is_empty() {
            return;
        }

        for path in &changed {
            on_event(WatchEvent::FileChanged {
                path: path.display().to_string(),
            });
        }
        for path in &removed {
            on_event(WatchEvent::FileRemoved {
                path: path.display().to_string(),
            });
        }

        on_event(WatchEvent::CompileStarted);
        let result = self.compiler.compile_incremental(&changed, &removed);
        report(result, on_event);
    }
}

fn report(result: HoldrResult<CompileResult>, on_event: &impl Fn(WatchEvent)) {
    match result {
        Ok(result) => on_event(WatchEvent::CompileComplete {
            written: result.written.len(),
            unchanged: result.unchanged.len(),
            pruned: result.pruned.len(),
        }),
        Err(e) => on_event(WatchEvent::Error {
            message: e.to_string(),
        }),
    }
}
