//! Watch event types and options

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indexmap::IndexSet;

use crate::domain::value_objects::LayoutPath;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Resource roots to watch
    pub res_dirs: Vec<PathBuf>,
    /// Ignore file system events for this long after the watcher starts
    pub startup_cooldown: Duration,
}

impl WatchOptions {
    pub fn new(res_dirs: Vec<PathBuf>) -> Self {
        Self {
            res_dirs,
            startup_cooldown: Duration::from_millis(500),
        }
    }

    pub fn with_startup_cooldown(mut self, cooldown: Duration) -> Self {
        self.startup_cooldown = cooldown;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { watching: Vec<String> },
    /// Layout file created or modified
    FileChanged { path: String },
    /// Layout file deleted
    FileRemoved { path: String },
    /// Compile started
    CompileStarted,
    /// Compile completed
    CompileComplete {
        written: usize,
        unchanged: usize,
        pruned: usize,
    },
    /// Error occurred; watching continues
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Watcher state for debouncing
#[derive(Debug)]
pub struct WatcherState {
    pending_changes: IndexSet<PathBuf>,
    last_change: Option<Instant>,
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new()
    }
}

impl WatcherState {
    pub fn new() -> Self {
        Self {
            pending_changes: IndexSet::new(),
            last_change: None,
        }
    }

    /// Add a file change to pending changes
    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Check if debounce period has passed and we have pending changes
    pub fn should_sync(&self) -> bool {
        if let Some(last) = self.last_change {
            !self.pending_changes.is_empty() && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
        } else {
            false
        }
    }

    /// Take all pending changes in arrival order, resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let changes: Vec<_> = self.pending_changes.drain(..).collect();
        self.last_change = None;
        changes
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}

/// Whether a watched path can be a layout file (`<root>/layout*/<name>`, not hidden)
pub fn is_layout_candidate(path: &Path) -> bool {
    LayoutPath::parse(path).is_some_and(|layout| !layout.file_name().starts_with('.'))
}

/// Split layout paths into changed (still a file) and removed (gone)
pub fn classify_changes(
    paths: Vec<PathBuf>,
    is_file: impl Fn(&Path) -> bool,
) -> (Vec<PathBuf>, Vec<PathBuf>) {
    paths
        .into_iter()
        .filter(|path| is_layout_candidate(path))
        .partition(|path| is_file(path))
}
