//! Compile Use Case
//!
//! Orchestrates one compile run:
//! 1. Resolve the candidate layout files (full scan or change propagation)
//! 2. Parse every candidate in parallel, then merge in candidate order
//! 3. Render every non-empty layout in parallel
//! 4. Write the holders in layout order
//! 5. Prune stale holders (opt-in)
//!
//! The first failure in candidate order aborts the run. Holders written
//! before the failure stay on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexSet;
use rayon::prelude::*;

use crate::domain::entities::{Layout, Layouts};
use crate::domain::ports::{CompileEvent, CompileEventSink, CompileMode, FileSystem, NoopEventSink};
use crate::domain::services::{ChangeResolver, HolderGenerator, LayoutParser};
use crate::domain::value_objects::{layout_name_of, FileSet, LayoutPath};
use crate::error::{HoldrError, HoldrResult};

use super::options::CompileOptions;
use super::result::CompileResult;

/// Layout compiler, parameterized by its file system port
pub struct HoldrCompiler<FS: FileSystem> {
    fs: FS,
    parser: LayoutParser,
    generator: HolderGenerator,
    options: CompileOptions,
    events: Arc<dyn CompileEventSink>,
}

enum WriteOutcome {
    Written,
    Unchanged,
}

impl<FS: FileSystem> HoldrCompiler<FS> {
    pub fn new(fs: FS, options: CompileOptions) -> Self {
        let parser = LayoutParser::new(options.default_include)
            .with_widget_package(options.widget_package.clone());
        let generator = HolderGenerator::new(options.package.clone());

        Self {
            fs,
            parser,
            generator,
            options,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn CompileEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn file_system(&self) -> &FS {
        &self.fs
    }

    /// Compile every layout file found under `resource_roots`
    pub fn compile(&self, resource_roots: &[PathBuf]) -> HoldrResult<CompileResult> {
        let candidates = ChangeResolver::new(&self.fs).all_layout_files(resource_roots)?;
        self.run(CompileMode::Full, candidates, &[])
    }

    /// Compile only the layouts affected by `changed` and `removed` files
    pub fn compile_incremental(
        &self,
        changed: &[PathBuf],
        removed: &[PathBuf],
    ) -> HoldrResult<CompileResult> {
        let candidates =
            ChangeResolver::new(&self.fs).resolve_files_to_recompile(changed, removed)?;
        self.run(CompileMode::Incremental, candidates, removed)
    }

    fn run(
        &self,
        mode: CompileMode,
        candidates: FileSet,
        removed: &[PathBuf],
    ) -> HoldrResult<CompileResult> {
        let mut result = CompileResult::new();
        let prunes_removed = self.options.prune_stale && !removed.is_empty();
        if candidates.is_empty() && !prunes_removed {
            return Ok(result);
        }

        self.events.on_event(CompileEvent::Started {
            mode,
            candidate_count: candidates.len(),
        });

        let files = candidates.into_vec();
        let layouts = self.parse_all(&files)?;
        result.parsed = files.len();

        let mut non_empty = Vec::new();
        for layout in &layouts {
            if layout.is_empty() {
                self.events.on_event(CompileEvent::LayoutEmpty {
                    layout: layout.name().to_string(),
                });
                result.empty.push(layout.name().to_string());
            } else {
                non_empty.push(layout);
            }
        }

        let rendered = run_parallel(self.options.jobs, &non_empty, |layout| {
            let path = self
                .generator
                .output_path(&self.options.output_dir, layout.name());
            (path, self.generator.generate(layout))
        });

        for (layout, (path, source)) in non_empty.iter().zip(rendered) {
            match self.write_output(&path, &source)? {
                WriteOutcome::Written => {
                    self.events.on_event(CompileEvent::OutputWritten {
                        layout: layout.name().to_string(),
                        path: path.clone(),
                    });
                    result.written.push(path);
                }
                WriteOutcome::Unchanged => {
                    self.events.on_event(CompileEvent::OutputUnchanged {
                        layout: layout.name().to_string(),
                        path: path.clone(),
                    });
                    result.unchanged.push(path);
                }
            }
        }

        if self.options.prune_stale {
            self.prune(&files, &layouts, removed, &mut result)?;
        }

        self.events.on_event(CompileEvent::Completed {
            written_count: result.written.len(),
            unchanged_count: result.unchanged.len(),
            empty_count: result.empty.len(),
            pruned_count: result.pruned.len(),
        });

        Ok(result)
    }

    /// Parse all files, then merge them in file order
    fn parse_all(&self, files: &[PathBuf]) -> HoldrResult<Layouts> {
        let parsed = run_parallel(self.options.jobs, files, |file| self.parse_file(file));

        let mut layouts = Layouts::new();
        for (file, layout) in files.iter().zip(parsed) {
            let layout = layout?;
            if self.events.wants_detailed_events() {
                self.events.on_event(CompileEvent::FileParsed {
                    path: file.clone(),
                    view_count: layout.views().len(),
                });
            }
            layouts.add(layout);
        }

        Ok(layouts)
    }

    fn parse_file(&self, file: &Path) -> HoldrResult<Layout> {
        let source = self.fs.read(file).map_err(|source| HoldrError::Read {
            path: file.to_path_buf(),
            source,
        })?;

        self.parser
            .parse(&layout_name_of(file), &source)
            .map_err(|source| HoldrError::Parse {
                file: file.to_path_buf(),
                source,
            })
    }

    fn write_output(&self, path: &Path, source: &str) -> HoldrResult<WriteOutcome> {
        if !self.options.write_unchanged && self.fs.is_file(path) {
            if let Ok(existing) = self.fs.read(path) {
                if existing == source {
                    return Ok(WriteOutcome::Unchanged);
                }
            }
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs
                .create_dir_all(parent)
                .map_err(|source| HoldrError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        self.fs
            .write(path, source)
            .map_err(|source| HoldrError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(WriteOutcome::Written)
    }

    /// Delete holders of layouts that parsed empty or lost their last variant
    ///
    /// A holder is kept while any layout file of the same name outside this
    /// run's candidates exists under the configured resource roots, since a
    /// full compile would still generate it.
    fn prune(
        &self,
        candidates: &[PathBuf],
        layouts: &Layouts,
        removed: &[PathBuf],
        result: &mut CompileResult,
    ) -> HoldrResult<()> {
        let mut stale: IndexSet<String> = result.empty.iter().cloned().collect();
        for file in removed {
            if let Some(layout_path) = LayoutPath::parse(file) {
                let name = layout_path.layout_name();
                if !layouts.contains(&name) {
                    stale.insert(name);
                }
            }
        }
        if stale.is_empty() {
            return Ok(());
        }

        let backed: IndexSet<String> = ChangeResolver::new(&self.fs)
            .all_layout_files(&self.options.res_dirs)?
            .into_iter()
            .filter(|file| !candidates.contains(file) && !removed.contains(file))
            .map(|file| layout_name_of(&file))
            .collect();

        for name in stale {
            if backed.contains(&name) {
                continue;
            }
            let path = self.generator.output_path(&self.options.output_dir, &name);
            if !self.fs.is_file(&path) {
                continue;
            }
            self.fs.remove(&path).map_err(|source| HoldrError::Write {
                path: path.clone(),
                source,
            })?;
            self.events.on_event(CompileEvent::OutputPruned {
                layout: name,
                path: path.clone(),
            });
            result.pruned.push(path);
        }

        Ok(())
    }
}

/// Map `items` on a rayon pool sized by `jobs`, keeping input order
///
/// `jobs == 0` uses the global pool; `jobs == 1` and single items run inline.
fn run_parallel<I, T, F>(jobs: usize, items: &[I], f: F) -> Vec<T>
where
    I: Sync,
    T: Send,
    F: Fn(&I) -> T + Sync + Send,
{
    if jobs == 1 || items.len() <= 1 {
        return items.iter().map(&f).collect();
    }
    if jobs == 0 {
        return items.par_iter().map(&f).collect();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool.install(|| items.par_iter().map(&f).collect()),
        Err(_) => items.iter().map(&f).collect(),
    }
}
