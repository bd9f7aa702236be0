//! Run orchestration: one sequential pass over a compiled output tree.
//!
//! For each compiled module: extract specifiers, expand aliases, probe
//! the filesystem for the real target, record the dependency edge,
//! queue asset copies, apply the rewrite plan, then check the
//! accumulated graph for cycles. Declaration files are processed
//! afterwards as an independent pass over the same tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::assets::AssetMirror;
use crate::config::ProjectConfig;
use crate::declarations::rewrite_declarations;
use crate::error::{RelinkError, Result};
use crate::extract::extract_specifiers;
use crate::graph::ModuleGraph;
use crate::paths::{find_files, is_relative, resolve_against, specifier_extension};
use crate::resolve::{CODE_SUFFIXES, FileProbe, realize};
use crate::rewrite::{Replacement, rewrite_file};

/// Extension marking a directly-executable compiled module; anything
/// else a local specifier points at is treated as an asset.
const CODE_EXTENSION: &str = ".js";

/// Per-run counters, consumed by the surrounding CLI/logging layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub modules_scanned: usize,
    /// Specifiers rewritten in code modules.
    pub code_rewrites: usize,
    /// Specifiers rewritten in declaration files.
    pub declaration_rewrites: usize,
    /// Mirrored asset counts grouped by extension.
    pub assets_mirrored: BTreeMap<String, usize>,
}

impl RunSummary {
    pub fn assets_total(&self) -> usize {
        self.assets_mirrored.values().sum()
    }
}

/// One rewrite run against a fully-populated output tree.
///
/// The graph and the copied-assets set are owned by the run and
/// rebuilt from scratch every time, so a long-lived watch process can
/// execute run after run without ambient state. No two runs may
/// execute concurrently against the same output tree.
pub struct RewriteRun<'a> {
    config: &'a ProjectConfig,
    probe: &'a dyn FileProbe,
    graph: ModuleGraph,
    mirror: AssetMirror,
    summary: RunSummary,
}

impl<'a> RewriteRun<'a> {
    pub fn new(config: &'a ProjectConfig, probe: &'a dyn FileProbe) -> Self {
        Self {
            config,
            probe,
            graph: ModuleGraph::new(),
            mirror: AssetMirror::new(),
            summary: RunSummary::default(),
        }
    }

    /// Execute the run to completion and return its summary.
    pub fn execute(mut self) -> Result<RunSummary> {
        let modules = find_files(&self.config.out_dir, CODE_EXTENSION)?;
        info!(count = modules.len(), "scanning compiled modules");

        for rel in &modules {
            self.process_module(rel)?;
            if !self.config.allow_cycles {
                if let Some(chain) = self.graph.find_cycle() {
                    return Err(RelinkError::Cycle { chain });
                }
            }
        }
        self.summary.modules_scanned = modules.len();

        self.summary.declaration_rewrites =
            rewrite_declarations(&self.config.out_dir, &self.config.aliases, self.probe)?;

        info!(
            modules = self.summary.modules_scanned,
            rewrites = self.summary.code_rewrites,
            declaration_rewrites = self.summary.declaration_rewrites,
            assets = self.summary.assets_total(),
            "rewrite run complete"
        );
        Ok(self.summary)
    }

    fn process_module(&mut self, rel: &Path) -> Result<()> {
        let config = self.config;
        let path = config.out_dir.join(rel);
        let content = fs::read_to_string(&path)?;
        let module_dir = path.parent().unwrap_or(&config.out_dir).to_path_buf();
        let module_id = rel.to_string_lossy().replace('\\', "/");

        let mut plan = Vec::new();
        let mut dependencies = Vec::new();
        for occurrence in extract_specifiers(&content, &path)? {
            let candidates = config.aliases.expand_for_module(
                &occurrence.raw,
                &module_dir,
                &config.src_dir,
                &config.out_dir,
            );
            let finalized = realize(&candidates, &module_dir, CODE_SUFFIXES, self.probe)
                .unwrap_or_else(|| occurrence.raw.clone());

            // Not a local module: the runtime's own loader owns it.
            if !is_relative(&finalized) {
                continue;
            }

            let target = resolve_against(&module_dir, &finalized);
            let target_id = pathdiff::diff_paths(&target, &config.out_dir)
                .unwrap_or_else(|| target.clone())
                .to_string_lossy()
                .replace('\\', "/");

            let extension = specifier_extension(&finalized);
            if extension == CODE_EXTENSION {
                dependencies.push(target_id);
            } else if self
                .mirror
                .mirror(Path::new(&target_id), &config.src_dir, &config.out_dir)?
            {
                let key = if extension.is_empty() {
                    "(none)".to_string()
                } else {
                    extension.to_string()
                };
                *self.summary.assets_mirrored.entry(key).or_default() += 1;
            }

            if finalized != occurrence.raw {
                plan.push(Replacement {
                    start: occurrence.start,
                    end: occurrence.end,
                    value: finalized,
                });
            }
        }

        if !plan.is_empty() {
            debug!(module = %module_id, count = plan.len(), "rewriting specifiers");
        }
        self.summary.code_rewrites += plan.len();
        rewrite_file(&path, &content, &plan)?;
        self.graph.record(module_id, dependencies);
        Ok(())
    }
}
