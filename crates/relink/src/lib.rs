//! # relink
//!
//! Post-compilation module-path rewriter for TypeScript library builds.
//!
//! `tsc` leaves the specifiers it emits exactly as they were written:
//! path aliases stay unexpanded, extensionless relative imports stay
//! extensionless, and imports of non-code assets point at files the
//! output tree does not have. The result is a tree that only runs on
//! top of the original source layout. This crate makes the output tree
//! self-consistent:
//!
//! - expands alias-pattern specifiers into physical-path candidates
//!   (`tsconfig.compilerOptions.paths`, first matching rule wins),
//! - probes the filesystem to pick the one real target among
//!   candidates (`x`, `x/index.js`, `x.js`),
//! - rewrites the specifier literals in place, byte-exact outside the
//!   replaced spans,
//! - mirrors non-code assets referenced by rewritten imports into the
//!   output tree,
//! - detects circular dependencies across the rewritten module graph,
//! - applies the same treatment to emitted `.d.ts` files, with the
//!   `.d.ts` suffix stripped from realized declaration specifiers.
//!
//! It rewrites string literals that denote module locations and
//! nothing else: no type-checking, no semantic transforms.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use relink::{OsFileProbe, ProjectConfig, RewriteRun};
//!
//! # fn main() -> relink::Result<()> {
//! let config = ProjectConfig::load(std::path::Path::new("."), "src")?;
//! let summary = RewriteRun::new(&config, &OsFileProbe).execute()?;
//! println!("rewrote {} specifiers", summary.code_rewrites);
//! # Ok(())
//! # }
//! ```
//!
//! The crate emits `tracing` events; install your own subscriber.

pub mod alias;
pub mod assets;
pub mod config;
pub mod declarations;
pub mod error;
pub mod extract;
pub mod graph;
pub mod paths;
pub mod pipeline;
pub mod resolve;
pub mod rewrite;

// Re-export main types
pub use alias::{AliasRule, AliasTable};
pub use assets::AssetMirror;
pub use config::ProjectConfig;
pub use declarations::rewrite_declarations;
pub use error::{RelinkError, Result};
pub use extract::{SpecifierOccurrence, extract_specifiers};
pub use graph::ModuleGraph;
pub use pipeline::{RewriteRun, RunSummary};
pub use resolve::{CODE_SUFFIXES, DECLARATION_SUFFIXES, FileProbe, OsFileProbe, realize};
pub use rewrite::{Replacement, apply};
