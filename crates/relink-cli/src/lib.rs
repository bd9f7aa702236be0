//! CLI plumbing around the `relink` core: argument parsing, compiler
//! invocation, console output and watch-mode orchestration.

pub mod cli;
pub mod compiler;
pub mod logger;
pub mod ui;
pub mod watch;
