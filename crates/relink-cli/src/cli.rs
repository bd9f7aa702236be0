//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "relink",
    version,
    about = "Build a TypeScript library and relink its compiled imports"
)]
pub struct Cli {
    /// Project folder containing tsconfig.json
    pub path: PathBuf,

    /// Recompile and rewrite whenever a source file changes
    #[arg(short, long)]
    pub watch: bool,

    /// Source directory, relative to the project folder
    #[arg(short, long, default_value = "src", value_name = "DIR")]
    pub src_dir: String,

    /// npm task to run before each compilation (repeat for several)
    #[arg(short = 'b', long = "run-before", value_name = "TASK")]
    pub run_before: Vec<String>,

    /// npm task to run after each compilation (repeat for several)
    #[arg(short = 'a', long = "run-after", value_name = "TASK")]
    pub run_after: Vec<String>,

    /// Keep going when the compiled module graph contains cycles
    #[arg(long)]
    pub allow_cycles: bool,

    /// Show debug logs
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,
}
