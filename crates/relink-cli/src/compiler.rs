//! Blocking invocation of the external compiler and auxiliary npm tasks.
//!
//! The compiler must fully populate the output tree before the rewrite
//! pass begins; the rewrite core never overlaps with compilation.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::info;

/// Run `npx tsc -p <tsconfig>` and wait for it to finish.
pub fn compile(project_dir: &Path, tsconfig: &Path) -> Result<()> {
    run(project_dir, "npx", &["tsc", "-p", &tsconfig.to_string_lossy()])
}

/// Run `npm run <task>` in the project directory.
pub fn npm_task(project_dir: &Path, task: &str) -> Result<()> {
    run(project_dir, "npm", &["run", task])
}

fn run(cwd: &Path, program: &str, args: &[&str]) -> Result<()> {
    let cmd_display = format!("{program} {}", args.join(" "));
    info!("{}", cmd_display);
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .with_context(|| format!("failed to start `{cmd_display}`"))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        if !stdout.trim().is_empty() {
            eprintln!("{stdout}");
        }
        if !stderr.trim().is_empty() {
            eprintln!("{stderr}");
        }
        bail!("`{cmd_display}` exited with {}", output.status);
    }
    if !stdout.trim().is_empty() {
        println!("{stdout}");
    }
    Ok(())
}
