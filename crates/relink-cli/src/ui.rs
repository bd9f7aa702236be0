//! Console output for the build loop.

use owo_colors::OwoColorize;
use relink::RunSummary;

pub fn banner() {
    println!("{}", "+--------------------------+".yellow());
    println!("{}", "| Build TypeScript Library |".yellow());
    println!("{}", "+--------------------------+".yellow());
}

pub fn summary(summary: &RunSummary) {
    println!(
        "{} {}",
        "Compiled JS modules:    ".yellow(),
        summary.modules_scanned
    );
    println!(
        "{} {}",
        "Replaced import paths:  ".yellow(),
        summary.code_rewrites
    );
    println!(
        "{} {}",
        "Replaced typing imports:".yellow(),
        summary.declaration_rewrites
    );
    println!(
        "{} {}",
        "Mirrored assets:        ".yellow(),
        summary.assets_total()
    );
    for (extension, count) in &summary.assets_mirrored {
        println!("    {extension}: {count}");
    }
}

pub fn failure(err: &anyhow::Error) {
    eprintln!();
    eprintln!("{}", "Error!".red().bold());
    eprintln!("{}", format!("{err:#}").red());
    eprintln!();
}

pub fn waiting() {
    println!();
    println!("{}", "Waiting for file changes...".green());
}
