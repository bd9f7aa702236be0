//! relink CLI entry point: parse arguments, initialize logging, then
//! run one compile-and-rewrite cycle (or keep rerunning in watch mode).

use anyhow::Result;
use clap::Parser;
use relink::{OsFileProbe, ProjectConfig, RewriteRun, RunSummary};
use relink_cli::{cli, compiler, logger, ui, watch};

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logger::init(args.verbose, args.quiet);
    if !args.quiet {
        ui::banner();
    }

    if args.watch {
        run_reporting(&args);
        let src_dir = args.path.join(&args.src_dir);
        watch::watch(&src_dir, || run_reporting(&args))
    } else {
        let summary = run_cycle(&args)?;
        if !args.quiet {
            ui::summary(&summary);
        }
        Ok(())
    }
}

/// One full cycle: pre-tasks, compile, rewrite, post-tasks.
///
/// Configuration is reloaded every cycle, so tsconfig edits are picked
/// up by the next run in watch mode.
fn run_cycle(args: &cli::Cli) -> Result<RunSummary> {
    for task in &args.run_before {
        compiler::npm_task(&args.path, task)?;
    }

    let config =
        ProjectConfig::load(&args.path, &args.src_dir)?.with_allow_cycles(args.allow_cycles);
    compiler::compile(&args.path, &config.tsconfig_path)?;
    let summary = RewriteRun::new(&config, &OsFileProbe).execute()?;

    for task in &args.run_after {
        compiler::npm_task(&args.path, task)?;
    }
    Ok(summary)
}

/// Watch-mode wrapper: report the outcome and keep the watcher alive
/// whether the cycle succeeded or not.
fn run_reporting(args: &cli::Cli) {
    match run_cycle(args) {
        Ok(summary) => {
            if !args.quiet {
                ui::summary(&summary);
            }
        }
        Err(err) => ui::failure(&err),
    }
    ui::waiting();
}
