use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;
use nodecheck_checks::{CheckConfig, default_journal_path};
use nodecheck_types::{CheckContext, CheckStatus};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::sync::atomic::Ordering;

pub fn run(cli: Cli) -> Result<CheckStatus> {
    let mut config = CheckConfig::load_from(&cli.config)?;
    config.verbose = config.verbose || cli.verbose;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(CheckStatus::Ok);
    };

    let ctx = interrupt_context()?;

    match command {
        Commands::Journald { path } => {
            // Default-path fallback happens here, before the check is
            // constructed; the check itself never substitutes a path.
            let path = resolve_journal_path(path, &config)?;
            handlers::journald::handle(&ctx, &config, path, cli.format)
        }
    }
}

/// Flag wins over the config file; otherwise scan the well-known candidates.
/// No candidate existing is fatal to the command, not a check result.
fn resolve_journal_path(flag: Option<PathBuf>, config: &CheckConfig) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(path) = &config.journald.path {
        return Ok(path.clone());
    }
    Ok(default_journal_path()?)
}

fn interrupt_context() -> Result<CheckContext> {
    let ctx = CheckContext::new();
    let flag = ctx.cancel_flag();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })?;
    Ok(ctx)
}

fn show_guidance() {
    println!("nodecheck - diagnostic health checks for cluster nodes\n");
    println!("Available checks:");
    println!(
        "  {}  verify journal directory group ownership and permissions",
        "journald".cyan()
    );
    println!();
    println!("Run {} for details.", "nodecheck --help".cyan());
}
