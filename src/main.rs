//! rerender-audit CLI binary entry point.
//! Resolves configuration, discovers files, runs the audit, and prints results.

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use rerender_audit::audit::{run_audit, AuditOptions};
use rerender_audit::cli::Cli;
use rerender_audit::error::AuditError;
use rerender_audit::{config, discover, output};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", error_prefix(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let target = Path::new(&cli.path);
    if !target.exists() {
        return Err(AuditError::InvalidTarget(target.to_path_buf()).into());
    }
    let eff = config::resolve_effective(target, cli.json_override(), cli.strict_override());

    let files = discover::discover(target, &eff.exclude)?;
    if files.is_empty() {
        return Err(AuditError::NoFiles.into());
    }
    info!(files = files.len(), strict = eff.strict, "starting audit");

    let opts = AuditOptions {
        strict: eff.strict,
        limits: eff.limits,
    };
    let reports = run_audit(&files, &opts);
    output::print_reports(&reports, eff.json).context("failed to render JSON report")?;
    Ok(())
}

fn error_prefix() -> String {
    if std::env::var_os("NO_COLOR").is_none() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}
