#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use nomina::cli::args::CliArgs;
use nomina::cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if NOMINA_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports NOMINA_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    nomina::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let result = driver::run(&args, &cwd)?;

    let stderr_color = std::io::stderr().is_terminal();
    for diagnostic in &result.diagnostics {
        eprintln!("{}", driver::format_diagnostic(diagnostic, stderr_color));
    }
    if args.stats {
        eprintln!("{}", driver::format_stats(&result.stats));
    }

    let rendered = result.render(args.format, std::io::stdout().is_terminal())?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write output")?;

    std::process::exit(result.exit_code());
}
