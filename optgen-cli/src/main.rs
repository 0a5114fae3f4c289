//! # optgen CLI Entry Point
//!
//! Parses the command line, initializes tracing, and dispatches to the
//! batch generation driver.

use clap::Parser;
use optgen_cli::GenerateArgs;

/// Option-handler source generator.
///
/// Reads JSON class definitions and emits, for each one, a Rust source
/// file implementing the option-handling protocol: enumerate available
/// options, apply a token sequence, emit a token sequence.
#[derive(Parser, Debug)]
#[command(name = "optgen", version, about)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    optgen_cli::run(&cli.args)
}
