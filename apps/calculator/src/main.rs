//! # Calculator
//!
//! Runs one calculation from flags, or serves the HTTP API with `--server`.

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use calculator::calculate::run_calculation;
use calculator::logging::init_tracing;
use calculator::selector::selector_list;
use calculator::{server, AppError, Args, ServerConfig, BANNER};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.server, args.verbose);

    println!("{BANNER}");

    let result = if args.server {
        run_server(&args)
    } else {
        run_calculator(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::UnknownOperation(op)) => {
            eprintln!("❌ Unknown operation: {op}");
            eprintln!("Available operations: {}", selector_list());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_calculator(args: &Args) -> Result<(), AppError> {
    let line = run_calculation(args.a, args.b, &args.op)?;
    println!("{line}");
    Ok(())
}

fn run_server(args: &Args) -> Result<(), AppError> {
    let config = ServerConfig::from_args(args)?;
    println!("🌐 Starting HTTP server on port {}...", config.port);
    info!(?config, "Configuration loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::Serve)?;
    runtime.block_on(server::run(config))
}
