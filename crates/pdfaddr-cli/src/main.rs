mod cli;
mod file_cmd;
mod lines_cmd;
mod scan_cmd;
mod shared;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    // stdout carries the records, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Scan {
            ref dir,
            ref output,
            ref format,
            skip_lines,
            max_bytes,
            parallel,
        } => scan_cmd::run(dir, output, format, skip_lines, max_bytes, parallel),
        cli::Commands::File {
            ref files,
            ref format,
            skip_lines,
            max_bytes,
        } => file_cmd::run(files, format, skip_lines, max_bytes),
        cli::Commands::Lines {
            ref file,
            skip_lines,
        } => lines_cmd::run(file, skip_lines),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
