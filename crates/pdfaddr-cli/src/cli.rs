use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Collect postal addresses from the first page of PDF documents.
#[derive(Debug, Parser)]
#[command(name = "pdfaddr", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan one PDF per case folder under a directory and write a spreadsheet
    Scan {
        /// Directory whose subfolders hold the documents
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Spreadsheet file to write
        #[arg(short, long, value_name = "FILE", default_value = "addresses.csv")]
        output: PathBuf,

        /// Spreadsheet format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Lines dropped from the top of each first page (default: 2)
        #[arg(long, default_value_t = 2)]
        skip_lines: usize,

        /// Treat documents larger than this many bytes as unreadable
        #[arg(long, value_name = "BYTES")]
        max_bytes: Option<u64>,

        /// Process documents in parallel (requires the `parallel` feature)
        #[arg(long)]
        parallel: bool,
    },

    /// Extract addresses from the given PDF files, in order
    File {
        /// Paths to the PDF files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Lines dropped from the top of each first page (default: 2)
        #[arg(long, default_value_t = 2)]
        skip_lines: usize,

        /// Treat documents larger than this many bytes as unreadable
        #[arg(long, value_name = "BYTES")]
        max_bytes: Option<u64>,
    },

    /// Print the first-page lines the address heuristic sees
    Lines {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Lines dropped from the top of the first page (default: 2)
        #[arg(long, default_value_t = 2)]
        skip_lines: usize,
    },
}

/// Spreadsheet formats for `scan`.
#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// JSON array of row objects
    Json,
}

/// Output formats for records printed to stdout.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated table
    Text,
    /// Comma-separated values
    Csv,
    /// JSON array of row objects
    Json,
}
