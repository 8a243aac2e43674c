use clap::Parser;
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(about = "Markdown table of contents generator written in Rust", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Markdown documents to scan (defaults to README.md and creating-pull-requests.md)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}
