//! Command-line arguments
//!
//! Flags override every other configuration source.

use clap::Parser;

/// Shortener - a tiny in-memory URL shortener
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "shortener")]
#[command(version)]
#[command(about = "A tiny in-memory URL shortener", long_about = None)]
pub struct Cli {
    /// Address and port the server listens on
    #[arg(short = 'a', long = "address")]
    pub address: Option<String>,

    /// Prefix of the returned short URLs (a trailing '/' is dropped)
    #[arg(short = 'b', long = "base-url")]
    pub response_prefix: Option<String>,

    /// Path to a TOML configuration file (default: ./config.toml if present)
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Accept shorten requests whatever their declared Content-Type
    #[arg(long)]
    pub lenient_content_type: bool,

    /// Log filter, e.g. "debug" or "shortener=trace"
    #[arg(long)]
    pub log_level: Option<String>,
}
