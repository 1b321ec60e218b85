use clap::{Args, Parser, Subcommand, ValueEnum};

use super::parsers::{parse_count, parse_seed};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a synthetic dataset (users, products, orders)
    Generate(GenerateArgs),
    /// Compare two JSON documents, optionally on selected fields
    Compare(CompareArgs),
    /// Summarize latencies from a JSON array of response records
    Analyze(AnalyzeArgs),
    /// Print the fast non-cryptographic fingerprint of a string
    Fingerprint(FingerprintArgs),
    /// Print a fresh random UUID
    Uuid,
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Dataset type
    pub kind: String,

    /// Number of records [default: 5]
    #[arg(long, short = 'n', value_parser = parse_count)]
    pub count: Option<usize>,

    /// Seed for reproducible output
    #[arg(long, value_parser = parse_seed)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// First JSON document
    pub left: String,

    /// Second JSON document
    pub right: String,

    /// Dotted field path to compare (repeatable); whole documents when omitted
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
}

#[derive(Debug, Args, Clone)]
pub struct AnalyzeArgs {
    /// JSON file holding an array of response records
    pub path: String,
}

#[derive(Debug, Args, Clone)]
pub struct FingerprintArgs {
    pub text: String,

    /// Print the MD5 digest instead
    #[arg(long)]
    pub md5: bool,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "reqkit",
    version,
    about = "Support toolkit for API test-collection scripts - synthetic datasets, response diffing, latency summaries, and retry with linear backoff."
)]
pub struct ReqkitArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Path to config file (TOML or JSON)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output format
    #[arg(long = "output-format", value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,
}
