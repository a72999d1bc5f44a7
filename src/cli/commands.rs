use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bountydex", version, about = "Browse and query disclosed bug bounty reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset. `--quiet` wins over `-v`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// List reports matching filters
    Query(QueryArgs),
    /// List categories by vulnerability type or program
    Categories(CategoriesArgs),
    /// Show the top reports by bounty and by upvotes
    Top(TopArgs),
    /// Decode a store file and print its summary statistics
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Store file path (overrides config)
    #[arg(short, long)]
    pub store: Option<String>,

    /// Listen address (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Clone)]
pub struct QueryArgs {
    /// Store file path (overrides config)
    #[arg(short, long)]
    pub store: Option<String>,

    /// Program name (exact match first, then substring)
    #[arg(long)]
    pub program: Option<String>,

    /// Vulnerability type substring
    #[arg(long)]
    pub vuln_type: Option<String>,

    /// Minimum bounty in USD
    #[arg(long, default_value = "0")]
    pub min_bounty: f64,

    /// Substring searched in title, program and vulnerability type
    #[arg(long)]
    pub search: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Reports per page
    #[arg(long, default_value = "10")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct CategoriesArgs {
    /// Store file path (overrides config)
    #[arg(short, long)]
    pub store: Option<String>,

    /// Category type: bug_type, program
    #[arg(long = "type", default_value = "bug_type")]
    pub kind: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct TopArgs {
    /// Store file path (overrides config)
    #[arg(short, long)]
    pub store: Option<String>,

    /// Entries per ranking
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Store file to validate
    pub store: String,
}
