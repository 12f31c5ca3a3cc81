//! School Records - Entry point
//!
//! Usage:
//!   school                          - Sample data, class 10A, teacher Smitha Dash
//!   school --class 11B              - List another class
//!   school --teacher "Shreya Lal"   - List another teacher's subjects
//!   school --seed data.yaml         - Load records from a file
//!   school --no-pause               - Do not wait for Enter before exiting

use clap::Parser;
use school_app::Config;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let stdin = std::io::stdin();
    school_app::run(&config, std::io::stdout().lock(), stdin.lock())
}
