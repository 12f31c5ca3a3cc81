//! # School Records Application
//!
//! Wires the in-memory adapter, the seed data and the report writer
//! together. `main.rs` only parses arguments and installs logging.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use school_adapter::InMemorySchoolRepository;
use school_usecase::{populate_sample_data, ReportWriter, SeedData};

/// Command-line configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "school")]
#[command(about = "In-memory school records: students by class, subjects by teacher")]
#[command(version)]
pub struct Config {
    /// Class section to list students for
    #[arg(short, long, default_value = "10A")]
    pub class: String,

    /// Teacher whose subjects are listed
    #[arg(short, long, default_value = "Smitha Dash")]
    pub teacher: String,

    /// Seed the repository from a JSON or YAML file instead of the sample data
    #[arg(short, long)]
    pub seed: Option<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,
}

/// Run the demo: populate, report by class, report by teacher, pause
pub fn run<W: Write, I: BufRead>(config: &Config, out: W, input: I) -> anyhow::Result<()> {
    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    let mut repo = InMemorySchoolRepository::new();

    match &config.seed {
        Some(path) => SeedData::from_file(path)
            .and_then(|data| data.apply(&mut repo))
            .with_context(|| format!("failed to seed from {}", path.display()))?,
        None => populate_sample_data(&mut repo).context("failed to seed sample data")?,
    };

    // ========================================
    // Reports
    // ========================================

    info!(class = %config.class, teacher = %config.teacher, "writing reports");
    let mut reports = ReportWriter::new(out);
    reports
        .students_in_class(&repo, &config.class)
        .context("failed to write class report")?;
    reports
        .subjects_taught_by(&repo, &config.teacher)
        .context("failed to write teacher report")?;

    if !config.no_pause {
        pause(input)?;
    }

    Ok(())
}

/// Block until one line (or EOF) arrives on `input`
fn pause<I: BufRead>(mut input: I) -> anyhow::Result<()> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(())
}
