use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use project_euler::{RunConfig, default_data_dir, format_answer, run_problems, select_problems};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "project-euler")]
#[command(about = "Run Project Euler solutions")]
struct Cli {
    /// Problems to run, in the given order; runs every available problem when omitted
    problems: Vec<u32>,

    /// Directory holding the puzzle input files
    #[arg(long, default_value_os_t = default_data_dir())]
    data_dir: PathBuf,

    /// Solve the selected problems concurrently
    #[arg(long)]
    parallel: bool,

    /// Log more detail (-v for info, -vv for debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn enable_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    enable_tracing(cli.verbose);

    let ids = select_problems(&cli.problems)?;
    let config = RunConfig {
        data_dir: cli.data_dir,
    };
    info!(?ids, parallel = cli.parallel, data_dir = %config.data_dir.display(), "running problems");

    let answers =
        run_problems(&ids, &config, cli.parallel).context("failed to solve requested problems")?;
    for (id, answer) in answers {
        println!("{}", format_answer(id, &answer));
    }

    Ok(())
}
