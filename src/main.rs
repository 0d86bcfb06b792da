mod batch;
mod cli;
mod discover;
mod hasher;
mod index;
mod progress;
mod util;

use batch::{hash_batch, hash_batch_observed};
use cli::{Cli, Command};
use hasher::HashAlgorithm;
use index::HashIndex;
use progress::ProgressReporter;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Hash {
            paths,
            input_json,
            output_json,
            hash_algorithm,
            buffer_size,
            progress,
        } => run_hash(
            paths,
            input_json,
            output_json,
            hash_algorithm,
            buffer_size,
            progress,
        ),
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_hash(
    paths: Vec<PathBuf>,
    input_json: Vec<PathBuf>,
    output_json: Option<PathBuf>,
    algorithm: HashAlgorithm,
    buffer_size: NonZeroUsize,
    progress: bool,
) -> anyhow::Result<ExitCode> {
    let existing = load_existing(&input_json)?;
    let files = discover::collect_files(&paths)?;

    let groups = if progress {
        let reporter = ProgressReporter::new(files.len() as u64)?;
        let groups = hash_batch_observed(
            &files,
            algorithm,
            buffer_size,
            existing.as_ref(),
            &reporter,
        );
        reporter.finish();
        groups
    } else {
        hash_batch(&files, algorithm, buffer_size, existing.as_ref())
    };

    info!(
        "Grouped {} files under {} distinct {} digests",
        files.len(),
        groups.len(),
        algorithm
    );

    match output_json {
        Some(path) => groups.save(&path)?,
        None => println!("{}", groups.to_json_pretty()?),
    }

    Ok(ExitCode::SUCCESS)
}

/// Loads and merges prior-run hash indexes, later files overwriting earlier
/// ones on equal digest keys. Returns `None` when no inputs were given.
fn load_existing(inputs: &[PathBuf]) -> anyhow::Result<Option<HashIndex>> {
    if inputs.is_empty() {
        return Ok(None);
    }

    let mut merged = HashIndex::new();
    for path in inputs {
        merged.merge(HashIndex::load(path)?);
    }

    Ok(Some(merged))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
