use crate::hasher::{DEFAULT_BUFFER_SIZE, HashAlgorithm};
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Tool for hashing files and grouping paths by content digest
#[derive(Parser, Debug)]
#[command(name = "hashgroup", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the hash of files
    Hash {
        /// Files or directories containing files to hash
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// JSON files with digest-to-paths mappings from previous runs
        #[arg(short = 'i', long = "input-json", value_name = "FILE")]
        input_json: Vec<PathBuf>,

        /// Write the resulting digest-to-paths mapping to this JSON file
        /// instead of stdout
        #[arg(short = 'o', long = "output-json", value_name = "FILE")]
        output_json: Option<PathBuf>,

        /// Hash algorithm to use
        #[arg(
            short = 't',
            long = "hash-algorithm",
            value_enum,
            default_value_t = HashAlgorithm::Sha256
        )]
        hash_algorithm: HashAlgorithm,

        /// Buffer size (in bytes) to read from each file
        #[arg(short = 'b', long = "buffer-size", default_value_t = DEFAULT_BUFFER_SIZE)]
        buffer_size: NonZeroUsize,

        /// Display progress while computing hashes
        #[arg(short, long)]
        progress: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
