use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vibecheck")]
#[command(author, version, about = "Classify short texts by vibe")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file with patterns, synonyms and lexicon (.yaml, .yml or .json)
    #[arg(short, long, global = true, env = "VIBECHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print aggregate metrics when done
    #[arg(long, global = true)]
    pub stats: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify each argument
    Check {
        /// Texts to classify
        #[arg(required = true)]
        texts: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Show the score of every pattern entry
        #[arg(long)]
        explain: bool,
    },

    /// Classify each non-empty line of stdin
    Batch {
        /// Print results as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// List the configured pattern entries
    Patterns,
}
