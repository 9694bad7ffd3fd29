mod analysis;
mod crack;
mod stats;

use clap::{Parser, Subcommand};
use crack::crack_file;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codebreaker")]
#[command(about = "Cryptanalysis toolkit for classical cipher text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Brute-force a Caesar shift by English letter frequencies
    Crack {
        /// Cipher text file
        file: PathBuf,

        /// Number of candidate shifts to show
        #[arg(long, default_value_t = 5)]
        top: usize,
    },

    /// Letter statistics and a guess at the cipher family
    Stats {
        /// Text file to analyze
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Crack { file, top } => {
            let report = crack_file(&file, top)?;
            print!("{}", report);
        }
        Commands::Stats { file } => {
            let report = stats::run(&file)?;
            print!("{}", report);
        }
    }

    Ok(())
}
