use clap::{Args, Parser, Subcommand};
use cipherkit::cli::{
    explain, keygen, read_message, render_transcript, transform_message, KeygenOptions,
    TransformOptions,
};
use cipherkit::{Method, Mode, Result};
use std::path::PathBuf;
use std::process::ExitCode;

const PROFILE: &str = env!("CIPHERKIT_PROFILE");
const GIT_HASH: &str = env!("CIPHERKIT_GIT_HASH");

fn version_line() -> String {
    format!(
        "cipherkit {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        PROFILE,
        GIT_HASH
    )
}

#[derive(Parser)]
#[command(name = "cipherkit")]
#[command(author, about = "Classical cipher engine", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message
    #[command(alias = "e")]
    Encode(TransformArgs),

    /// Decode a message
    #[command(alias = "d")]
    Decode(TransformArgs),

    /// Explain how each method works, with worked examples
    #[command(alias = "x")]
    Explain {
        /// Only explain this method
        #[arg(value_parser = parse_method)]
        method: Option<Method>,
    },

    /// Generate random parameters for a method
    #[command(alias = "k")]
    Keygen {
        /// Method to generate parameters for
        #[arg(value_parser = parse_method)]
        method: Method,

        /// Keyword length (vigenere, columnar)
        #[arg(long, default_value = "6")]
        length: usize,

        /// Save the parameters as a JSON profile
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

#[derive(Args)]
struct TransformArgs {
    /// Message text (reads --input or stdin when omitted)
    message: Option<String>,

    /// Cipher method: substitution, replacement, vigenere, railfence, columnar
    #[arg(short, long, value_parser = parse_method)]
    method: Option<Method>,

    /// Shift for substitution (1-25)
    #[arg(long, allow_hyphen_values = true)]
    shift: Option<i32>,

    /// Keyword for vigenere and columnar (letters only)
    #[arg(long)]
    keyword: Option<String>,

    /// Rail count for railfence
    #[arg(long)]
    rails: Option<usize>,

    /// JSON profile holding method and parameters
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Read the message from a file
    #[arg(short, long, conflicts_with = "message")]
    input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show the transposition layout (railfence, columnar)
    #[arg(long)]
    show_grid: bool,

    /// Print a JSON transcript
    #[arg(long)]
    json: bool,

    /// Report each step on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_method(s: &str) -> std::result::Result<Method, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn run_transform(mode: Mode, args: TransformArgs) -> Result<()> {
    let message = read_message(args.message, args.input.as_deref())?;
    let options = TransformOptions {
        profile: args.profile,
        method: args.method,
        shift: args.shift,
        keyword: args.keyword,
        rails: args.rails,
        show_grid: args.show_grid,
    };

    if args.verbose {
        eprintln!("Read {} characters", message.chars().count());
    }
    let transcript = transform_message(&message, mode, &options)?;
    if args.verbose {
        eprintln!(
            "{} {}: {} -> {} characters",
            transcript.method,
            mode,
            transcript.input.chars().count(),
            transcript.output.chars().count()
        );
    }

    if let Some(path) = &args.output {
        std::fs::write(path, &transcript.output)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
    } else if let Some(path) = &args.output {
        println!("Wrote {}d message to {}", mode, path.display());
        if let Some(layout) = &transcript.layout {
            print!("{}", layout);
        }
    } else {
        print!("{}", render_transcript(&transcript));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_line());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encode(args) => run_transform(Mode::Encode, args),
        Commands::Decode(args) => run_transform(Mode::Decode, args),

        Commands::Explain { method } => explain(method).map(|page| print!("{}", page)),

        Commands::Keygen {
            method,
            length,
            save,
        } => {
            let options = KeygenOptions { method, length };
            keygen(&options, save.as_deref()).and_then(|spec| {
                println!("{}", serde_json::to_string_pretty(&spec)?);
                if let Some(path) = &save {
                    println!("Saved profile to {}", path.display());
                }
                Ok(())
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
