//! Cadastro CLI - Command-line interface for CPF/CNPJ validation and formatting.

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{check, format, gen, id, normalize, scan, validate, KindArg};

#[derive(Parser)]
#[command(name = "cadastro")]
#[command(about = "Validation and formatting of Brazilian CPF/CNPJ documents")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins when set
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print only the digits of the input
    Normalize {
        /// Raw document text
        input: String,
    },
    /// Validate one CPF or CNPJ
    Validate {
        /// Raw document text, punctuation allowed
        input: String,
        /// Check as this kind instead of detecting it from the digit count
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Output the inspection report as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if the document is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Format digits with the CPF or CNPJ mask
    Format {
        /// Raw document text, complete or partial
        input: String,
        /// Mask to use (default: CPF up to 11 digits, CNPJ above)
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Validate one document per line from a file or stdin
    Check {
        /// Input file (or stdin if not provided)
        input: Option<String>,
        /// Output one JSON report per line
        #[arg(long)]
        json: bool,
        /// Exit with error code if any line is invalid
        #[arg(long)]
        strict: bool,
        /// Stop after N non-blank lines (default: unlimited)
        #[arg(long)]
        max_lines: Option<usize>,
    },
    /// Find CPF/CNPJ-shaped tokens in free text
    Scan {
        /// Input file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Only report tokens with consistent check digits
        #[arg(long)]
        valid_only: bool,
    },
    /// Generate deterministic valid documents for fixtures
    Gen {
        /// Document kind
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Number of documents
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Derivation seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Print punctuated documents
        #[arg(long)]
        formatted: bool,
    },
    /// Generate ephemeral list keys
    Id {
        /// Number of identifiers
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Normalize { input } => normalize::run(input),
        Commands::Validate {
            input,
            kind,
            json,
            strict,
        } => validate::run(input, kind, json, strict),
        Commands::Format { input, kind } => format::run(input, kind),
        Commands::Check {
            input,
            json,
            strict,
            max_lines,
        } => check::run(input, json, strict, max_lines),
        Commands::Scan {
            input,
            json,
            valid_only,
        } => scan::run(input, json, valid_only),
        Commands::Gen {
            kind,
            count,
            seed,
            formatted,
        } => gen::run(kind, count, seed, formatted),
        Commands::Id { count } => id::run(count),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
