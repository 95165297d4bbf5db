mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "procsight",
    version,
    about = "Diagnostics tool for chemical process equipment telemetry"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a batch of telemetry records and print the diagnostic report
    Analyze {
        /// Path to a JSON file holding an array of record objects
        input_file: PathBuf,

        /// Custom JSON rulebook file (replaces the builtin rules)
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Predefined rulebook (default: standard)
        #[arg(short, long = "preset", value_name = "NAME")]
        preset: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the report to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Also print the normalized row table
        #[arg(long)]
        verbose: bool,
    },
    /// Normalize records into canonical rows (without analyzing)
    Normalize {
        /// Path to a JSON file holding an array of record objects
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write normalized rows to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Manage and inspect rulebooks
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List predefined rulebooks
    List,
    /// Explain a rulebook in plain language
    Explain {
        /// Preset name (e.g., "standard")
        preset: String,
    },
    /// Print an example rulebook JSON with field descriptions
    Schema,
    /// Validate a custom rulebook file
    Validate {
        /// Path to JSON rulebook file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input_file,
            rules,
            preset,
            output,
            out,
            verbose,
        } => commands::analyze::run(input_file, rules, preset, &output, out, verbose),
        Commands::Normalize {
            input_file,
            output,
            out,
        } => commands::normalize::run(input_file, &output, out),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Explain { preset } => commands::rules::explain(&preset),
            RulesAction::Schema => commands::rules::schema(),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
