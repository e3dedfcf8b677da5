//! quizreport CLI — renders reports for completed quiz sessions.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use quizreport_core::config::{Locale, OutputMode, ReportMode};

mod commands;

#[derive(Parser)]
#[command(name = "quizreport", version, about = "Quiz session report renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the report for a completed quiz log
    Render {
        /// Path to the quiz log JSON file
        #[arg(long)]
        log: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Report mode: verbose, concise
        #[arg(long)]
        mode: Option<ReportMode>,

        /// Output sink: console, file
        #[arg(long)]
        output: Option<OutputMode>,

        /// Report file path (implies --output file)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Label language: en, ru
        #[arg(long)]
        locale: Option<Locale>,

        /// Quiz title shown in the header
        #[arg(long)]
        title: Option<String>,

        /// Skip report output entirely
        #[arg(long)]
        disable: bool,
    },

    /// Check a quiz log for inconsistencies
    Validate {
        /// Path to the quiz log JSON file
        #[arg(long)]
        log: PathBuf,
    },

    /// Create starter config and example quiz log
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizreport=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            log,
            config,
            mode,
            output,
            path,
            locale,
            title,
            disable,
        } => commands::render::execute(
            log,
            config,
            commands::render::Overrides {
                mode,
                output,
                path,
                locale,
                title,
                disable,
            },
        ),
        Commands::Validate { log } => commands::validate::execute(log),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
