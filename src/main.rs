//! seqbatch CLI Entry Point
//!
//! # Usage
//!
//! ```bash
//! # Generate cuffdiff job scripts for every comparison
//! seqbatch batch diff -a RNA -c diff_config.json -u sam
//!
//! # Same, with debug logging
//! seqbatch batch diff -a RNA -c diff_config.json -u sam --verbose
//! ```

use std::process::ExitCode;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::{error, info};

use seqbatch::{ConsoleSink, ExperimentDescription, JobGenerator, APP_NAME, VERSION};

#[derive(Debug, Parser)]
#[command(name = "seqbatch", version, about = "Generates PBS scripts for bioinformatics batch analysis")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generates series of pbs files for similar bioinformatics analysis
    #[command(subcommand)]
    Batch(BatchCommand),
}

#[derive(Debug, Subcommand)]
enum BatchCommand {
    /// Generates one pbs file per comparison for differential expression
    Diff(DiffArgs),
}

#[derive(Debug, Args)]
struct DiffArgs {
    /// Application to use
    #[arg(short, long, value_enum)]
    app: Application,

    /// Description file path
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    conf: String,

    /// Username on the cluster
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    user: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Application {
    #[value(name = "RNA")]
    Rna,
}

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

fn print_banner() {
    println!();
    println!("{} v{}", APP_NAME.cyan().bold(), VERSION);
    println!("PBS Batch Script Generator");
    println!();
}

fn run_diff(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.app {
        Application::Rna => {
            let mut description = ExperimentDescription::new(&args.conf);
            description.load().map_err(|e| {
                error!("Failed to load description: {}", e);
                e
            })?;

            let mut generator = JobGenerator::new(ConsoleSink::colored());
            let scripts = generator.generate_all(&mut description, &args.user)?;

            println!();
            info!(
                "{} job scripts written from {}",
                scripts.len(),
                description.source_path().display()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    print_banner();

    let result = match cli.command {
        Command::Batch(BatchCommand::Diff(args)) => run_diff(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
