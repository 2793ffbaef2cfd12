use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::Output;
use crate::config::FixturegenConfig;
use crate::exercises::Exercise;

pub mod all;
pub mod blocking_queue;
pub mod config;
pub mod generate;
pub mod list;

use generate::RunOptions;

#[derive(Parser)]
#[command(
    name = "fixturegen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Deterministic input fixtures for concurrency primitive exercises",
    long_about = "fixturegen enumerates each exercise's parameter space and writes one \
                  NN.in file per combination, numbered in enumeration order."
)]
pub struct Cli {
    /// Directory to write fixtures into [default: output.directory from config]
    #[arg(short, long, value_name = "DIR", global = true)]
    pub output: Option<PathBuf>,

    /// Number the first fixture file from N instead of the exercise default
    #[arg(long, value_name = "N", global = true)]
    pub first_index: Option<usize>,

    /// Print the fixtures that would be written without touching the disk
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Thread barrier fixtures: "threads iterations"
    Barrier,
    /// Blocking queue fixtures swept over four ranges: "capacity readers writers items"
    BlockingQueue(blocking_queue::BlockingQueueArgs),
    /// Centipede fixtures: "foots steps"
    Centipede,
    /// Robot fixtures: blank lines
    Robot,
    /// Tournament-tree mutex fixtures: "threads iterations shared"
    TournamentMutex,
    /// Generate every exercise into <DIR>/<exercise>/
    All(all::AllArgs),
    /// List exercises and their record schemas
    List(list::ListArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let config = FixturegenConfig::load_with_custom_config(self.config.as_deref())?;
        let settings = config.settings()?;
        tracing::debug!("Loaded settings: {:?}", settings);

        let options = RunOptions {
            directory: self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&settings.output.directory)),
            first_index: self.first_index,
            width: settings.output.width,
            extension: settings.output.extension.clone(),
            dry_run: self.dry_run,
        };

        match self.command {
            Some(Commands::Barrier) => generate::execute_curated(Exercise::Barrier, &options, &output),
            Some(Commands::BlockingQueue(args)) => blocking_queue::execute(args, &options, &output),
            Some(Commands::Centipede) => generate::execute_curated(Exercise::Centipede, &options, &output),
            Some(Commands::Robot) => generate::execute_curated(Exercise::Robot, &options, &output),
            Some(Commands::TournamentMutex) => {
                generate::execute_curated(Exercise::TournamentMutex, &options, &output)
            }
            Some(Commands::All(args)) => all::execute(args, &settings, &options, &output),
            Some(Commands::List(args)) => list::execute(args, &output),
            Some(Commands::Config(args)) => config::execute(args, &config),
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info"),
        2 => tracing_subscriber::EnvFilter::new("debug"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    });

    // Logs go to stderr so stdout only ever carries requested output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
