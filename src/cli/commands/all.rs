//! Generate every exercise, each into its own subdirectory

use anyhow::{Context, Result};
use clap::Args;

use super::generate::{self, RunOptions};
use crate::cli::Output;
use crate::config::{BlockingQueueRanges, Settings};
use crate::exercises::{Exercise, Generator};

#[derive(Args)]
pub struct AllArgs {
    /// Leave these exercises out of the run
    #[arg(long, value_enum, value_name = "EXERCISE", value_delimiter = ',')]
    pub skip: Vec<Exercise>,
}

pub fn execute(args: AllArgs, settings: &Settings, options: &RunOptions, output: &Output) -> Result<()> {
    // Every generator is built before the first fixture is written
    let queue_axes = settings
        .blocking_queue
        .as_ref()
        .map(BlockingQueueRanges::axes)
        .transpose()
        .context("Invalid blocking_queue ranges in configuration")?;

    let mut generators = Vec::new();
    for exercise in Exercise::ALL {
        if args.skip.contains(&exercise) {
            tracing::info!("Skipping {}: excluded on the command line", exercise);
            output.exercise_skipped(exercise, "excluded");
            continue;
        }
        let generator = match (Generator::curated(exercise), &queue_axes) {
            (Some(generator), _) => generator,
            (None, Some(axes)) => Generator::blocking_queue(axes)?,
            (None, None) => {
                tracing::info!("Skipping {}: no blocking_queue ranges configured", exercise);
                output.exercise_skipped(exercise, "no ranges configured");
                continue;
            }
        };
        generators.push(generator);
    }

    let mut total = 0;
    for generator in &generators {
        let directory = options.directory.join(generator.exercise().name());
        let summary = generate::execute(generator, &directory, options, output)?;
        total += summary.written;
    }

    if !options.dry_run {
        output.run_total(generators.len(), total);
    }
    Ok(())
}
