//! Shared fixture generation for every exercise command

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::exercises::{Exercise, Generator};
use crate::fixture::{FixtureWriter, WriteSummary};

/// Resolved output options, CLI flags layered over config
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub directory: PathBuf,
    pub first_index: Option<usize>,
    pub width: usize,
    pub extension: String,
    pub dry_run: bool,
}

impl RunOptions {
    fn writer(&self, exercise: Exercise, directory: &Path) -> FixtureWriter {
        FixtureWriter::new(directory)
            .with_first_index(self.first_index.unwrap_or(exercise.default_first_index()))
            .with_width(self.width)
            .with_extension(self.extension.as_str())
    }
}

/// Generate a curated exercise into the configured directory
pub fn execute_curated(exercise: Exercise, options: &RunOptions, output: &Output) -> Result<()> {
    let generator = Generator::curated(exercise)
        .with_context(|| format!("{exercise} has no curated scenario table"))?;
    execute(&generator, &options.directory, options, output)?;
    Ok(())
}

/// Write (or, on a dry run, print) every fixture of `generator` into `directory`
pub fn execute(
    generator: &Generator,
    directory: &Path,
    options: &RunOptions,
    output: &Output,
) -> Result<WriteSummary> {
    let exercise = generator.exercise();
    let writer = options.writer(exercise, directory);

    if generator.is_empty() {
        tracing::warn!("{}: parameter space is empty, no fixtures generated", exercise);
    }

    if options.dry_run {
        for fixture in writer.plan(generator.records())? {
            println!("{}: {}", writer.directory().join(&fixture.file_name).display(), fixture.record);
        }
        return Ok(WriteSummary::default());
    }

    tracing::info!(
        "Generating {} {} fixtures into {}",
        generator.len(),
        exercise,
        directory.display()
    );
    let summary = writer.write_all(generator.records())?;

    output.fixtures_written(exercise, directory, &summary);
    Ok(summary)
}
