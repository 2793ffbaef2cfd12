//! Terminal output for fixturegen
//!
//! Fixture generation is silent by default; progress lines appear with
//! `--verbose`, and `--quiet` suppresses everything but errors, including
//! the exercise listing.

use console::style;
use std::path::Path;

use crate::exercises::Exercise;
use crate::fixture::WriteSummary;

pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn shows_progress(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// One line per exercise once its fixtures are on disk
    pub fn fixtures_written(&self, exercise: Exercise, directory: &Path, summary: &WriteSummary) {
        if !self.shows_progress() {
            return;
        }
        println!(
            "{} {} {} {}",
            style("✔").green(),
            style(exercise).bold(),
            style(format!("{} fixtures", summary.written)).yellow(),
            style(format!("→ {}", directory.display())).dim()
        );
        if let (Some(first), Some(last)) = (&summary.first, &summary.last) {
            println!("  {}", style(format!("{} .. {}", file_label(first), file_label(last))).dim());
        }
    }

    pub fn exercise_skipped(&self, exercise: Exercise, reason: &str) {
        if self.shows_progress() {
            println!("{} {} {}", style("-").dim(), style(exercise).dim(), style(format!("skipped, {reason}")).dim());
        }
    }

    /// Closing line of a multi-exercise run
    pub fn run_total(&self, exercises: usize, fixtures: usize) {
        if self.shows_progress() {
            println!(
                "{} {}",
                style("Total:").bold(),
                style(format!("{fixtures} fixtures across {exercises} exercises")).yellow()
            );
        }
    }

    pub fn heading(&self, title: &str) {
        if !self.quiet {
            println!("{}", style(title).bold().underlined());
        }
    }

    /// Exercise name and description, the first line of a listing entry
    pub fn exercise_entry(&self, exercise: Exercise) {
        if !self.quiet {
            println!("  {:<20} {}", style(exercise.name()).cyan(), exercise.description());
        }
    }

    /// Labelled detail under a listing entry
    pub fn detail(&self, label: &str, value: &str) {
        if !self.quiet {
            println!("    {:<9} {}", style(format!("{label}:")).dim(), value);
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
