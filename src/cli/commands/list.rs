use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::Output;
use crate::exercises::Exercise;

#[derive(Args)]
pub struct ListArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ExerciseInfo {
    exercise: Exercise,
    description: &'static str,
    schema: &'static [&'static str],
    first_index: usize,
    /// `None` for swept exercises, whose size depends on the ranges given
    fixtures: Option<usize>,
}

impl From<Exercise> for ExerciseInfo {
    fn from(exercise: Exercise) -> Self {
        Self {
            exercise,
            description: exercise.description(),
            schema: exercise.schema(),
            first_index: exercise.default_first_index(),
            fixtures: exercise.curated_table().map(|table| table.len()),
        }
    }
}

pub fn execute(args: ListArgs, output: &Output) -> Result<()> {
    let infos: Vec<ExerciseInfo> = Exercise::ALL.into_iter().map(ExerciseInfo::from).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    output.heading("Exercises");
    for info in &infos {
        output.exercise_entry(info.exercise);
        let schema = if info.schema.is_empty() {
            "(blank line)".to_string()
        } else {
            info.schema.join(" ")
        };
        output.detail("record", &schema);
        let fixtures = match info.fixtures {
            Some(count) => format!(
                "{count} ({} .. {})",
                info.first_index,
                info.first_index + count.saturating_sub(1)
            ),
            None => format!("swept, numbered from {}", info.first_index),
        };
        output.detail("fixtures", &fixtures);
    }
    Ok(())
}
