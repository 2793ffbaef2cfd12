//! Per-exercise parameter spaces
//!
//! Four exercises ship a curated scenario table; the blocking queue sweeps a
//! four-axis product supplied at run time. A [`Generator`] pairs an exercise
//! with its enumeration and yields the formatted records in fixture order.

use anyhow::Result;
use serde::Serialize;

use crate::enumerate::{CuratedTable, Enumeration};
use crate::fixture::format_record;

pub mod barrier;
pub mod blocking_queue;
pub mod centipede;
pub mod robot;
pub mod tournament_mutex;

pub use blocking_queue::BlockingQueueAxes;

/// The concurrency exercises fixtures are generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    Barrier,
    BlockingQueue,
    Centipede,
    Robot,
    TournamentMutex,
}

impl Exercise {
    pub const ALL: [Exercise; 5] = [
        Exercise::Barrier,
        Exercise::BlockingQueue,
        Exercise::Centipede,
        Exercise::Robot,
        Exercise::TournamentMutex,
    ];

    /// Name used on the command line and for output subdirectories
    pub fn name(self) -> &'static str {
        match self {
            Exercise::Barrier => "barrier",
            Exercise::BlockingQueue => "blocking-queue",
            Exercise::Centipede => "centipede",
            Exercise::Robot => "robot",
            Exercise::TournamentMutex => "tournament-mutex",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Exercise::Barrier => "Reusable thread barrier",
            Exercise::BlockingQueue => "Bounded blocking queue with readers and writers",
            Exercise::Centipede => "Centipede synchronization puzzle",
            Exercise::Robot => "Robot leg coordination puzzle",
            Exercise::TournamentMutex => "Tournament-tree mutex",
        }
    }

    /// Axis names in record order
    pub fn schema(self) -> &'static [&'static str] {
        match self {
            Exercise::Barrier => barrier::SCHEMA,
            Exercise::BlockingQueue => blocking_queue::SCHEMA,
            Exercise::Centipede => centipede::SCHEMA,
            Exercise::Robot => robot::SCHEMA,
            Exercise::TournamentMutex => tournament_mutex::SCHEMA,
        }
    }

    /// Index of the first fixture file unless overridden
    pub fn default_first_index(self) -> usize {
        match self {
            Exercise::BlockingQueue => blocking_queue::FIRST_INDEX,
            _ => 0,
        }
    }

    /// Scenario table for curated exercises, `None` for swept ones
    pub fn curated_table(self) -> Option<CuratedTable> {
        match self {
            Exercise::Barrier => Some(barrier::TABLE),
            Exercise::BlockingQueue => None,
            Exercise::Centipede => Some(centipede::TABLE),
            Exercise::Robot => Some(robot::TABLE),
            Exercise::TournamentMutex => Some(tournament_mutex::TABLE),
        }
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An exercise together with the parameter space to enumerate
#[derive(Debug, Clone)]
pub struct Generator {
    exercise: Exercise,
    enumeration: Enumeration,
}

impl Generator {
    /// Generator for an exercise with a curated table, `None` for swept exercises
    pub fn curated(exercise: Exercise) -> Option<Self> {
        exercise.curated_table().map(|table| Self {
            exercise,
            enumeration: Enumeration::Curated(table),
        })
    }

    pub fn blocking_queue(axes: &BlockingQueueAxes) -> Result<Self> {
        Ok(Self {
            exercise: Exercise::BlockingQueue,
            enumeration: Enumeration::Swept(axes.product()?),
        })
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn enumeration(&self) -> &Enumeration {
        &self.enumeration
    }

    pub fn len(&self) -> usize {
        self.enumeration.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enumeration.is_empty()
    }

    /// Formatted records in fixture order
    pub fn records(&self) -> impl ExactSizeIterator<Item = String> + '_ {
        self.enumeration.tuples().map(|tuple| format_record(&tuple))
    }
}
