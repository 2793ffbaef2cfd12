//! # fixturegen - deterministic fixtures for concurrency exercises
//!
//! Each concurrency exercise (thread barrier, bounded blocking queue,
//! centipede, robot, tournament-tree mutex) is driven by small input files
//! holding one line of space-separated integers. fixturegen enumerates each
//! exercise's parameter space and writes one `NN.in` file per combination.
//!
//! The pipeline is a single sequential pass:
//!
//! ```text
//! RangeDescriptor ──► CartesianProduct ─┐
//!                                       ├─► format_record ──► FixtureWriter ──► 00.in, 01.in, ...
//!          CuratedTable ────────────────┘
//! ```
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use fixturegen::exercises::{BlockingQueueAxes, Generator};
//! use fixturegen::fixture::FixtureWriter;
//!
//! let axes = BlockingQueueAxes::parse("2,4,6,1", "1,2,1", "1,2,1", "2,4,6,1")?;
//! let generator = Generator::blocking_queue(&axes)?;
//! let summary = FixtureWriter::new("fixtures")
//!     .with_first_index(1)
//!     .write_all(generator.records())?;
//! assert_eq!(summary.written, 4);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod enumerate;
pub mod exercises;
pub mod fixture;
pub mod range;

pub use cli::{Cli, Output};
pub use config::FixturegenConfig;

/// Result type alias for fixturegen operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
