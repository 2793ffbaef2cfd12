//! Fixture serialization: record formatting and file writing

pub mod record;
pub mod writer;

pub use record::format_record;
pub use writer::{FixtureWriter, PlannedFixture, WriteSummary};
