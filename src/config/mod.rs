//! Configuration management for fixturegen
//!
//! Settings are layered with figment: embedded defaults, then user and
//! repository files, then `FIXTUREGEN_` environment variables. Command-line
//! flags take precedence over everything loaded here.

use serde::{Deserialize, Serialize};

use crate::exercises::BlockingQueueAxes;
use crate::fixture::writer::{DEFAULT_EXTENSION, DEFAULT_WIDTH};
use crate::range::RangeError;

mod core;

pub use self::core::FixturegenConfig;

/// Merged configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Where and how fixture files are written
    #[serde(default)]
    pub output: OutputSettings,

    /// Sweep used by `fixturegen all` for the blocking queue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking_queue: Option<BlockingQueueRanges>,
}

/// Fixture file placement and naming
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Output directory
    #[serde(default = "default_directory")]
    pub directory: String,

    /// File extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Zero-padded width of the fixture index
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_directory() -> String {
    ".".to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            width: default_width(),
        }
    }
}

/// Blocking queue ranges in their command-line form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockingQueueRanges {
    /// `base,start,end,step`
    pub capacity_log_range: String,
    /// `start,end,step`
    pub readers_range: String,
    /// `start,end,step`
    pub writers_range: String,
    /// `base,start,end,step`
    pub items_log_range: String,
}

impl BlockingQueueRanges {
    pub fn axes(&self) -> Result<BlockingQueueAxes, RangeError> {
        BlockingQueueAxes::parse(
            &self.capacity_log_range,
            &self.readers_range,
            &self.writers_range,
            &self.items_log_range,
        )
    }
}
