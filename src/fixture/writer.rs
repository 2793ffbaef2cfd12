//! Fixture files on disk
//!
//! Each record lands in its own file named by a zero-padded sequential index
//! (`00.in`, `01.in`, ...). Files are created or truncated, never appended to,
//! so running the same generator twice yields byte-identical output.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WIDTH: usize = 2;
pub const DEFAULT_EXTENSION: &str = "in";

/// Writes records to sequentially numbered fixture files
#[derive(Debug, Clone)]
pub struct FixtureWriter {
    directory: PathBuf,
    first_index: usize,
    width: usize,
    extension: String,
}

/// Outcome of [`FixtureWriter::write_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub first: Option<PathBuf>,
    pub last: Option<PathBuf>,
}

/// A fixture that would be written, for dry runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFixture {
    pub index: usize,
    pub file_name: String,
    pub record: String,
}

impl FixtureWriter {
    /// Writer rooted at `directory`, numbering from zero as `NN.in`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            first_index: 0,
            width: DEFAULT_WIDTH,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_first_index(mut self, first_index: usize) -> Self {
        self.first_index = first_index;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn first_index(&self) -> usize {
        self.first_index
    }

    /// `index` zero-padded to the configured width, plus the extension
    pub fn file_name(&self, index: usize) -> String {
        format!("{index:0width$}.{}", self.extension, width = self.width)
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.directory.join(self.file_name(index))
    }

    /// Write `record` plus a trailing newline as the whole content of fixture `index`
    pub fn write(&self, index: usize, record: &str) -> Result<PathBuf> {
        let path = self.path_for(index);
        fs::write(&path, format!("{record}\n"))
            .with_context(|| format!("Failed to write fixture: {}", path.display()))?;
        tracing::debug!("Wrote {} ({:?})", path.display(), record);
        Ok(path)
    }

    /// Index of the record at `offset` from the first one
    fn index_at(&self, offset: usize) -> Result<usize> {
        self.first_index.checked_add(offset).with_context(|| {
            format!(
                "Fixture index overflows: first index {} plus offset {}",
                self.first_index, offset
            )
        })
    }

    /// Write every record in encounter order, numbering from the first index
    ///
    /// The whole index range is checked before anything touches the disk.
    /// Stops at the first write failure; files already written are left in place.
    pub fn write_all<I>(&self, records: I) -> Result<WriteSummary>
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: ExactSizeIterator,
    {
        let records = records.into_iter();
        if let Some(last_offset) = records.len().checked_sub(1) {
            self.index_at(last_offset)?;
        }

        fs::create_dir_all(&self.directory).with_context(|| {
            format!("Failed to create directory: {}", self.directory.display())
        })?;

        let mut summary = WriteSummary::default();
        for (offset, record) in records.enumerate() {
            let path = self.write(self.index_at(offset)?, &record)?;
            if summary.first.is_none() {
                summary.first = Some(path.clone());
            }
            summary.last = Some(path);
            summary.written += 1;
        }
        Ok(summary)
    }

    /// The fixtures `write_all` would produce, without touching the disk
    pub fn plan<I>(&self, records: I) -> Result<Vec<PlannedFixture>>
    where
        I: IntoIterator<Item = String>,
    {
        records
            .into_iter()
            .enumerate()
            .map(|(offset, record)| {
                let index = self.index_at(offset)?;
                Ok(PlannedFixture {
                    index,
                    file_name: self.file_name(index),
                    record,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn records(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_file_name_is_zero_padded() {
        let writer = FixtureWriter::new(".");
        assert_eq!(writer.file_name(0), "00.in");
        assert_eq!(writer.file_name(7), "07.in");
        assert_eq!(writer.file_name(42), "42.in");
        assert_eq!(writer.file_name(100), "100.in");
    }

    #[test]
    fn test_custom_width_and_extension() {
        let writer = FixtureWriter::new(".").with_width(3).with_extension("txt");
        assert_eq!(writer.file_name(5), "005.txt");
    }

    #[test]
    fn test_write_appends_newline() {
        let dir = TempDir::new().unwrap();
        let writer = FixtureWriter::new(dir.path());
        let path = writer.write(3, "2 50000").unwrap();
        assert_eq!(path, dir.path().join("03.in"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "2 50000\n");
    }

    #[test]
    fn test_empty_record_writes_blank_line() {
        let dir = TempDir::new().unwrap();
        let path = FixtureWriter::new(dir.path()).write(0, "").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "\n");
    }

    #[test]
    fn test_write_all_numbers_in_encounter_order() {
        let dir = TempDir::new().unwrap();
        let writer = FixtureWriter::new(dir.path());
        let summary = writer
            .write_all(records(&["1 500000", "2 50000", "3 33000"]))
            .unwrap();

        assert_eq!(summary.written, 3);
        assert_eq!(summary.first, Some(dir.path().join("00.in")));
        assert_eq!(summary.last, Some(dir.path().join("02.in")));
        assert_eq!(fs::read_to_string(dir.path().join("01.in")).unwrap(), "2 50000\n");
    }

    #[test]
    fn test_write_all_honours_first_index() {
        let dir = TempDir::new().unwrap();
        let writer = FixtureWriter::new(dir.path()).with_first_index(1);
        writer.write_all(records(&["a", "b"])).unwrap();

        assert!(!dir.path().join("00.in").exists());
        assert_eq!(fs::read_to_string(dir.path().join("01.in")).unwrap(), "a\n");
        assert_eq!(fs::read_to_string(dir.path().join("02.in")).unwrap(), "b\n");
    }

    #[test]
    fn test_rewrite_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("00.in"), "stale content that is longer\n").unwrap();
        FixtureWriter::new(dir.path()).write_all(records(&["1 2"])).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("00.in")).unwrap(), "1 2\n");
    }

    #[test]
    fn test_write_all_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("barrier").join("fixtures");
        let summary = FixtureWriter::new(&nested).write_all(records(&["1"])).unwrap();
        assert_eq!(summary.written, 1);
        assert!(nested.join("00.in").is_file());
    }

    #[test]
    fn test_write_all_with_no_records() {
        let dir = TempDir::new().unwrap();
        let summary = FixtureWriter::new(dir.path()).write_all(Vec::new()).unwrap();
        assert_eq!(summary, WriteSummary::default());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unwritable_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let error = FixtureWriter::new(blocker.join("out"))
            .write_all(records(&["1"]))
            .unwrap_err();
        assert!(error.to_string().contains("Failed to create directory"));
    }

    #[test]
    fn test_plan_does_not_touch_disk() {
        let dir = TempDir::new().unwrap();
        let writer = FixtureWriter::new(dir.path().join("never")).with_first_index(1);
        let plan = writer.plan(records(&["16 1 1 16", "16 1 1 32"])).unwrap();

        assert_eq!(
            plan,
            vec![
                PlannedFixture {
                    index: 1,
                    file_name: "01.in".to_string(),
                    record: "16 1 1 16".to_string(),
                },
                PlannedFixture {
                    index: 2,
                    file_name: "02.in".to_string(),
                    record: "16 1 1 32".to_string(),
                },
            ]
        );
        assert!(!dir.path().join("never").exists());
    }

    #[test]
    fn test_write_failure_midway_keeps_earlier_files() {
        let dir = TempDir::new().unwrap();
        // A directory squatting on the second fixture's name
        fs::create_dir(dir.path().join("01.in")).unwrap();

        let error = FixtureWriter::new(dir.path())
            .write_all(records(&["a", "b", "c"]))
            .unwrap_err();

        assert!(error.to_string().contains("Failed to write fixture"));
        assert!(error.to_string().contains("01.in"));
        assert_eq!(fs::read_to_string(dir.path().join("00.in")).unwrap(), "a\n");
        assert!(!dir.path().join("02.in").exists());
    }

    #[test]
    fn test_index_overflow_is_rejected_before_writing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let writer = FixtureWriter::new(&out).with_first_index(usize::MAX);

        let error = writer.write_all(records(&["a", "b"])).unwrap_err();
        assert!(error.to_string().contains("overflows"));
        assert!(!out.exists());

        let error = writer.plan(records(&["a", "b"])).unwrap_err();
        assert!(error.to_string().contains("overflows"));
    }

    #[test]
    fn test_last_representable_index_is_usable() {
        let dir = TempDir::new().unwrap();
        let writer = FixtureWriter::new(dir.path()).with_first_index(usize::MAX);
        let summary = writer.write_all(records(&["only"])).unwrap();
        assert_eq!(summary.written, 1);
        assert_eq!(summary.first, Some(dir.path().join(format!("{}.in", usize::MAX))));
    }
}
