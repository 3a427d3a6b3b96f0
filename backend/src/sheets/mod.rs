//! CSV-file-backed append-only sheet store.
//!
//! Each submission kind writes to its own sheet file under the configured
//! data directory. A sheet's first record is its header row, written lazily
//! on the first append so a fresh deployment needs no setup step. Rows are
//! never updated or deleted here; approval edits happen out of band.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use csv::{ReaderBuilder, WriterBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("sheet I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sheet record error: {0}")]
    Csv(#[from] csv::Error),
}

/// One append-only sheet backed by one CSV file.
#[derive(Clone)]
pub struct Sheet {
    path: PathBuf,
}

impl Sheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Total records in the sheet, header included. 0 for a missing file.
    pub fn row_count(&self) -> Result<usize, SheetError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        let mut count = 0;
        for record in reader.records() {
            record?;
            count += 1;
        }
        Ok(count)
    }

    /// Appends one data row, writing `header` first iff the sheet currently
    /// holds zero rows. Returns the new total row count.
    pub fn append(&self, header: &[&str], row: &[String]) -> Result<usize, SheetError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let mut count = self.row_count()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        if count == 0 {
            writer.write_record(header)?;
            count += 1;
        }
        writer.write_record(row)?;
        count += 1;
        writer.flush()?;

        Ok(count)
    }

    /// Every record in the sheet, header included. Empty for a missing file.
    pub fn rows(&self) -> Result<Vec<Vec<String>>, SheetError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }
}

/// Resolves the per-kind sheet files under the data directory.
#[derive(Clone)]
pub struct SheetRegistry {
    dir: PathBuf,
}

impl SheetRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn contact(&self) -> Sheet {
        Sheet::new(self.dir.join("contact.csv"))
    }

    pub fn project_inquiry(&self) -> Sheet {
        Sheet::new(self.dir.join("project_inquiry.csv"))
    }

    pub fn feedback(&self) -> Sheet {
        Sheet::new(self.dir.join("feedback.csv"))
    }
}
