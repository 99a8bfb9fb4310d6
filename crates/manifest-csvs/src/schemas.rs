/*!
# Manifest Schema

The sample manifest is a comma-separated file whose first row names the
columns. Three columns are mandatory; any others are carried through to the
normalized output untouched.

| Column   | Meaning                                   |
|----------|-------------------------------------------|
| `sample` | Sample identifier                         |
| `R1`     | Path to the forward reads of the pair     |
| `R2`     | Path to the reverse reads of the pair     |
*/

use csv::StringRecord;
use std::path::{Path, PathBuf};

/// Columns every manifest must declare, in the order they are checked
pub const REQUIRED_COLUMNS: &[&str] = &["sample", "R1", "R2"];

/// File name of the normalized manifest, relative to the working directory
pub const DEFAULT_OUTPUT_FILENAME: &str = "manifest.csv";

// ================================================================================================
// Manifest
// ================================================================================================

/// A parsed manifest: the header row plus every data row, in file order.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Manifest {
    pub fn new(path: impl Into<PathBuf>, headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self {
            path: path.into(),
            headers,
            rows,
        }
    }

    /// Path the manifest was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Column names in file order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of the first column called `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Value of `column` in data row `row`
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }
}

// ================================================================================================
// Validation Report
// ================================================================================================

/// Summary of a successful validation run
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<String>,
}

impl ValidationReport {
    pub fn from_manifest(manifest: &Manifest, output: impl Into<PathBuf>) -> Self {
        Self {
            input: manifest.path().to_path_buf(),
            output: output.into(),
            row_count: manifest.row_count(),
            column_count: manifest.column_count(),
            columns: manifest.columns().map(str::to_string).collect(),
        }
    }
}
