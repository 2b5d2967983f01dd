//! Adapter for recognized-text exports produced by the text-acquisition
//! collaborator. The exchange format is a CSV with `File Name` and
//! `Recognized Text` columns, one row per uploaded file.

mod parser;

use crate::workflows::assessment::domain::DocumentText;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read recognized-text export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid recognized-text CSV data: {0}")]
    Csv(#[from] csv::Error),
}

pub struct DocumentBatchImporter;

impl DocumentBatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<DocumentText>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<DocumentText>, BatchImportError> {
        Ok(parser::parse_documents(reader)?)
    }
}
