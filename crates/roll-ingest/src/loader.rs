//! JSON and CSV roll loaders.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use roll_model::Dataset;

use crate::error::{IngestError, Result};

/// Load a dataset, dispatching on the file extension.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a JSON array of roll records.
pub fn load_json(path: &Path) -> Result<Dataset> {
    let reader = BufReader::new(open(path)?);
    let dataset: Dataset =
        serde_json::from_reader(reader).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(records = dataset.len(), path = %path.display(), "loaded JSON dataset");
    Ok(dataset)
}

/// Load a CSV roll with the export's column headers.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(open(path)?));
    let mut dataset = Dataset::new();
    for row in reader.deserialize() {
        let record = row.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        dataset.push(record);
    }
    info!(records = dataset.len(), path = %path.display(), "loaded CSV dataset");
    Ok(dataset)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
