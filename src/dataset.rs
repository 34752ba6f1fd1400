use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::record::{Invoice, RecordKind, Report, User};
use crate::sample;

/// A loaded collection of one record kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Dataset {
    Users(Vec<User>),
    Invoices(Vec<Invoice>),
    Reports(Vec<Report>),
}

impl Dataset {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Users(_) => RecordKind::Users,
            Self::Invoices(_) => RecordKind::Invoices,
            Self::Reports(_) => RecordKind::Reports,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Users(v) => v.len(),
            Self::Invoices(v) => v.len(),
            Self::Reports(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sample(kind: RecordKind, today: NaiveDate) -> Self {
        match kind {
            RecordKind::Users => Self::Users(sample::users()),
            RecordKind::Invoices => Self::Invoices(sample::invoices()),
            RecordKind::Reports => Self::Reports(sample::reports(today)),
        }
    }
}

#[derive(Clone, Debug)]
pub enum DataSource {
    FilePath(String),
    Inline(Dataset),
    /// The built-in demo records; report ranges are relative to `today`.
    Sample { today: NaiveDate },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Anything without a YAML extension is read as JSON.
    pub fn from_path(path: &str) -> Self {
        let lower = path.trim().to_lowercase();
        if lower.ends_with(".yml") || lower.ends_with(".yaml") {
            Self::Yaml
        } else {
            Self::Json
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read data file: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {kind} from {path}: {source}")]
    ParseJson {
        kind: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {kind} from {path}: {source}")]
    ParseYaml {
        kind: &'static str,
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("inline dataset holds {found} but {expected} were requested")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

fn parse_records<T: DeserializeOwned>(
    kind: RecordKind,
    path: &str,
    contents: &str,
) -> Result<Vec<T>, DatasetError> {
    match DataFormat::from_path(path) {
        DataFormat::Json => {
            serde_json::from_str(contents).map_err(|e| DatasetError::ParseJson {
                kind: kind.as_str(),
                path: path.to_string(),
                source: e,
            })
        }
        DataFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|e| DatasetError::ParseYaml {
                kind: kind.as_str(),
                path: path.to_string(),
                source: e,
            })
        }
    }
}

fn load_file(kind: RecordKind, path: &str) -> Result<Dataset, DatasetError> {
    let path = crate::config::expand_tilde_string(path);
    let contents = std::fs::read_to_string(Path::new(&path)).map_err(|e| DatasetError::Read {
        path: path.clone(),
        source: e,
    })?;
    debug!(path = %path, bytes = contents.len(), "read data file");
    Ok(match kind {
        RecordKind::Users => Dataset::Users(parse_records(kind, &path, &contents)?),
        RecordKind::Invoices => Dataset::Invoices(parse_records(kind, &path, &contents)?),
        RecordKind::Reports => Dataset::Reports(parse_records(kind, &path, &contents)?),
    })
}

pub fn load_dataset(kind: RecordKind, source: &DataSource) -> Result<Dataset, DatasetError> {
    let dataset = match source {
        DataSource::FilePath(path) => load_file(kind, path)?,
        DataSource::Inline(dataset) => {
            if dataset.kind() != kind {
                return Err(DatasetError::KindMismatch {
                    expected: kind.as_str(),
                    found: dataset.kind().as_str(),
                });
            }
            dataset.clone()
        }
        DataSource::Sample { today } => Dataset::sample(kind, *today),
    };
    info!(kind = kind.as_str(), records = dataset.len(), "dataset loaded");
    Ok(dataset)
}
