//! Batch analysis of many reports from one YAML file.
//!
//! The file is a YAML sequence of entries:
//!
//! ```yaml
//! - id: case-001
//!   text: |
//!     1. Complete ACL tear.
//!     2. Small joint effusion.
//! - id: case-002
//!   joint: shoulder
//!   text: Supraspinatus tendinosis.
//! ```
//!
//! Entries are analysed in parallel. A failing entry records its error and never aborts the
//! rest of the batch; output keeps file order.

use imprex_content::PresentationRecord;
use imprex_core::ReportService;
use imprex_types::{JointId, StructureId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read batch file: {0}")]
    Io(#[from] std::io::Error),
    #[error("batch file schema mismatch at {path}: {message}")]
    Schema { path: String, message: String },
    #[error("entry '{id}': {source}")]
    InvalidJoint {
        id: String,
        #[source]
        source: imprex_types::ParseJointError,
    },
    #[error("duplicate entry id '{0}'")]
    DuplicateId(String),
}

pub type BatchResult<T> = std::result::Result<T, BatchError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BatchEntryWire {
    id: String,
    text: String,
    #[serde(default)]
    joint: Option<String>,
}

/// One report to analyse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchEntry {
    pub id: String,
    pub text: String,
    pub joint: Option<JointId>,
}

/// Outcome for one entry: either records or the error message.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint: Option<JointId>,
    pub records: Vec<PresentationRecord>,
    pub unmapped_structures: Vec<StructureId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Parse batch entries from YAML text.
///
/// # Errors
///
/// Returns `BatchError::Schema` with the failing path (for example `[1].text`) when the YAML
/// does not match the entry schema, `InvalidJoint` for an unknown joint name and
/// `DuplicateId` when two entries share an id.
pub fn parse_batch(yaml_text: &str) -> BatchResult<Vec<BatchEntry>> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
    let wire: Vec<BatchEntryWire> = serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let message = err.into_inner().to_string();
        BatchError::Schema {
            path: if path.is_empty() || path == "." {
                "<root>".into()
            } else {
                path
            },
            message,
        }
    })?;

    let mut entries: Vec<BatchEntry> = Vec::with_capacity(wire.len());
    for entry in wire {
        if entries.iter().any(|e| e.id == entry.id) {
            return Err(BatchError::DuplicateId(entry.id));
        }
        let joint = match entry.joint.as_deref().map(str::trim).filter(|j| !j.is_empty()) {
            Some(name) => Some(name.parse::<JointId>().map_err(|source| {
                BatchError::InvalidJoint {
                    id: entry.id.clone(),
                    source,
                }
            })?),
            None => None,
        };
        entries.push(BatchEntry {
            id: entry.id,
            text: entry.text,
            joint,
        });
    }

    Ok(entries)
}

/// Read and parse a batch file.
///
/// # Errors
///
/// Returns `BatchError::Io` if the file cannot be read, otherwise as [`parse_batch`].
pub fn load_batch(path: &Path) -> BatchResult<Vec<BatchEntry>> {
    let text = std::fs::read_to_string(path)?;
    parse_batch(&text)
}

fn analyse_entry(service: &ReportService, entry: &BatchEntry) -> BatchOutcome {
    match service.analyse(&entry.text, entry.joint) {
        Ok(analysis) => BatchOutcome {
            id: entry.id.clone(),
            joint: Some(analysis.joint),
            records: analysis.records,
            unmapped_structures: analysis.unmapped_structures,
            error: None,
        },
        Err(e) => {
            tracing::warn!(id = %entry.id, error = %e, "batch entry failed");
            BatchOutcome {
                id: entry.id.clone(),
                joint: entry.joint,
                records: Vec::new(),
                unmapped_structures: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

/// Analyse every entry in parallel, preserving input order.
pub fn run_batch(service: &ReportService, entries: &[BatchEntry]) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = entries
        .par_iter()
        .map(|entry| analyse_entry(service, entry))
        .collect();

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    tracing::info!(entries = outcomes.len(), failed, "batch complete");
    outcomes
}
