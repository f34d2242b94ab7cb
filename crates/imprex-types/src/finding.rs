//! Findings exchanged between the extraction engine and the content mapper.

use crate::{Severity, StructureId};
use serde::{Deserialize, Serialize};

/// One detected pathology instance before merging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawFinding {
    pub structure: StructureId,
    /// Canonical short label; never empty.
    pub pathology: String,
    pub severity: Severity,
    /// Sub-location such as "posterior horn"; empty when none was found.
    pub location: String,
    /// The originating text unit, plus any merged "Also:" text after deduplication.
    pub details: String,
    /// Reserved for related fragments; always empty.
    pub associated: Vec<String>,
    /// True iff the severity came from the equivocal override.
    pub equivocal: bool,
    /// Negation-scrubbed sub-text the pathology and severity were resolved from.
    #[serde(skip)]
    pub evidence: String,
}

/// One finding per distinct structure within a report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DedupedFinding {
    pub finding: RawFinding,
    /// Position of the group's first raw finding in the pre-dedup list.
    pub first_index: usize,
    /// Number of raw findings folded into this one.
    pub merged: usize,
}

impl DedupedFinding {
    pub fn structure(&self) -> StructureId {
        self.finding.structure
    }

    pub fn severity(&self) -> Severity {
        self.finding.severity
    }
}
