//! Severity tiers.

use serde::{Deserialize, Serialize};

/// Coarse clinical-significance bucket assigned by the severity classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    Equivocal,
}

impl Severity {
    /// Rank used when merging duplicate findings.
    ///
    /// `severe(2) > moderate(1) > mild(0) = equivocal(0)`
    pub fn rank(self) -> u8 {
        match self {
            Severity::Severe => 2,
            Severity::Moderate => 1,
            Severity::Mild | Severity::Equivocal => 0,
        }
    }

    /// Presentation records never carry `Equivocal`; it is shown as `Mild`.
    pub fn for_presentation(self) -> Severity {
        match self {
            Severity::Equivocal => Severity::Mild,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Equivocal => "equivocal",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
