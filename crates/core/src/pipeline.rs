//! Engine entry points.
//!
//! The pipeline is a pure function of the report text and joint: segment, drop normal units,
//! scrub negations, detect structures, then resolve pathology, location and severity for each
//! structure. Deduplication and content mapping finish the job in [`parse_report`].

use crate::dedup::deduplicate;
use crate::joint::classify_joint;
use crate::normal::{is_normal_finding, scrub};
use crate::pathology::{extract_location, resolve_pathology};
use crate::segment::segment;
use crate::severity::classify;
use crate::structures::{detect, table_for};
use crate::{ReportError, ReportResult};
use imprex_content::{map_findings, ContentLibrary, PresentationRecord};
use imprex_types::{JointId, RawFinding};

/// Best-scoring joint for `text`, or `None` when nothing joint-specific is mentioned.
pub fn detect_joint(text: &str) -> Option<JointId> {
    classify_joint(text)
}

/// Raw findings for `text` read as a `joint` report, in unit order.
///
/// # Errors
///
/// Returns `ReportError::UnsupportedJoint` if `joint` has no structure table.
pub fn extract_findings(text: &str, joint: JointId) -> ReportResult<Vec<RawFinding>> {
    let table = table_for(joint).ok_or(ReportError::UnsupportedJoint(joint))?;

    let mut findings = Vec::new();
    for unit in segment(text) {
        if is_normal_finding(&unit) {
            tracing::debug!(unit = %unit, "skipping normal unit");
            continue;
        }

        let cleaned = scrub(&unit);
        if cleaned.is_empty() {
            tracing::debug!(unit = %unit, "nothing left after negation scrubbing");
            continue;
        }

        for detected in detect(&cleaned, table) {
            let resolution = classify(&detected.evidence, detected.structure);
            let finding = RawFinding {
                structure: detected.structure,
                pathology: resolve_pathology(&detected.evidence, detected.structure),
                severity: resolution.severity,
                location: extract_location(&detected.evidence, detected.structure),
                details: unit.clone(),
                associated: Vec::new(),
                equivocal: resolution.equivocal,
                evidence: detected.evidence,
            };
            tracing::debug!(
                structure = %finding.structure,
                pathology = %finding.pathology,
                severity = %finding.severity,
                cue = resolution.cue.unwrap_or("default"),
                "extracted finding"
            );
            findings.push(finding);
        }
    }

    Ok(findings)
}

/// Presentation records for `text` read as a `joint` report.
///
/// An empty result means no pathological findings were recognised.
///
/// # Errors
///
/// Returns `ReportError::UnsupportedJoint` if `joint` has no pipeline.
pub fn parse_report(text: &str, joint: JointId) -> ReportResult<Vec<PresentationRecord>> {
    let raw = extract_findings(text, joint)?;
    let deduped = deduplicate(raw);
    Ok(map_findings(&ContentLibrary::for_joint(joint), &deduped))
}
