//! Per-structure de-duplication.
//!
//! Findings are folded in encounter order. The first finding for a structure becomes its
//! survivor; a later finding with a strictly higher severity rank replaces it. Either way the
//! losing finding's pathology and details are appended to the survivor's details, so nothing
//! the report said is silently dropped. Output keeps first-appearance order.

use crate::constants::MERGED_DETAIL_PREFIX;
use imprex_types::{DedupedFinding, RawFinding};

fn append_merged(survivor: &mut RawFinding, loser: &RawFinding) {
    let kept = survivor.details.trim_end().trim_end_matches('.');
    survivor.details = format!(
        "{kept}. {MERGED_DETAIL_PREFIX} {} — {}",
        loser.pathology, loser.details
    );
}

/// Collapse findings to at most one per structure.
pub fn deduplicate(findings: Vec<RawFinding>) -> Vec<DedupedFinding> {
    let mut out: Vec<DedupedFinding> = Vec::new();

    for (index, finding) in findings.into_iter().enumerate() {
        let Some(pos) = out
            .iter()
            .position(|d| d.finding.structure == finding.structure)
        else {
            out.push(DedupedFinding {
                finding,
                first_index: index,
                merged: 0,
            });
            continue;
        };

        let existing = &mut out[pos];
        existing.merged += 1;
        if finding.severity.rank() > existing.finding.severity.rank() {
            let previous = std::mem::replace(&mut existing.finding, finding);
            append_merged(&mut existing.finding, &previous);
        } else {
            append_merged(&mut existing.finding, &finding);
        }
        tracing::debug!(
            structure = %existing.finding.structure,
            survivor = %existing.finding.pathology,
            "merged duplicate finding"
        );
    }

    out
}
