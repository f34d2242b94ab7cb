//! Joint classification.
//!
//! Each supported joint has an ordered signature of weighted patterns. A report's score for a
//! joint is the sum over its patterns of `match count × weight`, where matches are
//! non-overlapping and case-insensitive. The best strictly-higher score wins; ties go to the
//! joint listed first in [`JOINT_SIGNATURES`] (knee before shoulder). That tie-break is stable
//! and intentional.

use crate::patterns::compile;
use imprex_types::JointId;
use once_cell::sync::Lazy;
use regex::Regex;

/// One weighted keyword/pattern in a joint signature.
pub struct WeightedPattern {
    pub pattern: Regex,
    pub weight: u32,
}

/// Detection signature for one joint.
pub struct JointSignature {
    pub joint: JointId,
    pub patterns: Vec<WeightedPattern>,
}

impl JointSignature {
    fn new(joint: JointId, patterns: &[(&str, u32)]) -> Self {
        Self {
            joint,
            patterns: patterns
                .iter()
                .map(|(pattern, weight)| WeightedPattern {
                    pattern: compile(pattern),
                    weight: *weight,
                })
                .collect(),
        }
    }

    /// Weighted match count of this signature over `text`.
    pub fn score(&self, text: &str) -> u32 {
        self.patterns
            .iter()
            .map(|p| p.pattern.find_iter(text).count() as u32 * p.weight)
            .sum()
    }
}

/// Signatures in tie-break order. Hip has no signature yet.
pub static JOINT_SIGNATURES: Lazy<Vec<JointSignature>> = Lazy::new(|| {
    vec![
        JointSignature::new(
            JointId::Knee,
            &[
                (r"\bknees?\b", 3),
                (r"\bmenisc\w*", 3),
                (r"\b(?:acl|pcl)\b|\b(?:anterior|posterior) cruciate\b", 3),
                (r"\b(?:mcl|lcl)\b|\bcollateral ligament", 2),
                (r"\bpatell\w*|\btrochle\w*", 2),
                (r"\bfemoral condyle|\btibial plateau|\btibia\b|\bfemur\b", 2),
                (r"\bbaker'?s?\s+cyst|\bpopliteal", 2),
                (r"\bhoffa|\bintercondylar|\bposterolateral corner", 1),
            ],
        ),
        JointSignature::new(
            JointId::Shoulder,
            &[
                (r"\bshoulders?\b", 3),
                (r"\brotator cuff", 3),
                (r"\bsupraspinatus|\binfraspinatus|\bsubscapularis|\bteres minor", 3),
                (r"\bglenoid|\bglenohumeral", 3),
                (r"\bslap\b|\bbankart|\bhill[- ]sachs", 3),
                (r"\blabr(?:um|al)\b", 2),
                (r"\bacromi\w*|\bsubacromial|\bsubdeltoid", 2),
                (r"\bhumeral head|\bhumerus\b|\bgreater tuberosity", 2),
                (r"\bbiceps|\bbicipital", 1),
            ],
        ),
    ]
});

/// Score of every signature, in table order.
pub fn joint_scores(text: &str) -> Vec<(JointId, u32)> {
    JOINT_SIGNATURES
        .iter()
        .map(|sig| (sig.joint, sig.score(text)))
        .collect()
}

/// Best-scoring joint, or `None` when every signature scores zero.
pub fn classify_joint(text: &str) -> Option<JointId> {
    let mut best: Option<(JointId, u32)> = None;
    for (joint, score) in joint_scores(text) {
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((joint, score)),
        }
    }

    tracing::debug!(joint = ?best.map(|b| b.0), score = best.map(|b| b.1), "classified joint");
    best.map(|(joint, _)| joint)
}
