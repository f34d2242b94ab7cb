//! Normal-finding filter and negation scrubbing.
//!
//! A unit is suppressed when it uses normal language ("intact", "unremarkable", "no evidence
//! of", ...) and carries no pathology vocabulary once negated clauses are removed. The
//! conjunction matters: "ACL intact; small effusion noted" must still yield the effusion.
//!
//! Negated clauses are also removed before structure detection, so "No ACL tear, small
//! effusion" does not report the ACL.

use crate::patterns::compile;
use once_cell::sync::Lazy;
use regex::Regex;

static NORMAL_LANGUAGE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?:intact|normal|unremarkable|preserved|maintained|within normal limits|no evidence of|without evidence of|negative for|free of|no|without|absent)\b",
    )
});

static PATHOLOGY_VOCABULARY: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?:tear|tears|torn|ruptur\w*|disrupt\w*|fractur\w*|effusion|tendinosis|tendinopathy|tendinitis|tendonitis|lesion|sublux\w*|dislocat\w*|bruis\w*|contusion|o?edema|bursitis|cyst|degenerat\w*|chondromalacia|arthrosis|osteoarthritis|fray\w*|sprain\w*|impingement|capsulitis|thicken\w*|defect|fissur\w*|synovitis|hemarthrosis|lipohemarthrosis|avuls\w*|retract\w*|extru\w*|slap|bankart|hill[- ]sachs|signal abnormality|calcific\w*)\b",
    )
});

static NEGATION_TRIGGER: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(?:no|without|negative for|free of)\b"));

static CLAUSE_BREAK: Lazy<Regex> =
    Lazy::new(|| compile(r"[.;,\n]|\b(?:but|however|although|though|except|with)\b"));

// "and" closes a negation only once the negated object already names a pathology:
// "no fracture and moderate effusion" keeps the effusion, "no ACL and PCL tear" keeps nothing.
static COORDINATOR: Lazy<Regex> = Lazy::new(|| compile(r"\band\b"));

static CLAUSE_SEPARATOR: Lazy<Regex> = Lazy::new(|| compile(r"[;,]"));

/// True when `text` mentions a pathology after negated clauses are removed.
pub fn has_pathology_vocabulary(text: &str) -> bool {
    PATHOLOGY_VOCABULARY.is_match(&scrub_negations(text))
}

/// True when `text` describes a normal structure and nothing pathological.
pub fn is_normal_finding(text: &str) -> bool {
    NORMAL_LANGUAGE.is_match(text) && !has_pathology_vocabulary(text)
}

/// Byte offset where the negated clause starting at `from` ends.
fn negation_end(text: &str, from: usize) -> usize {
    let hard = CLAUSE_BREAK
        .find_at(text, from)
        .map_or(text.len(), |brk| brk.start());
    COORDINATOR
        .find_iter(&text[from..hard])
        .find(|and| PATHOLOGY_VOCABULARY.is_match(&text[from..from + and.start()]))
        .map_or(hard, |and| from + and.start())
}

/// Remove each negated clause: from a negation trigger up to the next clause break.
pub fn scrub_negations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(trigger) = NEGATION_TRIGGER.find_at(text, pos) {
        out.push_str(&text[pos..trigger.start()]);
        out.push(' ');
        pos = negation_end(text, trigger.end());
    }
    out.push_str(&text[pos..]);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove negated clauses, then drop `;`/`,` clauses that on their own describe a normal
/// structure. The result is what the detector, resolver and classifier see.
pub fn scrub(unit: &str) -> String {
    let scrubbed = scrub_negations(unit);

    CLAUSE_SEPARATOR
        .split(&scrubbed)
        .map(str::trim)
        .filter(|clause| clause.chars().any(char::is_alphanumeric))
        .filter(|clause| !is_normal_finding(clause))
        .collect::<Vec<_>>()
        .join(", ")
}
