//! Severity classification.
//!
//! Tiers are checked in a fixed order: equivocal, severe, moderate, mild. The first tier with
//! a matching cue decides. Hedged language outranks everything else, so "complete tear cannot
//! be excluded" is equivocal rather than severe. Some cues carry an exception pattern:
//! "displaced" counts as severe, "non-displaced" does not.
//!
//! When no cue matches, a structure-specific default applies.

use crate::patterns::compile;
use imprex_types::{Severity, StructureFamily, StructureId};
use once_cell::sync::Lazy;
use regex::Regex;

pub struct SeverityCue {
    pub name: &'static str,
    pub pattern: Regex,
    /// Cue does not count when this also matches the text.
    pub except: Option<Regex>,
}

impl SeverityCue {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: compile(pattern),
            except: None,
        }
    }

    fn except(mut self, pattern: &str) -> Self {
        self.except = Some(compile(pattern));
        self
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text) && !self.except.as_ref().is_some_and(|e| e.is_match(text))
    }
}

pub struct SeverityTier {
    pub severity: Severity,
    pub cues: Vec<SeverityCue>,
}

pub static SEVERITY_TIERS: Lazy<Vec<SeverityTier>> = Lazy::new(|| {
    vec![
        SeverityTier {
            severity: Severity::Equivocal,
            cues: vec![
                SeverityCue::new(
                    "cannot be excluded",
                    r"\bcan(?:not|'t|\s+not)\s+(?:be\s+)?(?:entirely\s+|completely\s+)?exclud\w*|\bnot\s+(?:be\s+)?excluded\b",
                ),
                SeverityCue::new("may represent", r"\bmay\s+(?:represent|reflect|be)\b"),
                SeverityCue::new("possible", r"\bpossib(?:le|ly)\b"),
                SeverityCue::new("questionable", r"\bquestionabl[ey]\b"),
                SeverityCue::new(
                    "suspected",
                    r"\bsuspect(?:ed)?\b|\bsuspicious\s+(?:for|of)\b",
                ),
                SeverityCue::new("equivocal", r"\bequivocal\b|\bindeterminate\b"),
            ],
        },
        SeverityTier {
            severity: Severity::Severe,
            cues: vec![
                SeverityCue::new("complete", r"\bcomplete(?:ly)?\b"),
                SeverityCue::new("full-thickness", r"\bfull[- ]thickness\b"),
                SeverityCue::new("rupture", r"\bruptur(?:e|ed|es)\b"),
                SeverityCue::new("massive", r"\bmassive\b"),
                SeverityCue::new("retracted", r"\bretract\w*"),
                SeverityCue::new("dislocation", r"\bdislocat\w*"),
                SeverityCue::new("avulsion", r"\bavuls\w*"),
                SeverityCue::new("displaced", r"\bdisplace(?:d|ment)\b")
                    .except(r"\bnon[- ]?displaced\b|\bnot\s+displaced\b|\bminimally\s+displaced\b|\bundisplaced\b"),
                SeverityCue::new("hill-sachs", r"\bhill[- ]sachs\b"),
                SeverityCue::new("bony bankart", r"\bbony\s+bankart\b"),
                SeverityCue::new("bucket-handle", r"\bbucket[- ]handle\b"),
                SeverityCue::new("high grade", r"\bgrade\s*(?:3|4|iii|iv)\b"),
                SeverityCue::new("severe", r"\bsevere(?:ly)?\b"),
            ],
        },
        SeverityTier {
            severity: Severity::Moderate,
            cues: vec![
                SeverityCue::new("partial", r"\bpartial(?:ly)?\b|\bpartial[- ]thickness\b"),
                SeverityCue::new("high-grade", r"\bhigh[- ]grade\b"),
                SeverityCue::new("moderate", r"\bmoderate(?:ly)?\b"),
                SeverityCue::new("slap", r"\bslap\b"),
                SeverityCue::new("bankart", r"\bbankart\b"),
                SeverityCue::new("tendinosis", r"\btendino(?:sis|pathy)\b"),
                SeverityCue::new("subluxation", r"\bsublux\w*"),
                SeverityCue::new("unstable", r"\bunstable\b"),
                SeverityCue::new("grade 2", r"\bgrade\s*(?:2|ii)\b"),
            ],
        },
        SeverityTier {
            severity: Severity::Mild,
            cues: vec![
                SeverityCue::new("small", r"\b(?:small|minor|tiny|minimal|trace)\b"),
                SeverityCue::new("mild", r"\bmild(?:ly)?\b"),
                SeverityCue::new(
                    "signal change",
                    r"\bsignal\s+(?:abnormality|change|alteration|intensity)\b",
                ),
                SeverityCue::new("fraying", r"\bfray(?:ed|ing)?\b"),
                SeverityCue::new("edema", r"\bo?edema(?:tous)?\b"),
                SeverityCue::new("superficial", r"\bsuperficial\b"),
                SeverityCue::new("stable", r"\bstable\b"),
                SeverityCue::new("degenerative", r"\bdegenerat(?:ive|ion)\b"),
                SeverityCue::new("grade 1", r"\bgrade\s*(?:1|i)\b"),
            ],
        },
    ]
});

/// Outcome of classifying one finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeverityResolution {
    /// Tier that decided; `Equivocal` is kept here and only flattened for presentation.
    pub severity: Severity,
    /// Hedged language decided the result.
    pub equivocal: bool,
    /// Name of the deciding cue; `None` when the structure default applied.
    pub cue: Option<&'static str>,
}

/// Severity used when no cue matches.
pub fn structure_default(structure: StructureId, text: &str) -> Severity {
    static TORN: Lazy<Regex> = Lazy::new(|| compile(r"\btears?\b|\btorn\b"));
    static PARTIAL: Lazy<Regex> = Lazy::new(|| compile(r"\bpartial\w*"));
    static FRACTURE: Lazy<Regex> = Lazy::new(|| compile(r"\bfractur\w*"));

    match structure.family() {
        StructureFamily::Tendon if TORN.is_match(text) => {
            if PARTIAL.is_match(text) {
                Severity::Moderate
            } else {
                Severity::Severe
            }
        }
        StructureFamily::Ligament if TORN.is_match(text) => Severity::Severe,
        StructureFamily::Meniscus
        | StructureFamily::Labrum
        | StructureFamily::Cartilage
        | StructureFamily::Capsule => Severity::Moderate,
        StructureFamily::Bone if FRACTURE.is_match(text) => Severity::Moderate,
        StructureFamily::Fluid if structure == StructureId::Effusion => Severity::Moderate,
        _ => Severity::Mild,
    }
}

/// Classify the severity of `text` describing `structure`.
pub fn classify(text: &str, structure: StructureId) -> SeverityResolution {
    for tier in SEVERITY_TIERS.iter() {
        if let Some(cue) = tier.cues.iter().find(|c| c.matches(text)) {
            return SeverityResolution {
                severity: tier.severity,
                equivocal: tier.severity == Severity::Equivocal,
                cue: Some(cue.name),
            };
        }
    }

    SeverityResolution {
        severity: structure_default(structure, text),
        equivocal: false,
        cue: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_order_is_fixed() {
        let order: Vec<Severity> = SEVERITY_TIERS.iter().map(|t| t.severity).collect();
        assert_eq!(
            order,
            vec![
                Severity::Equivocal,
                Severity::Severe,
                Severity::Moderate,
                Severity::Mild
            ]
        );
    }

    #[test]
    fn test_severe_cues() {
        let r = classify("Complete tear of the ACL", StructureId::Acl);
        assert_eq!(r.severity, Severity::Severe);
        assert_eq!(r.cue, Some("complete"));
        assert!(!r.equivocal);
        assert_eq!(
            classify("Full-thickness supraspinatus tear", StructureId::Supraspinatus).severity,
            Severity::Severe
        );
    }

    #[test]
    fn test_hedged_language_outranks_severe() {
        let r = classify("Complete ACL tear cannot be excluded", StructureId::Acl);
        assert!(r.equivocal);
        assert_eq!(r.severity, Severity::Equivocal);
        assert_eq!(r.severity.for_presentation(), Severity::Mild);
        assert_eq!(r.cue, Some("cannot be excluded"));
        assert!(classify("Possible SLAP tear", StructureId::LabrumSuperior).equivocal);
    }

    #[test]
    fn test_moderate_and_mild_cues() {
        assert_eq!(
            classify("Moderate joint effusion.", StructureId::Effusion).severity,
            Severity::Moderate
        );
        assert_eq!(
            classify("Partial tear of the ACL", StructureId::Acl).severity,
            Severity::Moderate
        );
        assert_eq!(
            classify("bone bruising of the lateral femoral condyle.", StructureId::LateralFemoralCondyle)
                .severity,
            Severity::Mild
        );
        assert_eq!(
            classify("Small joint effusion", StructureId::Effusion).severity,
            Severity::Mild
        );
    }

    #[test]
    fn test_displaced_exception() {
        assert_eq!(
            classify("Displaced fracture of the patella", StructureId::Patella).severity,
            Severity::Severe
        );
        let r = classify("Non-displaced fracture of the patella", StructureId::Patella);
        assert_eq!(r.severity, Severity::Moderate);
        assert_eq!(r.cue, None);
    }

    #[test]
    fn test_structure_defaults() {
        assert_eq!(
            classify("Supraspinatus tear", StructureId::Supraspinatus).severity,
            Severity::Severe
        );
        assert_eq!(classify("ACL tear", StructureId::Acl).severity, Severity::Severe);
        assert_eq!(
            classify("Medial meniscus tear", StructureId::MeniscusMedial).severity,
            Severity::Moderate
        );
        assert_eq!(
            classify("Joint effusion", StructureId::Effusion).severity,
            Severity::Moderate
        );
        assert_eq!(
            classify("Baker's cyst", StructureId::BakerCyst).severity,
            Severity::Mild
        );
        assert_eq!(
            classify("AC joint arthrosis", StructureId::AcJoint).severity,
            Severity::Mild
        );
        assert_eq!(classify("MCL", StructureId::Mcl).severity, Severity::Mild);
    }

    #[test]
    fn test_default_tendon_partial_is_moderate() {
        assert_eq!(
            structure_default(StructureId::Supraspinatus, "partial-sided tear"),
            Severity::Moderate
        );
    }
}
