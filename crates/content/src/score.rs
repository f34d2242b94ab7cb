//! Numeric severity scores for visual intensity.
//!
//! Each tier owns a band within `[0, 1]`. A finding scores the band's high end when its
//! evidence text uses intensity language and the band midpoint otherwise.

use imprex_types::{RawFinding, Severity};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBand {
    pub low: f64,
    pub high: f64,
}

impl ScoreBand {
    const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

pub const MILD_BAND: ScoreBand = ScoreBand::new(0.15, 0.35);
pub const MODERATE_BAND: ScoreBand = ScoreBand::new(0.40, 0.60);
pub const SEVERE_BAND: ScoreBand = ScoreBand::new(0.70, 0.90);
pub const EQUIVOCAL_BAND: ScoreBand = ScoreBand::new(0.10, 0.25);

fn build(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

static INTENSITY: Lazy<Regex> = Lazy::new(|| {
    build(
        r"\b(?:complete(?:ly)?|full[- ]thickness|massive|retracted|ruptur\w*|displaced|bucket[- ]handle|grade\s*(?:3|4|iii|iv)|complex|large)\b",
    )
});

static NOT_DISPLACED: Lazy<Regex> = Lazy::new(|| build(r"\b(?:non[- ]?|un)displaced\b"));

/// Band for a tier. Equivocal findings use the equivocal band whatever tier they carry.
pub fn band_for(severity: Severity, equivocal: bool) -> ScoreBand {
    if equivocal {
        return EQUIVOCAL_BAND;
    }
    match severity {
        Severity::Severe => SEVERE_BAND,
        Severity::Moderate => MODERATE_BAND,
        Severity::Mild => MILD_BAND,
        Severity::Equivocal => EQUIVOCAL_BAND,
    }
}

/// True when `text` contains intensity language.
pub fn has_intensity_language(text: &str) -> bool {
    INTENSITY.is_match(&NOT_DISPLACED.replace_all(text, ""))
}

/// Score in `[0, 1]` for a finding.
pub fn severity_score(finding: &RawFinding) -> f64 {
    let band = band_for(finding.severity, finding.equivocal);
    let text = if finding.evidence.is_empty() {
        &finding.details
    } else {
        &finding.evidence
    };
    if has_intensity_language(text) {
        band.high
    } else {
        band.midpoint()
    }
}
