//! Content template types.
//!
//! Templates are `static` data. Text fields that also appear in [`PresentationRecord`] use
//! `Cow<'static, str>` so the same struct can be built in a `const` context and deserialised
//! from JSON.
//!
//! [`PresentationRecord`]: crate::PresentationRecord

use imprex_types::{RawFinding, StructureId};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Record description: fixed text, or a function of the finding for parameterised phrasing.
#[derive(Clone, Copy)]
pub enum Description {
    Static(&'static str),
    Templated(fn(&RawFinding) -> String),
}

impl Description {
    pub fn render(&self, finding: &RawFinding) -> String {
        match self {
            Description::Static(text) => (*text).to_string(),
            Description::Templated(describe) => describe(finding),
        }
    }
}

impl std::fmt::Debug for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Description::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Description::Templated(_) => f.write_str("Templated(..)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialistPerspective {
    pub specialty: Cow<'static, str>,
    pub perspective: Cow<'static, str>,
}

impl SpecialistPerspective {
    pub const fn new(specialty: &'static str, perspective: &'static str) -> Self {
        Self {
            specialty: Cow::Borrowed(specialty),
            perspective: Cow::Borrowed(perspective),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfAssessmentQuestion {
    pub question: Cow<'static, str>,
    pub rationale: Cow<'static, str>,
}

impl SelfAssessmentQuestion {
    pub const fn new(question: &'static str, rationale: &'static str) -> Self {
        Self {
            question: Cow::Borrowed(question),
            rationale: Cow::Borrowed(rationale),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentCategory {
    Conservative,
    Interventional,
    Surgical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentOption {
    pub name: Cow<'static, str>,
    pub category: TreatmentCategory,
    pub description: Cow<'static, str>,
    pub timeline: Cow<'static, str>,
    pub pros: Cow<'static, str>,
    pub cons: Cow<'static, str>,
}

impl TreatmentOption {
    pub const fn new(
        name: &'static str,
        category: TreatmentCategory,
        description: &'static str,
        timeline: &'static str,
        pros: &'static str,
        cons: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            category,
            description: Cow::Borrowed(description),
            timeline: Cow::Borrowed(timeline),
            pros: Cow::Borrowed(pros),
            cons: Cow::Borrowed(cons),
        }
    }
}

/// Viewer positioning metadata. Opaque to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraHint {
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl CameraHint {
    pub const fn new(position: [f32; 3], target: [f32; 3]) -> Self {
        Self { position, target }
    }
}

/// Clinical content for one structure.
#[derive(Debug)]
pub struct ContentTemplate {
    pub structure: StructureId,
    pub description: Description,
    pub expected_experience: &'static str,
    pub clinical_context: &'static str,
    /// Model node identifiers for the rendering surface.
    pub structure_targets: &'static [&'static str],
    pub camera_hint: CameraHint,
    pub specialist_perspectives: &'static [SpecialistPerspective],
    pub appointment_questions: &'static [&'static str],
    pub recovery_timeline: &'static str,
    pub self_assessment_questions: &'static [SelfAssessmentQuestion],
    pub treatment_options: &'static [TreatmentOption],
}

#[cfg(test)]
mod tests {
    use super::*;
    use imprex_types::Severity;

    fn finding(pathology: &str) -> RawFinding {
        RawFinding {
            structure: StructureId::Acl,
            pathology: pathology.into(),
            severity: Severity::Severe,
            location: String::new(),
            details: String::new(),
            associated: Vec::new(),
            equivocal: false,
            evidence: String::new(),
        }
    }

    #[test]
    fn test_description_renders_both_variants() {
        fn shout(f: &RawFinding) -> String {
            f.pathology.to_uppercase()
        }
        let f = finding("Complete Tear");
        assert_eq!(Description::Static("fixed").render(&f), "fixed");
        assert_eq!(Description::Templated(shout).render(&f), "COMPLETE TEAR");
        assert_eq!(format!("{:?}", Description::Templated(shout)), "Templated(..)");
    }

    #[test]
    fn test_treatment_category_is_lowercase() {
        let json = serde_json::to_string(&TreatmentCategory::Interventional).expect("serialize");
        assert_eq!(json, "\"interventional\"");
    }

    #[test]
    fn test_const_constructors_round_trip_through_json() {
        const Q: SelfAssessmentQuestion =
            SelfAssessmentQuestion::new("Does it swell?", "Swelling suggests fluid");
        let json = serde_json::to_value(&Q).expect("serialize");
        assert_eq!(json["question"], "Does it swell?");
        let back: SelfAssessmentQuestion = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, Q);
    }
}
