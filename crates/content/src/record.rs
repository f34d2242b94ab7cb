use crate::template::{CameraHint, SelfAssessmentQuestion, SpecialistPerspective, TreatmentOption};
use imprex_types::{Severity, StructureId};
use serde::{Deserialize, Serialize};

/// One presentation-ready finding. This is the whole contract with the rendering and
/// document collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationRecord {
    /// `{structure}_{index}`, or `unk_{index}` when no template exists.
    pub id: String,
    pub structure: StructureId,
    pub display_name: String,
    pub pathology: String,
    /// Never `equivocal`; see [`PresentationRecord::equivocal`].
    pub severity: Severity,
    pub equivocal: bool,
    pub severity_score: f64,
    pub location: String,
    pub details: String,
    pub structure_targets: Vec<String>,
    pub camera_hint: Option<CameraHint>,
    pub description: String,
    pub expected_experience: String,
    pub clinical_context: String,
    pub specialist_perspectives: Vec<SpecialistPerspective>,
    pub appointment_questions: Vec<String>,
    pub recovery_timeline: String,
    pub self_assessment_questions: Vec<SelfAssessmentQuestion>,
    pub treatment_options: Vec<TreatmentOption>,
}
