//! Mapping deduplicated findings onto content templates.
//!
//! A structure without a template never fails the mapping: it gets a minimal fallback record
//! with generic text and no specialist content, and the gap is logged so the content library
//! can catch up with the detector.

use crate::record::PresentationRecord;
use crate::score::severity_score;
use crate::template::ContentTemplate;
use crate::{knee, shoulder};
use imprex_types::{DedupedFinding, JointId, StructureId};

const FALLBACK_EXPERIENCE: &str =
    "Symptoms vary from person to person; your clinician can explain what to expect.";
const FALLBACK_CONTEXT: &str =
    "Detailed information for this finding is not yet available. Discuss it with the clinician who requested your scan.";
const FALLBACK_TIMELINE: &str = "Recovery depends on the overall clinical picture.";

/// The templates available for one joint.
#[derive(Clone, Copy, Debug)]
pub struct ContentLibrary {
    joint: JointId,
    templates: &'static [ContentTemplate],
}

impl ContentLibrary {
    pub fn new(joint: JointId, templates: &'static [ContentTemplate]) -> Self {
        Self { joint, templates }
    }

    /// Built-in library for `joint`. Joints without content get an empty library.
    pub fn for_joint(joint: JointId) -> Self {
        let templates = match joint {
            JointId::Knee => knee::TEMPLATES,
            JointId::Shoulder => shoulder::TEMPLATES,
            JointId::Hip => &[],
        };
        Self::new(joint, templates)
    }

    pub fn joint(&self) -> JointId {
        self.joint
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn template_for(&self, structure: StructureId) -> Option<&'static ContentTemplate> {
        self.templates.iter().find(|t| t.structure == structure)
    }

    /// Structures among `findings` that have no template, in finding order.
    pub fn unmapped(&self, findings: &[DedupedFinding]) -> Vec<StructureId> {
        findings
            .iter()
            .map(DedupedFinding::structure)
            .filter(|s| self.template_for(*s).is_none())
            .collect()
    }
}

fn from_template(
    finding: &DedupedFinding,
    template: &ContentTemplate,
) -> PresentationRecord {
    let raw = &finding.finding;
    PresentationRecord {
        id: format!("{}_{}", raw.structure, finding.first_index),
        structure: raw.structure,
        display_name: raw.structure.display_name().to_string(),
        pathology: raw.pathology.clone(),
        severity: raw.severity.for_presentation(),
        equivocal: raw.equivocal,
        severity_score: severity_score(raw),
        location: raw.location.clone(),
        details: raw.details.clone(),
        structure_targets: template
            .structure_targets
            .iter()
            .map(|t| (*t).to_string())
            .collect(),
        camera_hint: Some(template.camera_hint),
        description: template.description.render(raw),
        expected_experience: template.expected_experience.to_string(),
        clinical_context: template.clinical_context.to_string(),
        specialist_perspectives: template.specialist_perspectives.to_vec(),
        appointment_questions: template
            .appointment_questions
            .iter()
            .map(|q| (*q).to_string())
            .collect(),
        recovery_timeline: template.recovery_timeline.to_string(),
        self_assessment_questions: template.self_assessment_questions.to_vec(),
        treatment_options: template.treatment_options.to_vec(),
    }
}

fn fallback(finding: &DedupedFinding) -> PresentationRecord {
    let raw = &finding.finding;
    let display_name = raw.structure.display_name();
    PresentationRecord {
        id: format!("unk_{}", finding.first_index),
        structure: raw.structure,
        display_name: display_name.to_string(),
        pathology: raw.pathology.clone(),
        severity: raw.severity.for_presentation(),
        equivocal: raw.equivocal,
        severity_score: severity_score(raw),
        location: raw.location.clone(),
        details: raw.details.clone(),
        structure_targets: vec![raw.structure.as_str().to_string()],
        camera_hint: None,
        description: format!("{} affecting the {display_name}.", raw.pathology),
        expected_experience: FALLBACK_EXPERIENCE.to_string(),
        clinical_context: FALLBACK_CONTEXT.to_string(),
        specialist_perspectives: Vec::new(),
        appointment_questions: Vec::new(),
        recovery_timeline: FALLBACK_TIMELINE.to_string(),
        self_assessment_questions: Vec::new(),
        treatment_options: Vec::new(),
    }
}

/// Presentation record for one finding.
pub fn map_finding(library: &ContentLibrary, finding: &DedupedFinding) -> PresentationRecord {
    match library.template_for(finding.structure()) {
        Some(template) => from_template(finding, template),
        None => {
            tracing::warn!(
                joint = %library.joint(),
                structure = %finding.structure(),
                "no content template for structure; using fallback record"
            );
            fallback(finding)
        }
    }
}

/// Presentation records for `findings`, in order.
pub fn map_findings(library: &ContentLibrary, findings: &[DedupedFinding]) -> Vec<PresentationRecord> {
    findings.iter().map(|f| map_finding(library, f)).collect()
}
