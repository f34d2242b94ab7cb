//! Shoulder content library.

use crate::common::*;
use crate::template::{
    CameraHint, ContentTemplate, Description, SelfAssessmentQuestion, TreatmentCategory::*,
    TreatmentOption,
};
use imprex_types::{RawFinding, StructureId};

const FRONT: CameraHint = CameraHint::new([0.0, 0.3, 2.2], [0.0, 0.1, 0.0]);
const TOP: CameraHint = CameraHint::new([0.2, 2.3, 0.4], [0.0, 0.2, 0.0]);
const BACK: CameraHint = CameraHint::new([0.0, 0.3, -2.2], [0.0, 0.1, 0.0]);
const SOCKET: CameraHint = CameraHint::new([1.6, 0.2, 0.9], [0.0, 0.0, 0.0]);

fn describe_cuff(f: &RawFinding) -> String {
    let meaning = match f.pathology.as_str() {
        "Massive Tear" => "A large tear involving much of the tendon, often more than one.",
        "Full-Thickness Tear" => "The tear goes all the way through the tendon, leaving a gap.",
        p if p.starts_with("Partial-Thickness Tear") => {
            "The tear involves part of the tendon's thickness; the tendon is still attached."
        }
        "Tendinosis" => "The tendon is thickened and its fibres are disorganised from overload, without a tear.",
        "Calcific Tendinitis" => "Calcium has been deposited within the tendon.",
        _ => "The tendon looks abnormal on the scan.",
    };
    let location = if f.location.is_empty() {
        String::new()
    } else {
        format!(" The change is at the {}.", f.location)
    };
    format!(
        "{} – {}. {meaning}{location}",
        f.structure.display_name(),
        f.pathology
    )
}

fn describe_labrum(f: &RawFinding) -> String {
    let base = format!(
        "The labrum is a rim of cartilage that deepens the shoulder socket. The scan shows a {} of the {}.",
        f.pathology,
        f.structure.display_name().to_lowercase()
    );
    if f.pathology.starts_with("SLAP Tear (Type") {
        format!("{base} The type number describes how far the tear extends into the biceps anchor.")
    } else if f.location.is_empty() {
        base
    } else {
        format!("{base} It is located at {}.", f.location)
    }
}

fn describe_bone(f: &RawFinding) -> String {
    format!(
        "{} of the {}. Bone injuries around the socket usually follow a dislocation and are assessed for their effect on stability.",
        f.pathology,
        f.structure.display_name().to_lowercase()
    )
}

const CUFF_QUESTIONS: &[&str] = &[
    "Is the tear likely to get bigger, and does that change the timing of any repair?",
    ASK_ABOUT_SURGERY,
    ASK_ABOUT_ACTIVITY,
];

const INSTABILITY_QUESTIONS: &[&str] = &[
    "What is my risk of the shoulder dislocating again?",
    ASK_ABOUT_SURGERY,
    "When can I return to overhead or contact sport?",
];

const OVERHEAD_QUESTION: SelfAssessmentQuestion = SelfAssessmentQuestion::new(
    "Can you lift your arm above shoulder height without pain or weakness?",
    "Weakness as well as pain when lifting suggests a larger tendon problem.",
);

const APPREHENSION_QUESTION: SelfAssessmentQuestion = SelfAssessmentQuestion::new(
    "Do you avoid positions such as reaching back to throw because the shoulder feels unsafe?",
    "Apprehension in these positions is a hallmark of instability.",
);

const CUFF_REPAIR: TreatmentOption = TreatmentOption::new(
    "Rotator cuff repair",
    Surgical,
    "Keyhole surgery to reattach the torn tendon to the bone.",
    "Sling 4-6 weeks; full recovery 6-12 months",
    "Restores strength; prevents tear progression in suitable tears.",
    "Long rehabilitation; re-tear rate rises with tear size and age.",
);

const SUBACROMIAL_DECOMPRESSION: TreatmentOption = TreatmentOption::new(
    "Subacromial decompression",
    Surgical,
    "Keyhole removal of bursa and bone spur beneath the acromion.",
    "Return to normal activity typically 6-12 weeks",
    "May help when well-conducted rehabilitation has failed.",
    "Evidence of benefit over exercise alone is limited.",
);

const BARBOTAGE: TreatmentOption = TreatmentOption::new(
    "Ultrasound-guided barbotage",
    Interventional,
    "Breaking up and washing out calcium deposits with a needle.",
    "Relief over 2-6 weeks",
    "Avoids surgery for painful calcific deposits.",
    "Not every deposit responds; may need repeating.",
);

const LABRAL_REPAIR: TreatmentOption = TreatmentOption::new(
    "Arthroscopic labral repair",
    Surgical,
    "Reattaching the torn labrum to the socket with anchors.",
    "Return to contact sport typically 4-6 months",
    "Lowers the risk of repeat dislocation.",
    "Stiffness and a period in a sling.",
);

const BICEPS_TENODESIS: TreatmentOption = TreatmentOption::new(
    "Biceps tenodesis",
    Surgical,
    "Detaching the biceps tendon from the socket and fixing it lower on the arm bone.",
    "Return to full activity typically 3-4 months",
    "Reliable pain relief for biceps and biceps-anchor problems.",
    "Surgical risks; small change in the muscle contour in some people.",
);

const BONE_BLOCK: TreatmentOption = TreatmentOption::new(
    "Bone block stabilisation",
    Surgical,
    "Transferring bone to the front of the socket to restore its width.",
    "Return to contact sport typically 4-6 months",
    "Low recurrence when significant bone has been lost.",
    "Larger operation than labral repair.",
);

const HYDRODILATATION: TreatmentOption = TreatmentOption::new(
    "Hydrodilatation",
    Interventional,
    "Stretching the joint capsule with an image-guided injection of fluid and steroid.",
    "Improvement over 2-8 weeks",
    "Can speed up recovery of movement.",
    "Needs to be followed by stretching exercises.",
);

pub static TEMPLATES: &[ContentTemplate] = &[
    ContentTemplate {
        structure: StructureId::Supraspinatus,
        description: Description::Templated(describe_cuff),
        expected_experience: "Pain on the outer upper arm, worse reaching overhead or lying on the shoulder; weakness lifting the arm with larger tears.",
        clinical_context: "The supraspinatus is the rotator cuff tendon most often affected. Tears are common with age and many people have no symptoms.",
        structure_targets: &["shoulder_supraspinatus"],
        camera_hint: TOP,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST, MUSCULOSKELETAL_RADIOLOGIST],
        appointment_questions: CUFF_QUESTIONS,
        recovery_timeline: "Rehabilitation over 3-6 months; after repair, 6-12 months to full strength.",
        self_assessment_questions: &[OVERHEAD_QUESTION, NIGHT_PAIN],
        treatment_options: &[PHYSIOTHERAPY, CORTICOSTEROID_INJECTION, BARBOTAGE, CUFF_REPAIR],
    },
    ContentTemplate {
        structure: StructureId::Infraspinatus,
        description: Description::Templated(describe_cuff),
        expected_experience: "Pain at the back of the shoulder and weakness turning the arm outwards.",
        clinical_context: "The infraspinatus rotates the arm outwards. It is usually involved when a supraspinatus tear extends backwards.",
        structure_targets: &["shoulder_infraspinatus"],
        camera_hint: BACK,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST],
        appointment_questions: CUFF_QUESTIONS,
        recovery_timeline: "Rehabilitation over 3-6 months; after repair, 6-12 months.",
        self_assessment_questions: &[OVERHEAD_QUESTION, NIGHT_PAIN],
        treatment_options: &[PHYSIOTHERAPY, CUFF_REPAIR],
    },
    ContentTemplate {
        structure: StructureId::Subscapularis,
        description: Description::Templated(describe_cuff),
        expected_experience: "Pain at the front of the shoulder and difficulty tucking in a shirt or reaching behind the back.",
        clinical_context: "The subscapularis is the large front cuff tendon that rotates the arm inwards and steadies the biceps tendon.",
        structure_targets: &["shoulder_subscapularis"],
        camera_hint: FRONT,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST],
        appointment_questions: CUFF_QUESTIONS,
        recovery_timeline: "Rehabilitation over 3-6 months; after repair, 6-12 months.",
        self_assessment_questions: &[PAIN_DIARY, NIGHT_PAIN],
        treatment_options: &[PHYSIOTHERAPY, CUFF_REPAIR],
    },
    ContentTemplate {
        structure: StructureId::TeresMinor,
        description: Description::Templated(describe_cuff),
        expected_experience: "Often no distinct symptoms; sometimes weakness turning the arm outwards.",
        clinical_context: "The teres minor is the smallest cuff muscle and is rarely affected on its own.",
        structure_targets: &["shoulder_teres_minor"],
        camera_hint: BACK,
        specialist_perspectives: &[PHYSIOTHERAPIST],
        appointment_questions: &[ASK_ABOUT_ACTIVITY],
        recovery_timeline: "Rehabilitation over 6-12 weeks.",
        self_assessment_questions: &[PAIN_DIARY],
        treatment_options: &[PHYSIOTHERAPY],
    },
    ContentTemplate {
        structure: StructureId::BicepsTendon,
        description: Description::Static("The long head of the biceps tendon runs over the top of the arm bone into the joint. The scan shows changes in this tendon."),
        expected_experience: "Pain at the front of the shoulder that can travel down the arm, worse lifting or carrying.",
        clinical_context: "Biceps tendon problems usually accompany rotator cuff or labral findings.",
        structure_targets: &["shoulder_biceps_long_head"],
        camera_hint: FRONT,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST],
        appointment_questions: &[ASK_ABOUT_SURGERY, ASK_ABOUT_ACTIVITY],
        recovery_timeline: "Tendinopathy improves over 6-12 weeks; after tenodesis, 3-4 months.",
        self_assessment_questions: &[PAIN_DIARY],
        treatment_options: &[PHYSIOTHERAPY, CORTICOSTEROID_INJECTION, BICEPS_TENODESIS],
    },
    ContentTemplate {
        structure: StructureId::LabrumSuperior,
        description: Description::Templated(describe_labrum),
        expected_experience: "Deep pain with overhead or throwing activity, sometimes clicking or catching.",
        clinical_context: "SLAP tears involve the top of the labrum where the biceps attaches. Many in people over 40 are degenerative and treated without surgery.",
        structure_targets: &["shoulder_labrum_superior", "shoulder_biceps_long_head"],
        camera_hint: SOCKET,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, SPORTS_PHYSICIAN, PHYSIOTHERAPIST],
        appointment_questions: &[ASK_ABOUT_SURGERY, "Would repair or biceps tenodesis suit me better?"],
        recovery_timeline: "Rehabilitation over 3 months; after surgery, 4-6 months to overhead sport.",
        self_assessment_questions: &[OVERHEAD_QUESTION, PAIN_DIARY],
        treatment_options: &[PHYSIOTHERAPY, LABRAL_REPAIR, BICEPS_TENODESIS],
    },
    ContentTemplate {
        structure: StructureId::LabrumAnterior,
        description: Description::Templated(describe_labrum),
        expected_experience: "A feeling that the shoulder may slip out, especially with the arm raised and turned back.",
        clinical_context: "The front of the labrum is injured when the shoulder dislocates forwards (a Bankart lesion). Young, active people have a high risk of recurrence.",
        structure_targets: &["shoulder_labrum_anterior"],
        camera_hint: SOCKET,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, SPORTS_PHYSICIAN],
        appointment_questions: INSTABILITY_QUESTIONS,
        recovery_timeline: "Rehabilitation over 3 months; after stabilisation, 4-6 months to contact sport.",
        self_assessment_questions: &[APPREHENSION_QUESTION, INSTABILITY],
        treatment_options: &[PHYSIOTHERAPY, LABRAL_REPAIR],
    },
    ContentTemplate {
        structure: StructureId::LabrumPosterior,
        description: Description::Templated(describe_labrum),
        expected_experience: "Pain at the back of the shoulder when pushing, such as push-ups or blocking.",
        clinical_context: "Posterior labral tears follow backwards instability and are common in lifters and contact athletes.",
        structure_targets: &["shoulder_labrum_posterior"],
        camera_hint: BACK,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST],
        appointment_questions: INSTABILITY_QUESTIONS,
        recovery_timeline: "Rehabilitation over 3 months; after repair, 4-6 months.",
        self_assessment_questions: &[INSTABILITY, PAIN_DIARY],
        treatment_options: &[PHYSIOTHERAPY, LABRAL_REPAIR],
    },
    ContentTemplate {
        structure: StructureId::Subacromial,
        description: Description::Static("The subacromial space lies beneath the point of the shoulder, where the bursa cushions the rotator cuff. The scan shows irritation in this space."),
        expected_experience: "Pain on the outer arm when lifting the arm between waist and head height.",
        clinical_context: "Bursitis and impingement are very common, usually reflect cuff overload, and respond well to exercise.",
        structure_targets: &["shoulder_subacromial_bursa"],
        camera_hint: TOP,
        specialist_perspectives: &[PHYSIOTHERAPIST, SPORTS_PHYSICIAN, PAIN_SPECIALIST],
        appointment_questions: &["Would an injection help me do the rehabilitation?", ASK_ABOUT_ACTIVITY],
        recovery_timeline: "Usually improves over 6-12 weeks.",
        self_assessment_questions: &[OVERHEAD_QUESTION, NIGHT_PAIN],
        treatment_options: &[PHYSIOTHERAPY, CORTICOSTEROID_INJECTION, SUBACROMIAL_DECOMPRESSION],
    },
    ContentTemplate {
        structure: StructureId::AcJoint,
        description: Description::Static("The acromioclavicular (AC) joint joins the collarbone to the top of the shoulder blade. The scan shows changes in this joint."),
        expected_experience: "Pain on top of the shoulder, worse reaching across the body or lying on that side.",
        clinical_context: "Wear in the AC joint is very common with age and often causes no symptoms. Separations follow a fall onto the point of the shoulder.",
        structure_targets: &["shoulder_ac_joint"],
        camera_hint: TOP,
        specialist_perspectives: &[SPORTS_PHYSICIAN, ORTHOPAEDIC_SURGEON],
        appointment_questions: &["Is the AC joint actually the source of my pain?", ASK_ABOUT_ACTIVITY],
        recovery_timeline: "Sprains settle over 2-6 weeks; arthritic flares over weeks to months.",
        self_assessment_questions: &[PAIN_DIARY],
        treatment_options: &[ACTIVITY_MODIFICATION, CORTICOSTEROID_INJECTION],
    },
    ContentTemplate {
        structure: StructureId::HumeralHead,
        description: Description::Templated(describe_bone),
        expected_experience: "Deep ache in the shoulder; after a dislocation the shoulder may feel unstable.",
        clinical_context: "A Hill-Sachs lesion is a dent in the back of the ball left by a forward dislocation; its size relative to the socket guides surgical choice.",
        structure_targets: &["shoulder_humeral_head"],
        camera_hint: BACK,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, MUSCULOSKELETAL_RADIOLOGIST],
        appointment_questions: INSTABILITY_QUESTIONS,
        recovery_timeline: "Bone bruising settles over 2-3 months; surgical recovery 4-6 months.",
        self_assessment_questions: &[APPREHENSION_QUESTION],
        treatment_options: &[PHYSIOTHERAPY, LABRAL_REPAIR],
    },
    ContentTemplate {
        structure: StructureId::Glenoid,
        description: Description::Templated(describe_bone),
        expected_experience: "A feeling of instability, especially with the arm raised and turned back.",
        clinical_context: "Loss of bone from the front of the socket makes the shoulder easier to dislocate and can favour a bone block procedure.",
        structure_targets: &["shoulder_glenoid"],
        camera_hint: SOCKET,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, MUSCULOSKELETAL_RADIOLOGIST],
        appointment_questions: INSTABILITY_QUESTIONS,
        recovery_timeline: "Surgical recovery typically 4-6 months.",
        self_assessment_questions: &[APPREHENSION_QUESTION, INSTABILITY],
        treatment_options: &[LABRAL_REPAIR, BONE_BLOCK],
    },
    ContentTemplate {
        structure: StructureId::Capsule,
        description: Description::Static("The joint capsule is the envelope around the shoulder joint. The scan shows changes in the capsule."),
        expected_experience: "With a frozen shoulder, pain followed by progressive stiffness in all directions.",
        clinical_context: "Adhesive capsulitis passes through painful, stiff and thawing phases; it is more common in people with diabetes.",
        structure_targets: &["shoulder_capsule"],
        camera_hint: FRONT,
        specialist_perspectives: &[PHYSIOTHERAPIST, PAIN_SPECIALIST],
        appointment_questions: &["Which phase am I in, and what helps in that phase?", ASK_ABOUT_FOLLOW_UP],
        recovery_timeline: "Frozen shoulder usually resolves over 12-24 months; treatment shortens the painful phase.",
        self_assessment_questions: &[NIGHT_PAIN, PAIN_DIARY],
        treatment_options: &[HYDRODILATATION, CORTICOSTEROID_INJECTION, PHYSIOTHERAPY],
    },
    ContentTemplate {
        structure: StructureId::Effusion,
        description: Description::Static("There is extra fluid inside the shoulder joint, a sign of irritation from another finding."),
        expected_experience: "A deep ache; the fluid itself is rarely felt in the shoulder.",
        clinical_context: "Shoulder joint fluid usually reflects cuff, labral or cartilage problems elsewhere on the scan.",
        structure_targets: &["shoulder_joint_capsule"],
        camera_hint: FRONT,
        specialist_perspectives: &[SPORTS_PHYSICIAN],
        appointment_questions: &["What is causing the fluid?"],
        recovery_timeline: "Settles as the underlying cause is treated.",
        self_assessment_questions: &[PAIN_DIARY],
        treatment_options: &[ACTIVITY_MODIFICATION],
    },
    ContentTemplate {
        structure: StructureId::CartilageGlenohumeral,
        description: Description::Static("The cartilage covering the ball and socket of the shoulder shows wear."),
        expected_experience: "Deep aching, stiffness and grinding, particularly turning the arm outwards.",
        clinical_context: "Glenohumeral osteoarthritis is less common than in the knee and is often linked to previous injury or instability.",
        structure_targets: &["shoulder_cartilage_glenohumeral"],
        camera_hint: SOCKET,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST, PAIN_SPECIALIST],
        appointment_questions: &[ASK_ABOUT_SURGERY, ASK_ABOUT_ACTIVITY],
        recovery_timeline: "Long-term condition; symptoms often improve with 6-12 weeks of exercise.",
        self_assessment_questions: &[NIGHT_PAIN, PAIN_DIARY],
        treatment_options: &[PHYSIOTHERAPY, CORTICOSTEROID_INJECTION, ARTHROSCOPIC_DEBRIDEMENT],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use imprex_types::{JointId, Severity};

    fn finding(structure: StructureId, pathology: &str) -> RawFinding {
        RawFinding {
            structure,
            pathology: pathology.into(),
            severity: Severity::Moderate,
            location: String::new(),
            details: String::new(),
            associated: Vec::new(),
            equivocal: false,
            evidence: String::new(),
        }
    }

    #[test]
    fn test_one_template_per_shoulder_structure() {
        let vocab = StructureId::vocabulary(JointId::Shoulder);
        assert_eq!(TEMPLATES.len(), vocab.len());
        for s in vocab {
            assert_eq!(TEMPLATES.iter().filter(|t| t.structure == *s).count(), 1, "{s:?}");
        }
    }

    #[test]
    fn test_slap_description_mentions_type() {
        let text = describe_labrum(&finding(StructureId::LabrumSuperior, "SLAP Tear (Type 2)"));
        assert!(text.contains("SLAP Tear (Type 2)"));
        assert!(text.contains("biceps anchor"));
    }

    #[test]
    fn test_partial_cuff_description() {
        let text = describe_cuff(&finding(
            StructureId::Supraspinatus,
            "Partial-Thickness Tear (Bursal-Sided)",
        ));
        assert!(text.contains("still attached"));
    }
}
