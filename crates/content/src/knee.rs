//! Knee content library.

use crate::common::*;
use crate::template::{
    CameraHint, ContentTemplate, Description, SelfAssessmentQuestion, TreatmentCategory::*,
    TreatmentOption,
};
use imprex_types::{RawFinding, StructureId};

const FRONT: CameraHint = CameraHint::new([0.0, 0.2, 2.4], [0.0, 0.0, 0.0]);
const MEDIAL: CameraHint = CameraHint::new([-2.2, 0.1, 0.6], [0.0, 0.0, 0.0]);
const LATERAL: CameraHint = CameraHint::new([2.2, 0.1, 0.6], [0.0, 0.0, 0.0]);
const BACK: CameraHint = CameraHint::new([0.0, 0.1, -2.4], [0.0, -0.1, 0.0]);
const INSIDE: CameraHint = CameraHint::new([0.6, 0.5, 1.4], [0.0, 0.0, 0.0]);

fn location_clause(f: &RawFinding) -> String {
    if f.location.is_empty() {
        String::new()
    } else {
        format!(" The change is at the {}.", f.location)
    }
}

fn describe_ligament(f: &RawFinding) -> String {
    let extent = match f.pathology.as_str() {
        "Complete Tear" => {
            "The fibres are torn all the way through, so the ligament is no longer holding the bones in their normal relationship."
        }
        "Partial Tear" => "Some fibres are torn but the ligament is still in continuity.",
        "Sprain" => "The ligament has been stretched and is swollen, but its fibres are intact.",
        "Graft Tear" | "Graft Abnormality" => {
            "The changes involve a previous reconstruction graft rather than the native ligament."
        }
        _ => "The ligament looks abnormal on the scan; your clinician will interpret this alongside your examination.",
    };
    format!(
        "{} – {}. {extent}{}",
        f.structure.display_name(),
        f.pathology,
        location_clause(f)
    )
}

fn describe_meniscus(f: &RawFinding) -> String {
    let side = if f.structure == StructureId::MeniscusLateral {
        "outer (lateral)"
    } else {
        "inner (medial)"
    };
    format!(
        "The {side} meniscus is a C-shaped cartilage cushion between the thigh bone and shin bone. The scan shows a {}.{}",
        f.pathology.to_lowercase(),
        location_clause(f)
    )
}

fn describe_cartilage(f: &RawFinding) -> String {
    format!(
        "The smooth joint-surface cartilage of the {} shows {}. Cartilage has no nerves, so symptoms come from the joint's reaction to the damage rather than the cartilage itself.{}",
        f.structure.display_name().to_lowercase(),
        f.pathology.to_lowercase(),
        location_clause(f)
    )
}

fn describe_bone(f: &RawFinding) -> String {
    let meaning = match f.pathology.as_str() {
        "Bone Bruise" => "A bone bruise is bleeding and swelling inside the bone from an impact. It usually settles over a few months.",
        "Osteonecrosis" => "Part of the bone has lost some of its blood supply.",
        "Osteochondral Lesion" => "The damage involves both the joint cartilage and the bone beneath it.",
        _ => "Your clinician will explain how this affects your treatment plan.",
    };
    format!(
        "{} of the {}. {meaning}{}",
        f.pathology,
        f.structure.display_name().to_lowercase(),
        location_clause(f)
    )
}

const LIGAMENT_QUESTIONS: &[&str] = &[
    ASK_ABOUT_SURGERY,
    "Is the knee stable enough for my sport or work without reconstruction?",
    ASK_ABOUT_ACTIVITY,
];

const MENISCUS_QUESTIONS: &[&str] = &[
    "Is this tear likely to heal, or is it the kind that is usually trimmed or repaired?",
    "Does the knee lock or catch, and does that change your recommendation?",
    ASK_ABOUT_ACTIVITY,
];

const ACL_RECONSTRUCTION: TreatmentOption = TreatmentOption::new(
    "ACL reconstruction",
    Surgical,
    "Replacing the torn ligament with a tendon graft, usually taken from the hamstrings or patellar tendon.",
    "Return to pivoting sport typically 9-12 months",
    "Restores stability for cutting and pivoting activities.",
    "Long rehabilitation; graft-site discomfort; surgical risks.",
);

const KNEE_BRACE: TreatmentOption = TreatmentOption::new(
    "Hinged knee brace",
    Conservative,
    "A brace that protects the healing ligament from side-to-side stress.",
    "4-6 weeks",
    "Collateral ligaments usually heal well with protection.",
    "Temporary stiffness; brace must be worn consistently.",
);

const MENISCAL_REPAIR: TreatmentOption = TreatmentOption::new(
    "Meniscal repair",
    Surgical,
    "Stitching the torn meniscus so it can heal and keep cushioning the joint.",
    "Return to sport typically 4-6 months",
    "Preserves the meniscus and protects the cartilage long term.",
    "Longer restricted weight-bearing; not every tear is repairable.",
);

const PARTIAL_MENISCECTOMY: TreatmentOption = TreatmentOption::new(
    "Partial meniscectomy",
    Surgical,
    "Keyhole removal of the unstable torn fragment.",
    "Return to activity typically 4-8 weeks",
    "Quick recovery; treats mechanical locking.",
    "Less meniscus left to protect the cartilage.",
);

const TENDON_LOADING: TreatmentOption = TreatmentOption::new(
    "Progressive tendon loading",
    Conservative,
    "Isometric then heavy slow resistance exercise to rebuild tendon capacity.",
    "12 weeks or longer",
    "Best-supported treatment for tendinopathy.",
    "Pain during exercise is expected early on.",
);

const TENDON_REPAIR: TreatmentOption = TreatmentOption::new(
    "Surgical tendon repair",
    Surgical,
    "Reattaching a completely torn tendon to the kneecap.",
    "Return to full activity typically 4-6 months",
    "Restores the ability to straighten the knee.",
    "Needs prompt surgery; a period of bracing afterwards.",
);

const CARTILAGE_RESTORATION: TreatmentOption = TreatmentOption::new(
    "Cartilage restoration",
    Surgical,
    "Procedures such as microfracture or cartilage grafting for a focal defect.",
    "Return to sport typically 9-12 months",
    "Can fill a contained defect in a younger patient.",
    "Not suitable for widespread wear; long rehabilitation.",
);

const WEIGHT_MANAGEMENT: TreatmentOption = TreatmentOption::new(
    "Weight management and low-impact exercise",
    Conservative,
    "Reducing load through the joint with cycling, swimming and strength work.",
    "Ongoing",
    "Improves pain and function in cartilage wear.",
    "Benefit depends on sustained change.",
);

const PROTECTED_WEIGHT_BEARING: TreatmentOption = TreatmentOption::new(
    "Protected weight-bearing",
    Conservative,
    "Crutches or reduced impact while the bone heals.",
    "4-12 weeks",
    "Lets the bone settle without further injury.",
    "Temporary loss of mobility.",
);

const FRACTURE_FIXATION: TreatmentOption = TreatmentOption::new(
    "Fracture fixation",
    Surgical,
    "Screws or plates to hold a displaced fracture in position.",
    "Bone healing typically 6-12 weeks",
    "Restores the joint surface.",
    "Surgical risks; hardware sometimes needs removal.",
);

const PATELLAR_STABILISATION: TreatmentOption = TreatmentOption::new(
    "Patellar stabilisation surgery",
    Surgical,
    "Reconstructing the medial patellofemoral ligament or realigning the kneecap.",
    "Return to sport typically 6-9 months",
    "Reduces the risk of repeat dislocation.",
    "Usually reserved for recurrent instability.",
);

const LOCKING_QUESTION: SelfAssessmentQuestion = SelfAssessmentQuestion::new(
    "Does your knee lock, catch or fail to straighten fully?",
    "Mechanical symptoms suggest a displaced fragment and may favour earlier surgery.",
);

const STAIRS_QUESTION: SelfAssessmentQuestion = SelfAssessmentQuestion::new(
    "Is going down stairs or squatting painful at the front of the knee?",
    "Front-of-knee pain on bending points to the kneecap joint and guides exercise choice.",
);

pub static TEMPLATES: &[ContentTemplate] = &[
    ContentTemplate {
        structure: StructureId::Acl,
        description: Description::Templated(describe_ligament),
        expected_experience: "Many people felt a pop and the knee swelled within hours. Afterwards the knee may feel unreliable when turning or changing direction.",
        clinical_context: "The anterior cruciate ligament stops the shin bone sliding forward and rotating under the thigh bone. It is the key ligament for pivoting sports.",
        structure_targets: &["knee_acl"],
        camera_hint: INSIDE,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, SPORTS_PHYSICIAN, PHYSIOTHERAPIST],
        appointment_questions: LIGAMENT_QUESTIONS,
        recovery_timeline: "Rehabilitation alone takes about 3-6 months; after reconstruction, return to pivoting sport is usually 9-12 months.",
        self_assessment_questions: &[INSTABILITY, SWELLING],
        treatment_options: &[PHYSIOTHERAPY, ACL_RECONSTRUCTION],
    },
    ContentTemplate {
        structure: StructureId::Pcl,
        description: Description::Templated(describe_ligament),
        expected_experience: "Often aching at the back of the knee and discomfort on stairs or kneeling rather than dramatic giving way.",
        clinical_context: "The posterior cruciate ligament stops the shin bone sliding backwards. Most isolated injuries are managed without surgery.",
        structure_targets: &["knee_pcl"],
        camera_hint: BACK,
        specialist_perspectives: &[SPORTS_PHYSICIAN, PHYSIOTHERAPIST],
        appointment_questions: LIGAMENT_QUESTIONS,
        recovery_timeline: "Most isolated injuries recover over 3-4 months with quadriceps-focused rehabilitation.",
        self_assessment_questions: &[INSTABILITY, PAIN_DIARY],
        treatment_options: &[PHYSIOTHERAPY, KNEE_BRACE],
    },
    ContentTemplate {
        structure: StructureId::Mcl,
        description: Description::Templated(describe_ligament),
        expected_experience: "Pain and tenderness along the inner side of the knee, worse when the knee is pushed inwards.",
        clinical_context: "The medial collateral ligament supports the inner side of the knee. It has a good blood supply and usually heals without surgery.",
        structure_targets: &["knee_mcl"],
        camera_hint: MEDIAL,
        specialist_perspectives: &[SPORTS_PHYSICIAN, PHYSIOTHERAPIST],
        appointment_questions: LIGAMENT_QUESTIONS,
        recovery_timeline: "Mild sprains settle in 2-4 weeks; higher grade injuries take 6-12 weeks.",
        self_assessment_questions: &[PAIN_DIARY, INSTABILITY],
        treatment_options: &[KNEE_BRACE, PHYSIOTHERAPY],
    },
    ContentTemplate {
        structure: StructureId::Lcl,
        description: Description::Templated(describe_ligament),
        expected_experience: "Pain on the outer side of the knee; some people notice the knee bowing outwards when walking.",
        clinical_context: "The lateral collateral ligament and surrounding posterolateral corner support the outer side of the knee. Severe injuries are often repaired early.",
        structure_targets: &["knee_lcl"],
        camera_hint: LATERAL,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST],
        appointment_questions: LIGAMENT_QUESTIONS,
        recovery_timeline: "Minor sprains recover in 4-6 weeks; reconstructed injuries take 6-9 months.",
        self_assessment_questions: &[INSTABILITY, PAIN_DIARY],
        treatment_options: &[KNEE_BRACE, PHYSIOTHERAPY, ARTHROSCOPIC_REPAIR],
    },
    ContentTemplate {
        structure: StructureId::MeniscusMedial,
        description: Description::Templated(describe_meniscus),
        expected_experience: "Pain along the inner joint line, especially when twisting or squatting; sometimes catching or locking.",
        clinical_context: "The medial meniscus spreads load across the inner compartment. Degenerative tears are very common after middle age and often cause no symptoms.",
        structure_targets: &["knee_meniscus_medial"],
        camera_hint: MEDIAL,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST, MUSCULOSKELETAL_RADIOLOGIST],
        appointment_questions: MENISCUS_QUESTIONS,
        recovery_timeline: "Symptoms from many tears settle over 6-12 weeks of rehabilitation; repair takes 4-6 months to return to sport.",
        self_assessment_questions: &[LOCKING_QUESTION, SWELLING],
        treatment_options: &[PHYSIOTHERAPY, MENISCAL_REPAIR, PARTIAL_MENISCECTOMY],
    },
    ContentTemplate {
        structure: StructureId::MeniscusLateral,
        description: Description::Templated(describe_meniscus),
        expected_experience: "Pain along the outer joint line with twisting, squatting or deep bending.",
        clinical_context: "The lateral meniscus carries most of the load in the outer compartment. Tears here are often seen with ACL injuries.",
        structure_targets: &["knee_meniscus_lateral"],
        camera_hint: LATERAL,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST],
        appointment_questions: MENISCUS_QUESTIONS,
        recovery_timeline: "Rehabilitation over 6-12 weeks; repair takes 4-6 months to return to sport.",
        self_assessment_questions: &[LOCKING_QUESTION, SWELLING],
        treatment_options: &[PHYSIOTHERAPY, MENISCAL_REPAIR, PARTIAL_MENISCECTOMY],
    },
    ContentTemplate {
        structure: StructureId::PatellarTendon,
        description: Description::Static("The patellar tendon links the kneecap to the shin bone and transmits the force of the thigh muscles. The scan shows changes in this tendon."),
        expected_experience: "Pain just below the kneecap with jumping, running or stairs, often stiff at the start of activity.",
        clinical_context: "Patellar tendinopathy is an overload condition and responds to graded loading. Complete ruptures are uncommon and need surgery.",
        structure_targets: &["knee_patellar_tendon"],
        camera_hint: FRONT,
        specialist_perspectives: &[SPORTS_PHYSICIAN, PHYSIOTHERAPIST],
        appointment_questions: &[ASK_ABOUT_ACTIVITY, ASK_ABOUT_FOLLOW_UP],
        recovery_timeline: "Tendinopathy improves over 3-6 months of loading; repaired ruptures take 4-6 months.",
        self_assessment_questions: &[PAIN_DIARY, STAIRS_QUESTION],
        treatment_options: &[TENDON_LOADING, TENDON_REPAIR],
    },
    ContentTemplate {
        structure: StructureId::QuadricepsTendon,
        description: Description::Static("The quadriceps tendon attaches the thigh muscles to the top of the kneecap. The scan shows changes in this tendon."),
        expected_experience: "Pain above the kneecap; a complete tear makes it impossible to straighten the knee against gravity.",
        clinical_context: "Partial changes are managed with loading; complete tears need early repair.",
        structure_targets: &["knee_quadriceps_tendon"],
        camera_hint: FRONT,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST],
        appointment_questions: &[ASK_ABOUT_SURGERY, ASK_ABOUT_ACTIVITY],
        recovery_timeline: "Tendinopathy improves over 3-6 months; repaired ruptures take 4-6 months.",
        self_assessment_questions: &[PAIN_DIARY],
        treatment_options: &[TENDON_LOADING, TENDON_REPAIR],
    },
    ContentTemplate {
        structure: StructureId::CartilagePatellofemoral,
        description: Description::Templated(describe_cartilage),
        expected_experience: "Ache at the front of the knee with stairs, squatting or sitting for long periods.",
        clinical_context: "Cartilage changes behind the kneecap are common and correlate poorly with pain. Strength around the hip and knee matters more than the grade.",
        structure_targets: &["knee_cartilage_patellofemoral", "knee_patella"],
        camera_hint: FRONT,
        specialist_perspectives: &[PHYSIOTHERAPIST, SPORTS_PHYSICIAN],
        appointment_questions: &[ASK_ABOUT_ACTIVITY, "Would strengthening exercises help, or is there a structural problem to fix?"],
        recovery_timeline: "Symptoms usually improve over 8-12 weeks of targeted strengthening.",
        self_assessment_questions: &[STAIRS_QUESTION, SWELLING],
        treatment_options: &[PHYSIOTHERAPY, WEIGHT_MANAGEMENT, CORTICOSTEROID_INJECTION],
    },
    ContentTemplate {
        structure: StructureId::CartilageMedial,
        description: Description::Templated(describe_cartilage),
        expected_experience: "Aching on the inner side of the knee, worse with walking and standing, sometimes with stiffness in the morning.",
        clinical_context: "The inner compartment carries most body weight and is the most common site of knee osteoarthritis.",
        structure_targets: &["knee_cartilage_medial"],
        camera_hint: MEDIAL,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST, PAIN_SPECIALIST],
        appointment_questions: &[ASK_ABOUT_SURGERY, ASK_ABOUT_ACTIVITY],
        recovery_timeline: "Cartilage wear is long-term; symptoms often fluctuate and improve with exercise over 6-12 weeks.",
        self_assessment_questions: &[PAIN_DIARY, SWELLING],
        treatment_options: &[WEIGHT_MANAGEMENT, PHYSIOTHERAPY, CORTICOSTEROID_INJECTION, CARTILAGE_RESTORATION],
    },
    ContentTemplate {
        structure: StructureId::CartilageLateral,
        description: Description::Templated(describe_cartilage),
        expected_experience: "Aching on the outer side of the knee with walking or standing.",
        clinical_context: "Outer compartment cartilage wear is less common and is often associated with previous meniscal injury.",
        structure_targets: &["knee_cartilage_lateral"],
        camera_hint: LATERAL,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST],
        appointment_questions: &[ASK_ABOUT_SURGERY, ASK_ABOUT_ACTIVITY],
        recovery_timeline: "Symptoms often improve with 6-12 weeks of strengthening.",
        self_assessment_questions: &[PAIN_DIARY, SWELLING],
        treatment_options: &[WEIGHT_MANAGEMENT, PHYSIOTHERAPY, CARTILAGE_RESTORATION],
    },
    ContentTemplate {
        structure: StructureId::LateralFemoralCondyle,
        description: Description::Templated(describe_bone),
        expected_experience: "Deep aching in the knee, worse with weight-bearing; often part of a twisting injury.",
        clinical_context: "Bruising of the outer thigh-bone surface is the classic pattern of a pivoting injury and often accompanies an ACL tear.",
        structure_targets: &["knee_lateral_femoral_condyle"],
        camera_hint: LATERAL,
        specialist_perspectives: &[SPORTS_PHYSICIAN, MUSCULOSKELETAL_RADIOLOGIST],
        appointment_questions: &[ASK_ABOUT_ACTIVITY, ASK_ABOUT_FOLLOW_UP],
        recovery_timeline: "Bone bruises usually settle over 2-4 months.",
        self_assessment_questions: &[PAIN_DIARY],
        treatment_options: &[ACTIVITY_MODIFICATION, PROTECTED_WEIGHT_BEARING],
    },
    ContentTemplate {
        structure: StructureId::MedialFemoralCondyle,
        description: Description::Templated(describe_bone),
        expected_experience: "Deep aching on the inner side of the knee, worse with standing and walking.",
        clinical_context: "Bone changes on the inner thigh bone can follow injury or overload and are monitored alongside the cartilage above them.",
        structure_targets: &["knee_medial_femoral_condyle"],
        camera_hint: MEDIAL,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, MUSCULOSKELETAL_RADIOLOGIST],
        appointment_questions: &[ASK_ABOUT_ACTIVITY, ASK_ABOUT_FOLLOW_UP],
        recovery_timeline: "Bruising settles over 2-4 months; stress-related changes may take longer.",
        self_assessment_questions: &[PAIN_DIARY, NIGHT_PAIN],
        treatment_options: &[ACTIVITY_MODIFICATION, PROTECTED_WEIGHT_BEARING],
    },
    ContentTemplate {
        structure: StructureId::LateralTibialPlateau,
        description: Description::Templated(describe_bone),
        expected_experience: "Pain on the outer side of the upper shin, worse with weight-bearing.",
        clinical_context: "The outer tibial plateau is injured in pivoting injuries and in falls; fractures here may need fixation if the joint surface is stepped.",
        structure_targets: &["knee_lateral_tibial_plateau"],
        camera_hint: LATERAL,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, MUSCULOSKELETAL_RADIOLOGIST],
        appointment_questions: &[ASK_ABOUT_SURGERY, ASK_ABOUT_FOLLOW_UP],
        recovery_timeline: "Bruises settle in 2-4 months; fractures take 6-12 weeks to heal.",
        self_assessment_questions: &[PAIN_DIARY],
        treatment_options: &[PROTECTED_WEIGHT_BEARING, FRACTURE_FIXATION],
    },
    ContentTemplate {
        structure: StructureId::MedialTibialPlateau,
        description: Description::Templated(describe_bone),
        expected_experience: "Pain on the inner side of the upper shin, worse with walking.",
        clinical_context: "Bone changes in the inner tibial plateau are seen with overload, injury and cartilage wear.",
        structure_targets: &["knee_medial_tibial_plateau"],
        camera_hint: MEDIAL,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, MUSCULOSKELETAL_RADIOLOGIST],
        appointment_questions: &[ASK_ABOUT_ACTIVITY, ASK_ABOUT_FOLLOW_UP],
        recovery_timeline: "Bruising and stress reactions settle over 2-4 months.",
        self_assessment_questions: &[PAIN_DIARY, NIGHT_PAIN],
        treatment_options: &[ACTIVITY_MODIFICATION, PROTECTED_WEIGHT_BEARING],
    },
    ContentTemplate {
        structure: StructureId::Patella,
        description: Description::Templated(describe_bone),
        expected_experience: "Pain at the front of the knee; after a dislocation the kneecap may feel apprehensive when the knee bends.",
        clinical_context: "The kneecap glides in a groove at the end of the thigh bone. Dislocation leaves a typical bruise pattern and can damage the stabilising ligament.",
        structure_targets: &["knee_patella"],
        camera_hint: FRONT,
        specialist_perspectives: &[ORTHOPAEDIC_SURGEON, PHYSIOTHERAPIST],
        appointment_questions: &[ASK_ABOUT_SURGERY, "What is my risk of the kneecap dislocating again?"],
        recovery_timeline: "First-time dislocations usually recover over 6-12 weeks of rehabilitation.",
        self_assessment_questions: &[INSTABILITY, STAIRS_QUESTION],
        treatment_options: &[PHYSIOTHERAPY, PATELLAR_STABILISATION],
    },
    ContentTemplate {
        structure: StructureId::Effusion,
        description: Description::Static("There is extra fluid inside the knee joint. Fluid is the joint's response to irritation and is a sign rather than a diagnosis on its own."),
        expected_experience: "The knee feels tight or puffy and may not bend fully.",
        clinical_context: "An effusion reflects irritation from another finding on the scan, such as a ligament, meniscal or cartilage problem.",
        structure_targets: &["knee_joint_capsule"],
        camera_hint: FRONT,
        specialist_perspectives: &[SPORTS_PHYSICIAN],
        appointment_questions: &["What is causing the fluid, and should it be drained?"],
        recovery_timeline: "Settles as the underlying cause is treated, typically over weeks.",
        self_assessment_questions: &[SWELLING],
        treatment_options: &[ACTIVITY_MODIFICATION, ASPIRATION],
    },
    ContentTemplate {
        structure: StructureId::BakerCyst,
        description: Description::Static("A Baker's cyst is a fluid-filled swelling behind the knee connected to the joint. It is usually a sign of fluid inside the knee rather than a separate problem."),
        expected_experience: "Fullness or tightness behind the knee, more noticeable when the knee is straight.",
        clinical_context: "Treating the cause of the joint fluid usually shrinks the cyst. A ruptured cyst can mimic a calf clot, so new calf swelling should be checked.",
        structure_targets: &["knee_baker_cyst"],
        camera_hint: BACK,
        specialist_perspectives: &[SPORTS_PHYSICIAN, MUSCULOSKELETAL_RADIOLOGIST],
        appointment_questions: &["Does the cyst need treatment, or will it settle with the rest of the knee?", ASK_ABOUT_FOLLOW_UP],
        recovery_timeline: "Often fluctuates; settles over months as the joint settles.",
        self_assessment_questions: &[SWELLING],
        treatment_options: &[ACTIVITY_MODIFICATION, ASPIRATION],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use imprex_types::{JointId, Severity};

    fn finding(structure: StructureId, pathology: &str, location: &str) -> RawFinding {
        RawFinding {
            structure,
            pathology: pathology.into(),
            severity: Severity::Moderate,
            location: location.into(),
            details: String::new(),
            associated: Vec::new(),
            equivocal: false,
            evidence: String::new(),
        }
    }

    #[test]
    fn test_one_template_per_knee_structure() {
        let vocab = StructureId::vocabulary(JointId::Knee);
        assert_eq!(TEMPLATES.len(), vocab.len());
        for s in vocab {
            assert_eq!(TEMPLATES.iter().filter(|t| t.structure == *s).count(), 1, "{s:?}");
        }
    }

    #[test]
    fn test_templates_are_populated() {
        for t in TEMPLATES {
            assert!(!t.structure_targets.is_empty(), "{:?}", t.structure);
            assert!(!t.expected_experience.is_empty());
            assert!(!t.clinical_context.is_empty());
            assert!(!t.recovery_timeline.is_empty());
            assert!(!t.treatment_options.is_empty());
        }
    }

    #[test]
    fn test_meniscus_description_uses_location() {
        let text = describe_meniscus(&finding(
            StructureId::MeniscusMedial,
            "Radial Tear",
            "posterior horn",
        ));
        assert!(text.contains("inner (medial)"));
        assert!(text.contains("radial tear"));
        assert!(text.ends_with("The change is at the posterior horn."));
    }

    #[test]
    fn test_ligament_description_explains_extent() {
        let text = describe_ligament(&finding(StructureId::Acl, "Complete Tear", ""));
        assert!(text.starts_with("Anterior Cruciate Ligament (ACL) – Complete Tear."));
        assert!(text.contains("all the way through"));
    }
}
