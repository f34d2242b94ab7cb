//! Content shared by several templates.

use crate::template::{SelfAssessmentQuestion, SpecialistPerspective, TreatmentCategory::*, TreatmentOption};

pub const ORTHOPAEDIC_SURGEON: SpecialistPerspective = SpecialistPerspective::new(
    "Orthopaedic surgeon",
    "Weighs the scan against your examination, age and activity goals before deciding whether surgery would change the outcome.",
);

pub const SPORTS_PHYSICIAN: SpecialistPerspective = SpecialistPerspective::new(
    "Sports and exercise medicine physician",
    "Focuses on how the finding affects the activities you want to return to and plans a graded return.",
);

pub const PHYSIOTHERAPIST: SpecialistPerspective = SpecialistPerspective::new(
    "Physiotherapist",
    "Looks at strength, control and range of movement around the joint; most findings on this list respond to a structured exercise programme.",
);

pub const MUSCULOSKELETAL_RADIOLOGIST: SpecialistPerspective = SpecialistPerspective::new(
    "Musculoskeletal radiologist",
    "Describes what the images show; imaging findings are common in people without symptoms, so they are always read alongside the clinical picture.",
);

pub const PAIN_SPECIALIST: SpecialistPerspective = SpecialistPerspective::new(
    "Pain medicine specialist",
    "Considers injections or other targeted procedures when pain limits rehabilitation.",
);

pub const PHYSIOTHERAPY: TreatmentOption = TreatmentOption::new(
    "Physiotherapy",
    Conservative,
    "A supervised programme of strengthening, mobility and movement retraining.",
    "6-12 weeks",
    "Low risk; addresses strength and control that surgery alone does not restore.",
    "Needs regular commitment; improvement is gradual.",
);

pub const ACTIVITY_MODIFICATION: TreatmentOption = TreatmentOption::new(
    "Activity modification and pain relief",
    Conservative,
    "Reducing aggravating loads for a period, with simple analgesia or anti-inflammatory medication where appropriate.",
    "2-6 weeks",
    "Simple and often enough for mild findings.",
    "Does not address underlying weakness on its own.",
);

pub const CORTICOSTEROID_INJECTION: TreatmentOption = TreatmentOption::new(
    "Corticosteroid injection",
    Interventional,
    "An image-guided injection of steroid and local anaesthetic to settle inflammation.",
    "Relief within 1-2 weeks, lasting weeks to months",
    "Can reduce pain enough to allow rehabilitation.",
    "Effect is temporary; repeated injections are limited.",
);

pub const ASPIRATION: TreatmentOption = TreatmentOption::new(
    "Aspiration",
    Interventional,
    "Drawing off fluid with a needle, sometimes followed by an injection.",
    "Same-day procedure",
    "Quick relief of tightness; the fluid can be analysed.",
    "Fluid often re-accumulates if the cause is not treated.",
);

pub const ARTHROSCOPIC_REPAIR: TreatmentOption = TreatmentOption::new(
    "Arthroscopic repair",
    Surgical,
    "Keyhole surgery to repair the damaged tissue where it can heal.",
    "Return to sport typically 4-9 months",
    "Restores anatomy and can protect the joint from further damage.",
    "Surgical risks and a long rehabilitation period.",
);

pub const ARTHROSCOPIC_DEBRIDEMENT: TreatmentOption = TreatmentOption::new(
    "Arthroscopic debridement",
    Surgical,
    "Keyhole surgery to trim unstable or damaged tissue.",
    "Return to normal activity typically 4-8 weeks",
    "Quicker recovery than repair.",
    "Removes tissue rather than restoring it; benefit in degenerative cases is limited.",
);

pub const PAIN_DIARY: SelfAssessmentQuestion = SelfAssessmentQuestion::new(
    "Which activities reliably bring on your pain?",
    "Knowing the aggravating load helps your clinician target treatment and track progress.",
);

pub const NIGHT_PAIN: SelfAssessmentQuestion = SelfAssessmentQuestion::new(
    "Does the pain wake you at night?",
    "Night pain is common with inflammatory and tendon problems and is worth mentioning.",
);

pub const SWELLING: SelfAssessmentQuestion = SelfAssessmentQuestion::new(
    "Does the joint swell after activity?",
    "Swelling after load suggests the joint is irritated and guides how quickly to progress.",
);

pub const INSTABILITY: SelfAssessmentQuestion = SelfAssessmentQuestion::new(
    "Does the joint ever feel like it gives way or slips?",
    "Episodes of instability change the balance between rehabilitation and surgery.",
);

pub const ASK_ABOUT_SURGERY: &str = "Would surgery change the long-term outcome for me, or is rehabilitation the first step?";
pub const ASK_ABOUT_ACTIVITY: &str = "Which activities should I avoid for now, and when can I return to them?";
pub const ASK_ABOUT_FOLLOW_UP: &str = "Do I need follow-up imaging, and what would it change?";
