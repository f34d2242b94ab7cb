use super::{StructureRule, StructureTable};
use imprex_types::JointId;
use imprex_types::StructureId::*;

pub(super) fn table() -> StructureTable {
    let rules = vec![
        StructureRule::new(Supraspinatus, r"\bsupraspin\w*|\bssp\b", &[]),
        StructureRule::new(Infraspinatus, r"\binfraspin\w*", &[]),
        StructureRule::new(Subscapularis, r"\bsubscapularis\b", &[]),
        StructureRule::new(TeresMinor, r"\bteres\s+minor\b", &[]),
        // umbrella: an unnamed cuff tendon is reported as the supraspinatus
        StructureRule::new(
            Supraspinatus,
            r"\brotator\s+cuff\b|\bcuff\s+(?:tear|tendino\w*|tendon)",
            &[Supraspinatus, Infraspinatus, Subscapularis, TeresMinor],
        ),
        StructureRule::new(
            LabrumSuperior,
            r"\bslap\b|\bsuperior\s+(?:glenoid\s+)?labr\w*|\bbiceps[- ]labral\b|\bbiceps\s+anchor\b",
            &[],
        ),
        StructureRule::new(
            LabrumPosterior,
            r"\bposterior(?:[- ]?(?:inferior|superior))?\s+(?:glenoid\s+)?labr\w*|\bposteroinferior\s+labr\w*|\breverse\s+bankart\b|\bkim\s+lesion\b",
            &[],
        ),
        StructureRule::new(
            LabrumAnterior,
            r"\banterior(?:[- ]?(?:inferior|superior))?\s+(?:glenoid\s+)?labr\w*|\banteroinferior\s+labr\w*|\bperthes\b|\balpsa\b|\bglad\b",
            &[],
        ),
        StructureRule::new(LabrumAnterior, r"\bbankart\b", &[LabrumPosterior]),
        // umbrella: an unlocated labral finding is reported as the anterior labrum
        StructureRule::new(
            LabrumAnterior,
            r"\blabr(?:um|al)\b|\bparalabral\b",
            &[LabrumSuperior, LabrumAnterior, LabrumPosterior],
        ),
        StructureRule::new(
            BicepsTendon,
            r"\bbiceps\s+tend\w*|\bbicipital\b|\blong\s+head\b",
            &[],
        ),
        StructureRule::new(BicepsTendon, r"\bbiceps\b", &[LabrumSuperior]),
        StructureRule::new(
            Subacromial,
            r"\bsubacromial\b|\bsubdeltoid\b|\bimpingement\b|\bacromial\s+(?:spur|enthesophyte)|\bdownsloping\s+acromion",
            &[],
        ),
        StructureRule::new(
            AcJoint,
            r"\bac\s+joint\b|\ba\.c\.\s+joint\b|\bacromioclavicular\b|\bdistal\s+clavic\w*|\bos\s+acromiale\b",
            &[],
        ),
        StructureRule::new(
            HumeralHead,
            r"\bhumeral\s+head\b|\bhill[- ]sachs\b|\b(?:greater|lesser)\s+tuberosity\b|\bproximal\s+humer\w*",
            &[],
        ),
        StructureRule::new(
            Glenoid,
            r"\bglenoid\s+(?:rim\s+)?fractur\w*|\bglenoid\s+bone\s+loss\b|\bglenoid\s+(?:erosion|dysplasia|retroversion)\b",
            &[],
        ),
        StructureRule::new(
            Glenoid,
            r"\bglenoid\b|\bbony\s+bankart\b",
            &[
                LabrumSuperior,
                LabrumAnterior,
                LabrumPosterior,
                CartilageGlenohumeral,
            ],
        ),
        StructureRule::new(
            Capsule,
            r"\bcapsul\w*|\bhagl\b|\bfrozen\s+shoulder\b|\brotator\s+interval\b|\bcoracohumeral\s+ligament\b|\baxillary\s+recess\b",
            &[],
        ),
        StructureRule::new(
            Effusion,
            r"\beffusions?\b|\bsynovitis\b|\bhemarthrosis\b|\bjoint\s+fluid\b",
            &[],
        ),
        StructureRule::new(
            CartilageGlenohumeral,
            r"\bglenohumeral\s+(?:osteoarthrit\w*|arthros\w*|arthritis|degenerat\w*|chondr\w*|cartilage)",
            &[],
        ),
        StructureRule::new(
            CartilageGlenohumeral,
            r"\bcartilage\b|\bchondr\w*|\bosteoarthrit\w*|\barthros\w*",
            &[AcJoint],
        ),
    ];

    StructureTable {
        joint: JointId::Shoulder,
        rules,
    }
}
