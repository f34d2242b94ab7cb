//! Pathology label resolution.
//!
//! Each structure family has an ordered list of label rules; the first rule whose pattern
//! matches the evidence text wins. When nothing matches, the family's generic label is used,
//! so a resolved label is never empty.
//!
//! Rules may capture a qualifier (a SLAP type number, a tear orientation, a cartilage grade)
//! which is interpolated into the label. Roman numerals are normalised to digits.

use crate::patterns::compile;
use imprex_types::{StructureFamily, StructureId};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// How a matching rule turns into a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Fixed(&'static str),
    /// `template` contains `{}` for the first captured qualifier; `base` is used when the
    /// rule matched without capturing one.
    Qualified {
        base: &'static str,
        template: &'static str,
    },
}

impl Label {
    fn render(&self, caps: &Captures<'_>) -> String {
        match self {
            Label::Fixed(text) => (*text).to_string(),
            Label::Qualified { base, template } => {
                match caps.iter().skip(1).flatten().next() {
                    Some(q) => template.replace("{}", &normalise_qualifier(q.as_str())),
                    None => (*base).to_string(),
                }
            }
        }
    }
}

pub struct LabelRule {
    pub pattern: Regex,
    pub label: Label,
}

impl LabelRule {
    fn fixed(pattern: &str, label: &'static str) -> Self {
        Self {
            pattern: compile(pattern),
            label: Label::Fixed(label),
        }
    }

    fn qualified(pattern: &str, base: &'static str, template: &'static str) -> Self {
        Self {
            pattern: compile(pattern),
            label: Label::Qualified { base, template },
        }
    }

    /// Label produced by this rule for `text`, if it matches.
    pub fn apply(&self, text: &str) -> Option<String> {
        self.pattern.captures(text).map(|caps| self.label.render(&caps))
    }
}

static LIGAMENT_RULES: Lazy<Vec<LabelRule>> = Lazy::new(|| {
    vec![
        LabelRule::fixed(
            r"\bgraft\b[^.;]*\b(?:tears?|torn|ruptur\w*|disrupt\w*|failure)\b|\b(?:tears?|torn|ruptured|disrupted)\b[^.;]*\bgraft\b",
            "Graft Tear",
        ),
        LabelRule::fixed(
            r"\b(?:complete(?:ly)?|full[- ]thickness)\b|\bruptur\w*|\bdisrupt\w*|\bgrade\s*(?:3|iii)\b|\bdiscontinu\w*|\bnon[- ]?visuali[sz]ed",
            "Complete Tear",
        ),
        LabelRule::fixed(
            r"\bpartial\w*|\bhigh[- ]grade\b|\blow[- ]grade\s+(?:partial\s+)?tear|\bgrade\s*(?:2|ii)\b",
            "Partial Tear",
        ),
        LabelRule::fixed(r"\bavuls\w*", "Avulsion Injury"),
        LabelRule::fixed(
            r"\bsprain\w*|\bgrade\s*(?:1|i)\b|\bperiligamentous|\bo?edema\b",
            "Sprain",
        ),
        LabelRule::fixed(
            r"\bmucoid|\bdegenerat\w*|\bthicken\w*|\bganglion",
            "Mucoid Degeneration",
        ),
        LabelRule::fixed(r"\bgraft\b", "Graft Abnormality"),
        LabelRule::fixed(r"\btears?\b|\btorn\b", "Tear"),
    ]
});

static TENDON_RULES: Lazy<Vec<LabelRule>> = Lazy::new(|| {
    vec![
        LabelRule::fixed(r"\bmassive\b", "Massive Tear"),
        LabelRule::fixed(
            r"\bfull[- ]thickness\b|\bcomplete(?:ly)?\b|\bruptur\w*|\btransmural\b|\bthrough[- ]and[- ]through\b",
            "Full-Thickness Tear",
        ),
        LabelRule::qualified(
            r"\b(articular|bursal)(?:[- ]sided|[- ]surface)?\s+partial|\bpartial(?:[- ]thickness)?\b(?:[^.;]*?\b(articular|bursal)(?:[- ]sided|[- ]surface))?",
            "Partial-Thickness Tear",
            "Partial-Thickness Tear ({}-Sided)",
        ),
        LabelRule::fixed(
            r"\binterstitial\b|\bintrasubstance\s+tear|\bdelaminat\w*",
            "Interstitial Tear",
        ),
        LabelRule::fixed(
            r"\bcalcific\w*|\bcalcification|\bcalcium\s+deposit|\bhydroxyapatite",
            "Calcific Tendinitis",
        ),
        LabelRule::fixed(
            r"\btendino(?:sis|pathy)\b|\btendinitis\b|\btendonitis\b|\btendon\s+degenerat\w*|\bjumper",
            "Tendinosis",
        ),
        LabelRule::fixed(r"\bsublux\w*", "Subluxation"),
        LabelRule::fixed(r"\bdislocat\w*|\bmedial(?:ly)?\s+displac\w*", "Dislocation"),
        LabelRule::fixed(r"\btears?\b|\btorn\b", "Tear"),
    ]
});

static MENISCUS_RULES: Lazy<Vec<LabelRule>> = Lazy::new(|| {
    vec![
        LabelRule::fixed(r"\bbucket[- ]handle\b", "Bucket-Handle Tear"),
        LabelRule::fixed(
            r"\broot\s+(?:tear|avulsion)|\broot\b[^.;]*\btears?\b|\btears?\b[^.;]*\broot\b",
            "Root Tear",
        ),
        LabelRule::fixed(r"\bradial\b", "Radial Tear"),
        LabelRule::fixed(r"\bcomplex\b", "Complex Tear"),
        LabelRule::qualified(
            r"\b(horizontal|oblique|vertical|longitudinal|flap|parrot[- ]beak)\b",
            "Meniscal Tear",
            "{} Tear",
        ),
        LabelRule::fixed(r"\bextru\w*", "Meniscal Extrusion"),
        LabelRule::fixed(r"\bparameniscal\b|\bmeniscal\s+cyst", "Meniscal Cyst"),
        LabelRule::fixed(r"\bdiscoid\b", "Discoid Meniscus"),
        LabelRule::fixed(
            r"\bdegenerat\w*|\bintrasubstance\s+(?:signal|degenerat\w*)|\bmyxoid\b",
            "Meniscal Degeneration",
        ),
        LabelRule::fixed(r"\btears?\b|\btorn\b", "Meniscal Tear"),
    ]
});

static LABRUM_RULES: Lazy<Vec<LabelRule>> = Lazy::new(|| {
    vec![
        LabelRule::qualified(
            r"\btype\s*(\d{1,2}|[ivx]{1,4})\s+slap\b|\bslap\b(?:[^.;]*?\btype\s*(\d{1,2}|[ivx]{1,4})\b)?",
            "SLAP Tear",
            "SLAP Tear (Type {})",
        ),
        LabelRule::fixed(r"\breverse\s+bankart", "Reverse Bankart Lesion"),
        LabelRule::fixed(r"\bbony\s+bankart", "Bony Bankart Lesion"),
        LabelRule::fixed(r"\bbankart", "Bankart Lesion"),
        LabelRule::fixed(r"\bperthes", "Perthes Lesion"),
        LabelRule::fixed(r"\balpsa\b", "ALPSA Lesion"),
        LabelRule::fixed(r"\bglad\b", "GLAD Lesion"),
        LabelRule::fixed(r"\bkim\s+lesion", "Kim Lesion"),
        LabelRule::fixed(r"\bparalabral\b", "Labral Tear with Paralabral Cyst"),
        LabelRule::fixed(r"\bdegenerat\w*|\bfray\w*", "Labral Degeneration"),
        LabelRule::fixed(r"\bdetach\w*", "Labral Detachment"),
        LabelRule::fixed(r"\btears?\b|\btorn\b", "Labral Tear"),
    ]
});

static BONE_RULES: Lazy<Vec<LabelRule>> = Lazy::new(|| {
    vec![
        LabelRule::fixed(r"\bhill[- ]sachs", "Hill-Sachs Lesion"),
        LabelRule::fixed(r"\bbony\s+bankart", "Bony Bankart Lesion"),
        LabelRule::fixed(r"\bbone\s+loss|\bglenoid\s+erosion", "Glenoid Bone Loss"),
        LabelRule::qualified(
            r"\b(impaction|avulsion|stress|insufficiency|depressed|comminuted|segond|osteochondral|non-?displaced)?\s*\bfractur\w*",
            "Fracture",
            "{} Fracture",
        ),
        LabelRule::fixed(
            r"\bosteochondral\b|\bocd\b|\bosteochondritis",
            "Osteochondral Lesion",
        ),
        LabelRule::fixed(
            r"\bosteonecrosis|\bavascular\s+necrosis|\bavn\b|\bsonk\b",
            "Osteonecrosis",
        ),
        LabelRule::fixed(r"\bdislocat\w*", "Dislocation Injury"),
        LabelRule::fixed(
            r"\bsublux\w*|\bmaltracking|\blateral\s+(?:patellar\s+)?tilt",
            "Subluxation",
        ),
        LabelRule::fixed(
            r"\bbruis\w*|\bcontusions?\b|\bmarrow\s+o?edema|\bo?edema\b",
            "Bone Bruise",
        ),
        LabelRule::fixed(r"\bcyst\w*", "Subchondral Cyst"),
        LabelRule::fixed(r"\bosteophyt\w*|\bspurs?\b", "Osteophytes"),
        LabelRule::fixed(r"\bsubchondral\b|\bsclerosis\b", "Subchondral Change"),
    ]
});

static JOINT_SPACE_RULES: Lazy<Vec<LabelRule>> = Lazy::new(|| {
    vec![
        LabelRule::fixed(
            r"\bsepar\w*|\bdisrupt\w*|\bdislocat\w*|\bsprain\w*|\bwidening\b",
            "AC Joint Separation",
        ),
        LabelRule::fixed(
            r"\bbursitis\b|\bbursal\s+(?:fluid|thickening|distension|effusion)|\bfluid\s+(?:with)?in\s+the\s+(?:subacromial|subdeltoid)",
            "Bursitis",
        ),
        LabelRule::fixed(r"\bimpingement\b", "Impingement"),
        LabelRule::fixed(r"\bos\s+acromiale\b", "Os Acromiale"),
        LabelRule::fixed(
            r"\bspurs?\b|\benthesophyt\w*|\bdownsloping\b",
            "Acromial Spur",
        ),
        LabelRule::fixed(
            r"\barthros\w*|\bosteoarthrit\w*|\bdegenerat\w*|\bhypertroph\w*|\bosteophyt\w*|\barthropathy\b",
            "Osteoarthritis",
        ),
        LabelRule::fixed(r"\bosteolysis\b", "Distal Clavicular Osteolysis"),
    ]
});

static FLUID_RULES: Lazy<Vec<LabelRule>> = Lazy::new(|| {
    vec![
        LabelRule::fixed(
            r"\bruptur\w*[^.;]*\b(?:baker|popliteal)|\b(?:baker|popliteal)[^.;]*\bruptur\w*",
            "Ruptured Baker's Cyst",
        ),
        LabelRule::fixed(r"\bbaker|\bpopliteal\s+cyst", "Baker's Cyst"),
        LabelRule::fixed(r"\blipohemarthrosis\b", "Lipohemarthrosis"),
        LabelRule::fixed(r"\bhemarthrosis\b", "Hemarthrosis"),
        LabelRule::fixed(r"\bsynovitis\b", "Effusion with Synovitis"),
        LabelRule::fixed(r"\beffusions?\b|\bjoint\s+fluid\b", "Joint Effusion"),
    ]
});

static CARTILAGE_RULES: Lazy<Vec<LabelRule>> = Lazy::new(|| {
    vec![
        LabelRule::fixed(
            r"\bfull[- ]thickness\b|\bbone[- ]on[- ]bone\b|\bdenuded\b|\bexposed\s+(?:subchondral\s+)?bone",
            "Full-Thickness Cartilage Loss",
        ),
        LabelRule::qualified(
            r"\bgrade\s*(\d|[iv]{1,3})\s+chondromalacia|\bchondromalacia\b(?:[^.;]*?\bgrade\s*(\d|[iv]{1,3})\b)?",
            "Chondromalacia",
            "Chondromalacia (Grade {})",
        ),
        LabelRule::fixed(r"\bflap\b", "Chondral Flap"),
        LabelRule::fixed(r"\bfissur\w*", "Cartilage Fissuring"),
        LabelRule::fixed(
            r"\bosteoarthrit\w*|\barthros\w*|\bdegenerative\s+(?:joint|change\w*)|\btricompartmental\b",
            "Osteoarthritis",
        ),
        LabelRule::fixed(
            r"\bpartial[- ]thickness\b|\bthinning\b|\bsurface\s+irregular\w*|\bsoftening\b",
            "Partial-Thickness Cartilage Loss",
        ),
        LabelRule::fixed(r"\bdefects?\b|\bloss\b|\blesions?\b|\binjury\b", "Chondral Defect"),
    ]
});

static CAPSULE_RULES: Lazy<Vec<LabelRule>> = Lazy::new(|| {
    vec![
        LabelRule::fixed(
            r"\badhesive\s+capsulitis|\bfrozen\s+shoulder|\bcapsulitis\b",
            "Adhesive Capsulitis",
        ),
        LabelRule::fixed(r"\bhagl\b|\bhumeral\s+avulsion", "HAGL Lesion"),
        LabelRule::fixed(r"\bthicken\w*|\bscar\w*", "Capsular Thickening"),
        LabelRule::fixed(
            r"\blax\w*|\bredundan\w*|\bpatulous\b|\bcapacious\b",
            "Capsular Laxity",
        ),
        LabelRule::fixed(r"\btears?\b|\btorn\b|\bdisrupt\w*", "Capsular Tear"),
    ]
});

/// Ordered label rules for a family.
pub fn rules_for(family: StructureFamily) -> &'static [LabelRule] {
    match family {
        StructureFamily::Ligament => LIGAMENT_RULES.as_slice(),
        StructureFamily::Tendon => TENDON_RULES.as_slice(),
        StructureFamily::Meniscus => MENISCUS_RULES.as_slice(),
        StructureFamily::Labrum => LABRUM_RULES.as_slice(),
        StructureFamily::Bone => BONE_RULES.as_slice(),
        StructureFamily::JointSpace => JOINT_SPACE_RULES.as_slice(),
        StructureFamily::Fluid => FLUID_RULES.as_slice(),
        StructureFamily::Cartilage => CARTILAGE_RULES.as_slice(),
        StructureFamily::Capsule => CAPSULE_RULES.as_slice(),
    }
}

/// Label used when no rule of the family matches.
pub fn generic_label(family: StructureFamily) -> &'static str {
    match family {
        StructureFamily::Ligament => "Ligament Injury",
        StructureFamily::Tendon => "Tendon Pathology",
        StructureFamily::Meniscus => "Meniscal Pathology",
        StructureFamily::Labrum => "Labral Pathology",
        StructureFamily::Bone => "Bone Abnormality",
        StructureFamily::JointSpace => "Joint Space Abnormality",
        StructureFamily::Fluid => "Fluid Collection",
        StructureFamily::Cartilage => "Cartilage Damage",
        StructureFamily::Capsule => "Capsular Pathology",
    }
}

/// Canonical pathology label for `structure` described by `text`. Never empty.
pub fn resolve_pathology(text: &str, structure: StructureId) -> String {
    let family = structure.family();
    rules_for(family)
        .iter()
        .find_map(|rule| rule.apply(text))
        .unwrap_or_else(|| generic_label(family).to_string())
}

struct LocationRule {
    families: &'static [StructureFamily],
    pattern: Regex,
}

static LOCATION_RULES: Lazy<Vec<LocationRule>> = Lazy::new(|| {
    use StructureFamily::*;
    let rules: &[(&'static [StructureFamily], &str)] = &[
        (&[Meniscus], r"\b(posterior\s+horn)\b"),
        (&[Meniscus], r"\b(anterior\s+horn)\b"),
        (&[Meniscus], r"\b((?:posterior|anterior)\s+root|root)\b"),
        (&[Meniscus], r"\b(body)\b"),
        (&[Meniscus], r"\b(free\s+edge|periphery|ramp)\b"),
        (
            &[Ligament],
            r"\b(femoral\s+(?:attachment|origin)|tibial\s+(?:attachment|insertion))\b",
        ),
        (&[Ligament, Tendon], r"\b(mid-?substance)\b"),
        (&[Tendon], r"\b(footprint|insertion|critical\s+zone)\b"),
        (&[Tendon], r"\b((?:anterior\s+)?leading\s+edge|musculotendinous\s+junction)\b"),
        (&[Tendon], r"\b(intra-?articular|bicipital\s+groove)\b"),
        (&[Ligament, Tendon], r"\b(proximal|distal)\b"),
        (
            &[Labrum],
            r"(\b\d{1,2}(?::\d{2})?\s*(?:to|-)\s*\d{1,2}(?::\d{2})?\s*o'?clock)",
        ),
        (
            &[Labrum],
            r"\b(anteroinferior|anterosuperior|posteroinferior|posterosuperior)\b",
        ),
        (
            &[Bone, Cartilage],
            r"\b(weight[- ]bearing|trochle(?:a|ar\s+groove)|(?:medial|lateral)\s+facet|patellar\s+apex)\b",
        ),
        (&[Bone], r"\b(posterolateral|posteromedial|anterolateral|anteromedial)\b"),
        (&[Fluid], r"\b(suprapatellar\s+(?:recess|pouch)|axillary\s+recess)\b"),
        (&[Capsule, JointSpace], r"\b(rotator\s+interval|axillary\s+recess)\b"),
    ];
    rules
        .iter()
        .map(|&(families, pattern)| LocationRule {
            families,
            pattern: compile(pattern),
        })
        .collect()
});

/// First sub-location phrase for the structure's family, lowercased; empty when none.
pub fn extract_location(text: &str, structure: StructureId) -> String {
    let family = structure.family();
    LOCATION_RULES
        .iter()
        .filter(|rule| rule.families.contains(&family))
        .find_map(|rule| rule.pattern.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| {
            m.as_str()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .unwrap_or_default()
}

fn roman_to_digit(raw: &str) -> Option<&'static str> {
    Some(match raw {
        "i" => "1",
        "ii" => "2",
        "iii" => "3",
        "iv" => "4",
        "v" => "5",
        "vi" => "6",
        "vii" => "7",
        "viii" => "8",
        "ix" => "9",
        "x" => "10",
        _ => return None,
    })
}

/// Normalise a captured qualifier: Roman numerals become digits, words become Title-Case.
pub fn normalise_qualifier(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    if let Some(digit) = roman_to_digit(&lower) {
        return digit.to_string();
    }
    if lower.chars().all(|c| c.is_ascii_digit()) {
        return lower;
    }

    let mut out = String::with_capacity(lower.len());
    let mut capitalise = true;
    for c in lower.chars() {
        if capitalise && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalise = false;
        } else {
            out.push(c);
        }
        if c == ' ' || c == '-' {
            capitalise = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_families() -> [StructureFamily; 9] {
        use StructureFamily::*;
        [
            Ligament, Tendon, Meniscus, Labrum, Bone, JointSpace, Fluid, Cartilage, Capsule,
        ]
    }

    #[test]
    fn test_all_rule_tables_compile() {
        for family in all_families() {
            assert!(!rules_for(family).is_empty());
            assert!(!generic_label(family).is_empty());
        }
        assert!(!LOCATION_RULES.is_empty());
    }

    #[test]
    fn test_ligament_labels() {
        let acl = StructureId::Acl;
        assert_eq!(resolve_pathology("Complete tear of the ACL", acl), "Complete Tear");
        assert_eq!(resolve_pathology("ACL rupture", acl), "Complete Tear");
        assert_eq!(resolve_pathology("High-grade partial ACL tear", acl), "Partial Tear");
        assert_eq!(resolve_pathology("Grade 1 MCL sprain", StructureId::Mcl), "Sprain");
        assert_eq!(resolve_pathology("Mucoid degeneration of the ACL", acl), "Mucoid Degeneration");
        assert_eq!(resolve_pathology("Torn ACL graft", acl), "Graft Tear");
        assert_eq!(resolve_pathology("ACL tear", acl), "Tear");
        assert_eq!(resolve_pathology("ACL", acl), "Ligament Injury");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // both "complete" and "partial" appear; the complete-tear rule is listed first
        assert_eq!(
            resolve_pathology("Partial versus complete ACL tear", StructureId::Acl),
            "Complete Tear"
        );
    }

    #[test]
    fn test_tendon_labels() {
        let ssp = StructureId::Supraspinatus;
        assert_eq!(
            resolve_pathology("Full-thickness supraspinatus tear", ssp),
            "Full-Thickness Tear"
        );
        assert_eq!(
            resolve_pathology("Massive full-thickness rotator cuff tear", ssp),
            "Massive Tear"
        );
        assert_eq!(
            resolve_pathology("Partial-thickness bursal-sided supraspinatus tear", ssp),
            "Partial-Thickness Tear (Bursal-Sided)"
        );
        assert_eq!(
            resolve_pathology("Articular-sided partial tear of the supraspinatus", ssp),
            "Partial-Thickness Tear (Articular-Sided)"
        );
        assert_eq!(
            resolve_pathology("Partial tear of the supraspinatus", ssp),
            "Partial-Thickness Tear"
        );
        assert_eq!(resolve_pathology("Supraspinatus tendinosis", ssp), "Tendinosis");
        assert_eq!(
            resolve_pathology("Calcific tendinitis of the supraspinatus", ssp),
            "Calcific Tendinitis"
        );
        assert_eq!(
            resolve_pathology("Medial subluxation of the biceps tendon", StructureId::BicepsTendon),
            "Subluxation"
        );
        assert_eq!(resolve_pathology("Supraspinatus", ssp), "Tendon Pathology");
    }

    #[test]
    fn test_meniscus_labels() {
        let mm = StructureId::MeniscusMedial;
        assert_eq!(
            resolve_pathology("Bucket-handle tear of the medial meniscus", mm),
            "Bucket-Handle Tear"
        );
        assert_eq!(resolve_pathology("Medial meniscus posterior root tear", mm), "Root Tear");
        assert_eq!(resolve_pathology("Radial tear of the body", mm), "Radial Tear");
        assert_eq!(
            resolve_pathology("Horizontal oblique tear of the posterior horn", mm),
            "Horizontal Tear"
        );
        assert_eq!(resolve_pathology("Parrot-beak tear", mm), "Parrot-Beak Tear");
        assert_eq!(resolve_pathology("Meniscal extrusion", mm), "Meniscal Extrusion");
        assert_eq!(resolve_pathology("Medial meniscus tear", mm), "Meniscal Tear");
    }

    #[test]
    fn test_labrum_labels_interpolate_slap_type() {
        let sup = StructureId::LabrumSuperior;
        assert_eq!(resolve_pathology("SLAP tear, type II", sup), "SLAP Tear (Type 2)");
        assert_eq!(resolve_pathology("Type 3 SLAP lesion", sup), "SLAP Tear (Type 3)");
        assert_eq!(resolve_pathology("SLAP tear", sup), "SLAP Tear");
        let ant = StructureId::LabrumAnterior;
        assert_eq!(resolve_pathology("Bony Bankart lesion", ant), "Bony Bankart Lesion");
        assert_eq!(resolve_pathology("Bankart lesion", ant), "Bankart Lesion");
        assert_eq!(resolve_pathology("Anterior labral tear", ant), "Labral Tear");
        assert_eq!(resolve_pathology("Anterior labrum", ant), "Labral Pathology");
    }

    #[test]
    fn test_bone_labels() {
        let lfc = StructureId::LateralFemoralCondyle;
        assert_eq!(
            resolve_pathology("bone bruising of the lateral femoral condyle.", lfc),
            "Bone Bruise"
        );
        assert_eq!(
            resolve_pathology("Impaction fracture of the lateral femoral condyle", lfc),
            "Impaction Fracture"
        );
        assert_eq!(
            resolve_pathology("Non-displaced fracture of the patella", StructureId::Patella),
            "Non-Displaced Fracture"
        );
        assert_eq!(resolve_pathology("Patellar fracture", StructureId::Patella), "Fracture");
        assert_eq!(
            resolve_pathology("Hill-Sachs deformity", StructureId::HumeralHead),
            "Hill-Sachs Lesion"
        );
    }

    #[test]
    fn test_remaining_family_labels() {
        assert_eq!(
            resolve_pathology("moderate subacromial bursitis", StructureId::Subacromial),
            "Bursitis"
        );
        assert_eq!(
            resolve_pathology("AC joint arthrosis", StructureId::AcJoint),
            "Osteoarthritis"
        );
        assert_eq!(
            resolve_pathology("Moderate joint effusion.", StructureId::Effusion),
            "Joint Effusion"
        );
        assert_eq!(
            resolve_pathology("Ruptured Baker's cyst", StructureId::BakerCyst),
            "Ruptured Baker's Cyst"
        );
        assert_eq!(
            resolve_pathology(
                "Grade 3 chondromalacia patellae",
                StructureId::CartilagePatellofemoral
            ),
            "Chondromalacia (Grade 3)"
        );
        assert_eq!(
            resolve_pathology("Adhesive capsulitis", StructureId::Capsule),
            "Adhesive Capsulitis"
        );
        assert_eq!(resolve_pathology("capsule", StructureId::Capsule), "Capsular Pathology");
    }

    #[test]
    fn test_extract_location_is_family_aware() {
        assert_eq!(
            extract_location("Tear of the posterior horn of the medial meniscus", StructureId::MeniscusMedial),
            "posterior horn"
        );
        assert_eq!(
            extract_location("Tear of the posterior horn", StructureId::Acl),
            ""
        );
        assert_eq!(
            extract_location("ACL tear at the femoral attachment", StructureId::Acl),
            "femoral attachment"
        );
        assert_eq!(
            extract_location("Labral tear from 2 to 5 o'clock", StructureId::LabrumAnterior),
            "2 to 5 o'clock"
        );
        assert_eq!(
            extract_location("Supraspinatus tear at the footprint", StructureId::Supraspinatus),
            "footprint"
        );
    }

    #[test]
    fn test_normalise_qualifier() {
        assert_eq!(normalise_qualifier("II"), "2");
        assert_eq!(normalise_qualifier("4"), "4");
        assert_eq!(normalise_qualifier("bursal"), "Bursal");
        assert_eq!(normalise_qualifier("non-displaced"), "Non-Displaced");
        assert_eq!(normalise_qualifier("parrot beak"), "Parrot Beak");
    }
}
