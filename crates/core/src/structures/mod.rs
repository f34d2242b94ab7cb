//! Anatomical structure detection.
//!
//! Every supported joint has an ordered table of structure rules. A rule names the structure
//! it yields, its pattern, and the structures it gives way to: an umbrella rule such as
//! "rotator cuff" only fires when none of the specific cuff tendons was found earlier in the
//! same pass. A structure is reported at most once per pass.
//!
//! A unit of the form "X with [associated] Y" is scanned as two clauses so that each structure
//! keeps the clause that describes it. See [`detect`].

mod knee;
mod shoulder;

use crate::normal::is_normal_finding;
use crate::patterns::compile;
use imprex_types::{JointId, StructureId};
use once_cell::sync::Lazy;
use regex::Regex;

pub struct StructureRule {
    pub structure: StructureId,
    pub pattern: Regex,
    /// Rule is skipped when any of these was already found in the same pass.
    pub yields_to: &'static [StructureId],
}

impl StructureRule {
    pub(crate) fn new(
        structure: StructureId,
        pattern: &str,
        yields_to: &'static [StructureId],
    ) -> Self {
        Self {
            structure,
            pattern: compile(pattern),
            yields_to,
        }
    }
}

pub struct StructureTable {
    pub joint: JointId,
    pub rules: Vec<StructureRule>,
}

impl StructureTable {
    /// Structures mentioned in `text`, in table order, each at most once.
    pub fn scan(&self, text: &str) -> Vec<StructureId> {
        let mut found: Vec<StructureId> = Vec::new();
        for rule in &self.rules {
            if found.contains(&rule.structure) {
                continue;
            }
            if rule.yields_to.iter().any(|s| found.contains(s)) {
                continue;
            }
            if rule.pattern.is_match(text) {
                found.push(rule.structure);
            }
        }
        found
    }
}

static KNEE_TABLE: Lazy<StructureTable> = Lazy::new(knee::table);
static SHOULDER_TABLE: Lazy<StructureTable> = Lazy::new(shoulder::table);

/// Rule table for `joint`; `None` for joints without a vocabulary.
pub fn table_for(joint: JointId) -> Option<&'static StructureTable> {
    match joint {
        JointId::Knee => Some(&*KNEE_TABLE),
        JointId::Shoulder => Some(&*SHOULDER_TABLE),
        JointId::Hip => None,
    }
}

static ASSOCIATION: Lazy<Regex> =
    Lazy::new(|| compile(r"(?s)^(.+?)\s+with\s+(?:associated\s+)?(.+)$"));

/// Split "X with [associated] Y" at the first "with". Both parts are trimmed and non-empty.
pub fn split_association(unit: &str) -> Option<(&str, &str)> {
    let caps = ASSOCIATION.captures(unit)?;
    let primary = caps.get(1)?.as_str().trim();
    let associated = caps.get(2)?.as_str().trim();
    if primary.is_empty() || associated.is_empty() {
        return None;
    }
    Some((primary, associated))
}

/// Which part of the unit a structure was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseRole {
    Primary,
    Associated,
    WholeUnit,
}

/// A structure together with the text that describes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectedStructure {
    pub structure: StructureId,
    /// Text the pathology, location and severity are read from.
    pub evidence: String,
    pub role: ClauseRole,
}

impl DetectedStructure {
    fn new(structure: StructureId, evidence: &str, role: ClauseRole) -> Self {
        Self {
            structure,
            evidence: evidence.to_string(),
            role,
        }
    }
}

/// Detect structures in a cleaned unit.
///
/// Without an association split the whole unit is scanned. With one:
/// - the primary clause is scanned; if it finds nothing (and is not itself a normal
///   statement) the whole unit is scanned instead,
/// - the associated clause is scanned and contributes structures not already found,
/// - a clause that reads as a normal finding contributes nothing.
///
/// Primary structures keep the primary clause as evidence only when the associated clause
/// contributed a structure of its own; otherwise the whole unit is their evidence.
pub fn detect(unit: &str, table: &StructureTable) -> Vec<DetectedStructure> {
    let Some((primary, associated)) = split_association(unit) else {
        return table
            .scan(unit)
            .into_iter()
            .map(|s| DetectedStructure::new(s, unit, ClauseRole::WholeUnit))
            .collect();
    };

    let primary_is_normal = is_normal_finding(primary);
    let mut primary_found = if primary_is_normal {
        Vec::new()
    } else {
        table.scan(primary)
    };
    let mut retried = false;
    if primary_found.is_empty() && !primary_is_normal {
        primary_found = table.scan(unit);
        retried = true;
    }

    let associated_found: Vec<StructureId> = if is_normal_finding(associated) {
        Vec::new()
    } else {
        table
            .scan(associated)
            .into_iter()
            .filter(|s| !primary_found.contains(s))
            .collect()
    };

    let (primary_evidence, primary_role) = if !retried && !associated_found.is_empty() {
        (primary, ClauseRole::Primary)
    } else {
        (unit, ClauseRole::WholeUnit)
    };

    let mut detected: Vec<DetectedStructure> = primary_found
        .into_iter()
        .map(|s| DetectedStructure::new(s, primary_evidence, primary_role))
        .collect();
    detected.extend(
        associated_found
            .into_iter()
            .map(|s| DetectedStructure::new(s, associated, ClauseRole::Associated)),
    );
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knee() -> &'static StructureTable {
        table_for(JointId::Knee).unwrap()
    }

    fn shoulder() -> &'static StructureTable {
        table_for(JointId::Shoulder).unwrap()
    }

    #[test]
    fn test_tables_only_use_their_vocabulary() {
        for joint in [JointId::Knee, JointId::Shoulder] {
            let table = table_for(joint).unwrap();
            assert_eq!(table.joint, joint);
            let vocab = StructureId::vocabulary(joint);
            for rule in &table.rules {
                assert!(vocab.contains(&rule.structure), "{:?}", rule.structure);
                for s in rule.yields_to {
                    assert!(vocab.contains(s), "{s:?}");
                }
            }
        }
        assert!(table_for(JointId::Hip).is_none());
    }

    #[test]
    fn test_every_vocabulary_structure_has_a_rule() {
        for joint in [JointId::Knee, JointId::Shoulder] {
            let table = table_for(joint).unwrap();
            for s in StructureId::vocabulary(joint) {
                assert!(
                    table.rules.iter().any(|r| r.structure == *s),
                    "no rule for {s:?}"
                );
            }
        }
    }

    #[test]
    fn test_split_association() {
        assert_eq!(
            split_association("Complete tear of the ACL with associated bone bruising."),
            Some(("Complete tear of the ACL", "bone bruising."))
        );
        assert_eq!(
            split_association("Tear with displaced fragment with edema"),
            Some(("Tear", "displaced fragment with edema"))
        );
        assert_eq!(split_association("Isolated ACL tear"), None);
        assert_eq!(split_association("with effusion"), None);
    }

    #[test]
    fn test_association_assigns_evidence_per_clause() {
        let found = detect(
            "Complete tear of the ACL with associated bone bruising of the lateral femoral condyle.",
            knee(),
        );
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].structure, StructureId::Acl);
        assert_eq!(found[0].evidence, "Complete tear of the ACL");
        assert_eq!(found[0].role, ClauseRole::Primary);
        assert_eq!(found[1].structure, StructureId::LateralFemoralCondyle);
        assert_eq!(found[1].role, ClauseRole::Associated);
        assert_eq!(
            found[1].evidence,
            "bone bruising of the lateral femoral condyle."
        );
    }

    #[test]
    fn test_primary_without_structures_retries_whole_unit() {
        let unit = "Signal change consistent with partial tear of the ACL";
        let found = detect(unit, knee());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].structure, StructureId::Acl);
        assert_eq!(found[0].evidence, unit);
        assert_eq!(found[0].role, ClauseRole::WholeUnit);
    }

    #[test]
    fn test_association_without_new_structure_keeps_whole_unit() {
        let unit = "Medial meniscus tear with extension to the inferior articular surface";
        let found = detect(unit, knee());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].structure, StructureId::MeniscusMedial);
        assert_eq!(found[0].evidence, unit);
    }

    #[test]
    fn test_normal_primary_clause_contributes_nothing() {
        let found = detect("Intact ACL graft with moderate joint effusion", knee());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].structure, StructureId::Effusion);
    }

    #[test]
    fn test_umbrella_yields_to_specific_structure() {
        assert_eq!(
            shoulder().scan("Full-thickness rotator cuff tear involving the supraspinatus"),
            vec![StructureId::Supraspinatus]
        );
        assert_eq!(
            shoulder().scan("Rotator cuff tendinosis"),
            vec![StructureId::Supraspinatus]
        );
        assert_eq!(
            knee().scan("Meniscal tear"),
            vec![StructureId::MeniscusMedial]
        );
    }

    #[test]
    fn test_bone_site_yields_to_cartilage_of_same_compartment() {
        assert_eq!(
            knee().scan("Full-thickness cartilage loss of the medial femoral condyle"),
            vec![StructureId::CartilageMedial]
        );
        assert_eq!(
            knee().scan("Bone bruise of the medial femoral condyle"),
            vec![StructureId::MedialFemoralCondyle]
        );
    }

    #[test]
    fn test_reverse_bankart_is_posterior() {
        assert_eq!(
            shoulder().scan("Reverse Bankart lesion"),
            vec![StructureId::LabrumPosterior]
        );
        assert_eq!(
            shoulder().scan("Bony Bankart lesion"),
            vec![StructureId::LabrumAnterior]
        );
    }

    #[test]
    fn test_biceps_anchor_is_superior_labrum() {
        assert_eq!(
            shoulder().scan("SLAP tear extending into the biceps anchor"),
            vec![StructureId::LabrumSuperior]
        );
        assert_eq!(
            shoulder().scan("Biceps tendinosis and SLAP tear"),
            vec![StructureId::LabrumSuperior, StructureId::BicepsTendon]
        );
    }

    #[test]
    fn test_ac_joint_arthrosis_is_not_glenohumeral_cartilage() {
        assert_eq!(
            shoulder().scan("Moderate AC joint arthrosis"),
            vec![StructureId::AcJoint]
        );
        assert_eq!(
            shoulder().scan("Glenohumeral osteoarthritis"),
            vec![StructureId::CartilageGlenohumeral]
        );
    }

    #[test]
    fn test_each_structure_reported_once() {
        assert_eq!(
            knee().scan("ACL tear. Anterior cruciate ligament graft"),
            vec![StructureId::Acl]
        );
    }
}
