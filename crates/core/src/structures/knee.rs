use super::{StructureRule, StructureTable};
use crate::patterns::near;
use imprex_types::JointId;
use imprex_types::StructureId::*;

const CARTILAGE_TERMS: &str = r"cartilage|chondr\w*|osteoarthrit\w*|arthros\w*";

pub(super) fn table() -> StructureTable {
    let cartilage_pf = near(CARTILAGE_TERMS, r"patell\w*|trochle\w*|patellofemoral", 40);
    let cartilage_medial = near(
        CARTILAGE_TERMS,
        r"medial\s+(?:compartment|femoral\s+condyle|tibial\s+plateau|tibiofemoral|femorotibial)|mfc",
        40,
    );
    let cartilage_lateral = near(
        CARTILAGE_TERMS,
        r"lateral\s+(?:compartment|femoral\s+condyle|tibial\s+plateau|tibiofemoral|femorotibial)|lfc",
        40,
    );

    let rules = vec![
        StructureRule::new(Acl, r"\b(?:acl|anterior\s+cruciate)\b", &[]),
        StructureRule::new(Pcl, r"\b(?:pcl|posterior\s+cruciate)\b", &[]),
        StructureRule::new(Mcl, r"\b(?:mcl|medial\s+collateral|tibial\s+collateral)\b", &[]),
        StructureRule::new(
            Lcl,
            r"\b(?:lcl|lateral\s+collateral|fibular\s+collateral|posterolateral\s+corner)\b",
            &[],
        ),
        StructureRule::new(MeniscusMedial, r"\bmedial\s+(?:and\s+lateral\s+)?menisc\w*", &[]),
        StructureRule::new(
            MeniscusLateral,
            r"\blateral\s+menisc\w*|\bmedial\s+and\s+lateral\s+menisc\w*",
            &[],
        ),
        // umbrella: unqualified meniscal findings default to the medial meniscus
        StructureRule::new(
            MeniscusMedial,
            r"\bmenisc\w*|\bbucket[- ]handle\b",
            &[MeniscusMedial, MeniscusLateral],
        ),
        StructureRule::new(
            PatellarTendon,
            r"\bpatellar\s+(?:tend\w*|ligament)|\binfrapatellar\s+tendon|\bjumper'?s\s+knee",
            &[],
        ),
        StructureRule::new(QuadricepsTendon, r"\bquad(?:riceps)?\s+tend\w*", &[]),
        StructureRule::new(CartilagePatellofemoral, &cartilage_pf, &[]),
        StructureRule::new(CartilageMedial, &cartilage_medial, &[]),
        StructureRule::new(CartilageLateral, &cartilage_lateral, &[]),
        StructureRule::new(
            CartilagePatellofemoral,
            r"\bchondromalacia\b",
            &[CartilageMedial, CartilageLateral],
        ),
        StructureRule::new(
            CartilageMedial,
            r"\bcartilage\b|\bchondr\w*|\bosteoarthrit\w*|\barthros\w*|\btricompartmental\b",
            &[CartilagePatellofemoral, CartilageMedial, CartilageLateral],
        ),
        StructureRule::new(
            LateralFemoralCondyle,
            r"\blateral\s+femoral\s+condyle|\blfc\b|\bsulcus\s+terminalis",
            &[CartilageLateral],
        ),
        StructureRule::new(
            MedialFemoralCondyle,
            r"\bmedial\s+femoral\s+condyle|\bmfc\b",
            &[CartilageMedial],
        ),
        StructureRule::new(
            LateralTibialPlateau,
            r"\blateral\s+tibial\s+plateau|\bposterolateral\s+tibia\w*|\blateral\s+tibia\b|\bsegond\b",
            &[CartilageLateral],
        ),
        StructureRule::new(
            MedialTibialPlateau,
            r"\bmedial\s+tibial\s+plateau|\bposteromedial\s+tibia\w*|\bmedial\s+tibia\b",
            &[CartilageMedial],
        ),
        StructureRule::new(
            Patella,
            r"\bpatella\b|\bpatellar\s+(?:dislocation|sublux\w*|fracture|bruis\w*|contusion|instability|maltracking|tilt)",
            &[CartilagePatellofemoral],
        ),
        StructureRule::new(
            LateralTibialPlateau,
            r"\btibial\s+plateau",
            &[LateralTibialPlateau, MedialTibialPlateau, CartilageMedial, CartilageLateral],
        ),
        StructureRule::new(
            LateralFemoralCondyle,
            r"\bfemoral\s+condyles?\b",
            &[LateralFemoralCondyle, MedialFemoralCondyle, CartilageMedial, CartilageLateral],
        ),
        // umbrella: an unlocated bone bruise is most often the lateral femoral condyle
        StructureRule::new(
            LateralFemoralCondyle,
            r"\bbone\s+(?:bruis\w*|contusions?)|\b(?:bone\s+)?marrow\s+o?edema|\bcontusions?\b|\bbruis\w*|\bosteochondral\b|\bfractur\w*",
            &[
                LateralFemoralCondyle,
                MedialFemoralCondyle,
                LateralTibialPlateau,
                MedialTibialPlateau,
                Patella,
            ],
        ),
        StructureRule::new(
            Effusion,
            r"\beffusions?\b|\bhemarthrosis\b|\blipohemarthrosis\b|\bsynovitis\b|\bjoint\s+fluid\b",
            &[],
        ),
        StructureRule::new(
            BakerCyst,
            r"\bbaker(?:'|’)?s?\s+cyst|\bpopliteal\s+cyst|\bsemimembranosus[- ]gastrocnemius",
            &[],
        ),
    ];

    StructureTable {
        joint: JointId::Knee,
        rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imprex_types::StructureId;

    fn scan(text: &str) -> Vec<StructureId> {
        table().scan(text)
    }

    #[test]
    fn test_ligaments() {
        assert_eq!(scan("Complete tear of the ACL"), vec![Acl]);
        assert_eq!(scan("Posterior cruciate ligament sprain"), vec![Pcl]);
        assert_eq!(scan("Grade 2 MCL sprain"), vec![Mcl]);
        assert_eq!(scan("Posterolateral corner injury"), vec![Lcl]);
    }

    #[test]
    fn test_menisci() {
        assert_eq!(scan("Medial meniscus tear"), vec![MeniscusMedial]);
        assert_eq!(scan("Lateral meniscal root tear"), vec![MeniscusLateral]);
        assert_eq!(
            scan("Degeneration of the medial and lateral menisci"),
            vec![MeniscusMedial, MeniscusLateral]
        );
        assert_eq!(scan("Bucket-handle tear"), vec![MeniscusMedial]);
    }

    #[test]
    fn test_cartilage_compartments() {
        assert_eq!(
            scan("Grade 3 chondromalacia patellae"),
            vec![CartilagePatellofemoral]
        );
        assert_eq!(
            scan("Chondral fissuring of the lateral tibial plateau"),
            vec![CartilageLateral]
        );
        assert_eq!(scan("Tricompartmental osteoarthritis"), vec![CartilageMedial]);
    }

    #[test]
    fn test_bone_sites() {
        assert_eq!(
            scan("bone bruising of the lateral femoral condyle."),
            vec![LateralFemoralCondyle]
        );
        assert_eq!(scan("Segond fracture"), vec![LateralTibialPlateau]);
        assert_eq!(scan("Tibial plateau fracture"), vec![LateralTibialPlateau]);
        assert_eq!(scan("Transient patellar dislocation"), vec![Patella]);
        assert_eq!(scan("Bone contusion"), vec![LateralFemoralCondyle]);
    }

    #[test]
    fn test_fluid() {
        assert_eq!(scan("Moderate joint effusion."), vec![Effusion]);
        assert_eq!(scan("Small Baker's cyst"), vec![BakerCyst]);
        assert_eq!(scan("Ruptured popliteal cyst"), vec![BakerCyst]);
    }

    #[test]
    fn test_tendons() {
        assert_eq!(scan("Patellar tendinosis"), vec![PatellarTendon]);
        assert_eq!(scan("Quadriceps tendon tear"), vec![QuadricepsTendon]);
    }
}
