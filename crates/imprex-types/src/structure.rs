//! Anatomical structure identifiers and their families.
//!
//! The identifier set is closed: every structure the detector can emit is a variant here, and
//! each joint's vocabulary is a fixed slice of these variants. `Effusion` appears in both the
//! knee and shoulder vocabularies.

use crate::JointId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureId {
    // knee
    Acl,
    Pcl,
    Mcl,
    Lcl,
    MeniscusMedial,
    MeniscusLateral,
    PatellarTendon,
    QuadricepsTendon,
    CartilagePatellofemoral,
    CartilageMedial,
    CartilageLateral,
    LateralFemoralCondyle,
    MedialFemoralCondyle,
    LateralTibialPlateau,
    MedialTibialPlateau,
    Patella,
    BakerCyst,
    // shared
    Effusion,
    // shoulder
    Supraspinatus,
    Infraspinatus,
    Subscapularis,
    TeresMinor,
    BicepsTendon,
    LabrumSuperior,
    LabrumAnterior,
    LabrumPosterior,
    Subacromial,
    AcJoint,
    HumeralHead,
    Glenoid,
    Capsule,
    CartilageGlenohumeral,
}

/// Category a structure belongs to; selects the pathology rule list and severity default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureFamily {
    Ligament,
    Tendon,
    Meniscus,
    Labrum,
    Bone,
    JointSpace,
    Fluid,
    Cartilage,
    Capsule,
}

const KNEE_VOCABULARY: &[StructureId] = &[
    StructureId::Acl,
    StructureId::Pcl,
    StructureId::Mcl,
    StructureId::Lcl,
    StructureId::MeniscusMedial,
    StructureId::MeniscusLateral,
    StructureId::PatellarTendon,
    StructureId::QuadricepsTendon,
    StructureId::CartilagePatellofemoral,
    StructureId::CartilageMedial,
    StructureId::CartilageLateral,
    StructureId::LateralFemoralCondyle,
    StructureId::MedialFemoralCondyle,
    StructureId::LateralTibialPlateau,
    StructureId::MedialTibialPlateau,
    StructureId::Patella,
    StructureId::Effusion,
    StructureId::BakerCyst,
];

const SHOULDER_VOCABULARY: &[StructureId] = &[
    StructureId::Supraspinatus,
    StructureId::Infraspinatus,
    StructureId::Subscapularis,
    StructureId::TeresMinor,
    StructureId::BicepsTendon,
    StructureId::LabrumSuperior,
    StructureId::LabrumAnterior,
    StructureId::LabrumPosterior,
    StructureId::Subacromial,
    StructureId::AcJoint,
    StructureId::HumeralHead,
    StructureId::Glenoid,
    StructureId::Capsule,
    StructureId::Effusion,
    StructureId::CartilageGlenohumeral,
];

impl StructureId {
    /// Structures a joint's detector may emit. Empty for joints without a pipeline.
    pub fn vocabulary(joint: JointId) -> &'static [StructureId] {
        match joint {
            JointId::Knee => KNEE_VOCABULARY,
            JointId::Shoulder => SHOULDER_VOCABULARY,
            JointId::Hip => &[],
        }
    }

    pub fn family(self) -> StructureFamily {
        use StructureId::*;
        match self {
            Acl | Pcl | Mcl | Lcl => StructureFamily::Ligament,
            PatellarTendon | QuadricepsTendon | Supraspinatus | Infraspinatus | Subscapularis
            | TeresMinor | BicepsTendon => StructureFamily::Tendon,
            MeniscusMedial | MeniscusLateral => StructureFamily::Meniscus,
            LabrumSuperior | LabrumAnterior | LabrumPosterior => StructureFamily::Labrum,
            LateralFemoralCondyle | MedialFemoralCondyle | LateralTibialPlateau
            | MedialTibialPlateau | Patella | HumeralHead | Glenoid => StructureFamily::Bone,
            Subacromial | AcJoint => StructureFamily::JointSpace,
            Effusion | BakerCyst => StructureFamily::Fluid,
            CartilagePatellofemoral | CartilageMedial | CartilageLateral
            | CartilageGlenohumeral => StructureFamily::Cartilage,
            Capsule => StructureFamily::Capsule,
        }
    }

    /// Stable identifier used in record ids and JSON.
    pub fn as_str(self) -> &'static str {
        use StructureId::*;
        match self {
            Acl => "acl",
            Pcl => "pcl",
            Mcl => "mcl",
            Lcl => "lcl",
            MeniscusMedial => "meniscus_medial",
            MeniscusLateral => "meniscus_lateral",
            PatellarTendon => "patellar_tendon",
            QuadricepsTendon => "quadriceps_tendon",
            CartilagePatellofemoral => "cartilage_patellofemoral",
            CartilageMedial => "cartilage_medial",
            CartilageLateral => "cartilage_lateral",
            LateralFemoralCondyle => "lateral_femoral_condyle",
            MedialFemoralCondyle => "medial_femoral_condyle",
            LateralTibialPlateau => "lateral_tibial_plateau",
            MedialTibialPlateau => "medial_tibial_plateau",
            Patella => "patella",
            BakerCyst => "baker_cyst",
            Effusion => "effusion",
            Supraspinatus => "supraspinatus",
            Infraspinatus => "infraspinatus",
            Subscapularis => "subscapularis",
            TeresMinor => "teres_minor",
            BicepsTendon => "biceps_tendon",
            LabrumSuperior => "labrum_superior",
            LabrumAnterior => "labrum_anterior",
            LabrumPosterior => "labrum_posterior",
            Subacromial => "subacromial",
            AcJoint => "ac_joint",
            HumeralHead => "humeral_head",
            Glenoid => "glenoid",
            Capsule => "capsule",
            CartilageGlenohumeral => "cartilage_glenohumeral",
        }
    }

    /// Human-readable structure name.
    pub fn display_name(self) -> &'static str {
        use StructureId::*;
        match self {
            Acl => "Anterior Cruciate Ligament (ACL)",
            Pcl => "Posterior Cruciate Ligament (PCL)",
            Mcl => "Medial Collateral Ligament (MCL)",
            Lcl => "Lateral Collateral Ligament (LCL)",
            MeniscusMedial => "Medial Meniscus",
            MeniscusLateral => "Lateral Meniscus",
            PatellarTendon => "Patellar Tendon",
            QuadricepsTendon => "Quadriceps Tendon",
            CartilagePatellofemoral => "Patellofemoral Cartilage",
            CartilageMedial => "Medial Compartment Cartilage",
            CartilageLateral => "Lateral Compartment Cartilage",
            LateralFemoralCondyle => "Lateral Femoral Condyle",
            MedialFemoralCondyle => "Medial Femoral Condyle",
            LateralTibialPlateau => "Lateral Tibial Plateau",
            MedialTibialPlateau => "Medial Tibial Plateau",
            Patella => "Patella (Kneecap)",
            BakerCyst => "Baker's Cyst",
            Effusion => "Joint Effusion",
            Supraspinatus => "Supraspinatus Tendon",
            Infraspinatus => "Infraspinatus Tendon",
            Subscapularis => "Subscapularis Tendon",
            TeresMinor => "Teres Minor Tendon",
            BicepsTendon => "Long Head of Biceps Tendon",
            LabrumSuperior => "Superior Labrum",
            LabrumAnterior => "Anterior Labrum",
            LabrumPosterior => "Posterior Labrum",
            Subacromial => "Subacromial Bursa",
            AcJoint => "Acromioclavicular (AC) Joint",
            HumeralHead => "Humeral Head",
            Glenoid => "Glenoid",
            Capsule => "Joint Capsule",
            CartilageGlenohumeral => "Glenohumeral Cartilage",
        }
    }
}

impl std::fmt::Display for StructureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
