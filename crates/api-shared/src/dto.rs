//! Request and response bodies.
//!
//! Field names are camelCase on the wire. Joint names travel as plain strings so that an
//! unknown name can be rejected with a readable message instead of a deserialisation error.

use chrono::{DateTime, Utc};
use imprex_content::PresentationRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DetectJointReq {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DetectJointRes {
    /// `knee` or `shoulder`; `null` when no joint could be identified.
    pub joint: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyseReq {
    pub text: String,
    /// Forces the joint instead of detecting it.
    #[serde(default)]
    pub joint: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyseRes {
    pub analysis_id: Uuid,
    pub analysed_at: DateTime<Utc>,
    pub joint: String,
    #[schema(value_type = Vec<Object>)]
    pub findings: Vec<PresentationRecord>,
    pub unmapped_structures: Vec<String>,
}

impl AnalyseRes {
    /// Wrap analysis output in a fresh envelope (new id, current time).
    pub fn new(
        joint: impl Into<String>,
        findings: Vec<PresentationRecord>,
        unmapped_structures: Vec<String>,
    ) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            analysed_at: Utc::now(),
            joint: joint.into(),
            findings,
            unmapped_structures,
        }
    }
}
