//! Joint identifiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The anatomical region a report describes.
///
/// `Hip` is recognised so that callers can name it, but no detection signature or pipeline
/// exists for it yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointId {
    Knee,
    Shoulder,
    Hip,
}

impl JointId {
    pub const ALL: [JointId; 3] = [JointId::Knee, JointId::Shoulder, JointId::Hip];

    pub fn as_str(self) -> &'static str {
        match self {
            JointId::Knee => "knee",
            JointId::Shoulder => "shoulder",
            JointId::Hip => "hip",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            JointId::Knee => "Knee",
            JointId::Shoulder => "Shoulder",
            JointId::Hip => "Hip",
        }
    }
}

impl std::fmt::Display for JointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a joint name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown joint '{0}' (expected knee, shoulder or hip)")]
pub struct ParseJointError(pub String);

impl FromStr for JointId {
    type Err = ParseJointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "knee" => Ok(JointId::Knee),
            "shoulder" => Ok(JointId::Shoulder),
            "hip" => Ok(JointId::Hip),
            other => Err(ParseJointError(other.to_string())),
        }
    }
}
