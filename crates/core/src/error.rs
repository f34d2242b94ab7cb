use imprex_types::JointId;

/// Failures surfaced to callers of the extraction engine.
///
/// Unmapped structures are deliberately absent: they are recovered by the content mapper's
/// fallback template and only logged.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("could not identify joint type")]
    UnidentifiableJoint,
    #[error("joint '{0}' is recognised but not yet supported")]
    UnsupportedJoint(JointId),
    #[error("no findings could be extracted; check that the text contains the impression section")]
    NoFindingsExtracted,
}

impl ReportError {
    /// True for conditions the user can fix by supplying different text.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            ReportError::InvalidInput(_)
                | ReportError::UnidentifiableJoint
                | ReportError::NoFindingsExtracted
        )
    }
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_joint_is_not_user_correctable() {
        assert!(!ReportError::UnsupportedJoint(JointId::Hip).is_user_correctable());
        assert!(ReportError::UnidentifiableJoint.is_user_correctable());
        assert!(ReportError::NoFindingsExtracted.is_user_correctable());
    }

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            ReportError::UnidentifiableJoint.to_string(),
            "could not identify joint type"
        );
        assert!(ReportError::UnsupportedJoint(JointId::Hip)
            .to_string()
            .contains("hip"));
    }
}
