//! Report analysis service.
//!
//! [`ReportService`] is the façade used by the REST and CLI front ends. It validates input
//! against the startup configuration, resolves the joint (explicit hint first, detection
//! second) and runs the pipeline. The pure entry points in [`crate::pipeline`] stay available
//! for callers that want no validation.

use crate::config::CoreConfig;
use crate::dedup::deduplicate;
use crate::pipeline::{detect_joint, extract_findings};
use crate::{ReportError, ReportResult};
use imprex_content::{map_findings, ContentLibrary, PresentationRecord};
use imprex_types::{JointId, NonEmptyText, StructureId};
use serde::Serialize;
use std::sync::Arc;

/// Result of analysing one impression.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub joint: JointId,
    pub records: Vec<PresentationRecord>,
    /// Structures that were detected but fell back to generic content.
    pub unmapped_structures: Vec<StructureId>,
}

#[derive(Clone, Debug)]
pub struct ReportService {
    cfg: Arc<CoreConfig>,
}

impl ReportService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    fn validate(&self, text: &str) -> ReportResult<NonEmptyText> {
        let text = NonEmptyText::new(text)
            .map_err(|_| ReportError::InvalidInput("report text must not be empty".into()))?;

        let limit = self.cfg.max_report_chars();
        if text.char_count() > limit {
            return Err(ReportError::InvalidInput(format!(
                "report text exceeds {limit} characters"
            )));
        }

        Ok(text)
    }

    /// Detect the joint a report describes.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidInput` for empty or oversized text and
    /// `ReportError::UnidentifiableJoint` when no joint scores.
    pub fn detect(&self, text: &str) -> ReportResult<JointId> {
        let text = self.validate(text)?;
        detect_joint(text.as_str()).ok_or(ReportError::UnidentifiableJoint)
    }

    /// Analyse an impression, optionally forcing the joint.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for empty or oversized text
    /// - `UnidentifiableJoint` when no hint is given and detection fails
    /// - `UnsupportedJoint` for joints without a pipeline
    /// - `NoFindingsExtracted` when nothing pathological is recognised
    pub fn analyse(&self, text: &str, joint: Option<JointId>) -> ReportResult<Analysis> {
        let text = self.validate(text)?;

        let joint = match joint {
            Some(joint) => joint,
            None => detect_joint(text.as_str()).ok_or(ReportError::UnidentifiableJoint)?,
        };

        let raw = extract_findings(text.as_str(), joint)?;
        if raw.is_empty() {
            return Err(ReportError::NoFindingsExtracted);
        }

        let deduped = deduplicate(raw);
        let library = ContentLibrary::for_joint(joint);
        let unmapped_structures = library.unmapped(&deduped);
        let records = map_findings(&library, &deduped);

        tracing::info!(
            joint = %joint,
            records = records.len(),
            unmapped = unmapped_structures.len(),
            "analysed report"
        );

        Ok(Analysis {
            joint,
            records,
            unmapped_structures,
        })
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(Arc::new(CoreConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1. Complete tear of the ACL with associated bone bruising of the lateral femoral condyle. 2. Moderate joint effusion.";

    fn service_with_limit(limit: usize) -> ReportService {
        ReportService::new(Arc::new(CoreConfig::new(limit).expect("valid limit")))
    }

    #[test]
    fn test_analyse_detects_joint() {
        let analysis = ReportService::default()
            .analyse(SAMPLE, None)
            .expect("analyse");
        assert_eq!(analysis.joint, JointId::Knee);
        assert_eq!(analysis.records.len(), 3);
        assert!(analysis.unmapped_structures.is_empty());
    }

    #[test]
    fn test_hint_overrides_detection() {
        let err = ReportService::default()
            .analyse(SAMPLE, Some(JointId::Hip))
            .expect_err("hip is not supported");
        assert!(matches!(err, ReportError::UnsupportedJoint(JointId::Hip)));
    }

    #[test]
    fn test_empty_text_is_invalid() {
        let err = ReportService::default()
            .analyse("   \n", None)
            .expect_err("empty");
        assert!(matches!(err, ReportError::InvalidInput(_)));
    }

    #[test]
    fn test_oversized_text_is_invalid() {
        let err = service_with_limit(20)
            .analyse(SAMPLE, None)
            .expect_err("too long");
        assert!(matches!(err, ReportError::InvalidInput(msg) if msg.contains("20")));
    }

    #[test]
    fn test_unknown_joint() {
        let err = ReportService::default()
            .analyse("Recommend clinical correlation.", None)
            .expect_err("no joint vocabulary");
        assert!(matches!(err, ReportError::UnidentifiableJoint));
    }

    #[test]
    fn test_normal_report_has_no_findings() {
        let err = ReportService::default()
            .analyse("The ACL is intact. Menisci are unremarkable.", Some(JointId::Knee))
            .expect_err("normal report");
        assert!(matches!(err, ReportError::NoFindingsExtracted));
    }

    #[test]
    fn test_detect_validates_and_scores() {
        let service = ReportService::default();
        assert_eq!(service.detect(SAMPLE).expect("detect"), JointId::Knee);
        assert!(matches!(
            service.detect("Recommend clinical correlation."),
            Err(ReportError::UnidentifiableJoint)
        ));
    }

    #[test]
    fn test_analysis_serialises_camel_case() {
        let analysis = ReportService::default()
            .analyse(SAMPLE, None)
            .expect("analyse");
        let json = serde_json::to_value(&analysis).expect("serialize");
        assert_eq!(json["joint"], "knee");
        assert!(json["unmappedStructures"].is_array());
        assert_eq!(json["records"][0]["id"], "acl_0");
    }
}
