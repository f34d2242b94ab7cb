//! # Imprex Content
//!
//! Clinical content library and the final pipeline stage: turning deduplicated findings into
//! [`PresentationRecord`]s with a severity score.
//!
//! Templates are static data keyed by structure; nothing here does I/O.

mod common;
mod knee;
mod mapper;
mod record;
pub mod score;
mod shoulder;
pub mod template;

pub use mapper::{map_finding, map_findings, ContentLibrary};
pub use record::PresentationRecord;
pub use score::severity_score;
pub use template::{
    CameraHint, ContentTemplate, Description, SelfAssessmentQuestion, SpecialistPerspective,
    TreatmentCategory, TreatmentOption,
};
