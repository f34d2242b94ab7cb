//! # Imprex Core
//!
//! Finding-extraction engine for radiology impressions.
//!
//! The engine turns free-text impression sections into structured findings:
//! - joint classification by weighted vocabulary scoring
//! - segmentation into finding units (numbered, bulleted, sentences, lines)
//! - normal-finding suppression and negation scrubbing
//! - anatomical structure detection, including "X with associated Y" splitting
//! - pathology labelling, location extraction and severity classification
//! - per-structure de-duplication
//!
//! Content mapping lives in `imprex-content`; this crate calls it as the final stage.
//!
//! **No transport concerns**: HTTP and CLI front ends belong in `api-rest` and `cli`.

mod patterns;

pub mod config;
pub mod constants;
pub mod dedup;
pub mod error;
pub mod joint;
pub mod normal;
pub mod pathology;
pub mod pipeline;
pub mod segment;
pub mod service;
pub mod severity;
pub mod structures;

pub use config::CoreConfig;
pub use error::{ReportError, ReportResult};
pub use pipeline::{detect_joint, extract_findings, parse_report};
pub use service::{Analysis, ReportService};
