//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into [`ReportService`].
//! Request handling never reads process-wide environment variables, which keeps behaviour
//! consistent across multi-threaded runtimes and test harnesses.
//!
//! [`ReportService`]: crate::ReportService

use crate::constants::DEFAULT_MAX_REPORT_CHARS;
use crate::{ReportError, ReportResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    max_report_chars: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidInput` if `max_report_chars` is zero.
    pub fn new(max_report_chars: usize) -> ReportResult<Self> {
        if max_report_chars == 0 {
            return Err(ReportError::InvalidInput(
                "max_report_chars must be greater than zero".into(),
            ));
        }

        Ok(Self { max_report_chars })
    }

    pub fn max_report_chars(&self) -> usize {
        self.max_report_chars
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_report_chars: DEFAULT_MAX_REPORT_CHARS,
        }
    }
}

/// Parse the maximum report length from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_MAX_REPORT_CHARS`].
///
/// # Errors
///
/// Returns `ReportError::InvalidInput` if the value is not a positive integer.
pub fn max_report_chars_from_env_value(value: Option<String>) -> ReportResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(DEFAULT_MAX_REPORT_CHARS);
    };

    match value.parse::<usize>() {
        Ok(0) | Err(_) => Err(ReportError::InvalidInput(format!(
            "max report length must be a positive integer, got '{value}'"
        ))),
        Ok(n) => Ok(n),
    }
}
