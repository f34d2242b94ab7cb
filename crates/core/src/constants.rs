//! Constants used throughout the imprex core crate.

/// Default upper bound on report length, in characters.
pub const DEFAULT_MAX_REPORT_CHARS: usize = 20_000;

/// Environment variable that overrides [`DEFAULT_MAX_REPORT_CHARS`].
pub const MAX_REPORT_CHARS_ENV: &str = "IMPREX_MAX_REPORT_CHARS";

/// Sentence and line splitting only keep pieces longer than this many characters.
pub const MIN_SPLIT_UNIT_CHARS: usize = 10;

/// Label of the "Also:" suffix appended when duplicate findings are merged.
pub const MERGED_DETAIL_PREFIX: &str = "Also:";
