//! Rendering command output as JSON or YAML.

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Pretty-printed `value` in `format`.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, OutputError> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        joint: &'static str,
    }

    #[test]
    fn test_render_json_and_yaml() {
        let value = Sample { joint: "knee" };
        let json = render(&value, OutputFormat::Json).expect("json");
        assert!(json.contains("\"joint\": \"knee\""));
        let yaml = render(&value, OutputFormat::Yaml).expect("yaml");
        assert_eq!(yaml.trim(), "joint: knee");
    }
}
