mod batch;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use imprex_core::config::max_report_chars_from_env_value;
use imprex_core::constants::MAX_REPORT_CHARS_ENV;
use imprex_core::{CoreConfig, ReportService};
use imprex_types::JointId;
use output::{render, OutputFormat};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "imprex")]
#[command(about = "Radiology impression explainer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect which joint a report describes
    Joint {
        /// Report file, or `-` for stdin
        input: PathBuf,
    },
    /// Analyse one report into presentation records
    Analyse {
        /// Report file, or `-` for stdin
        input: PathBuf,
        /// Force the joint instead of detecting it (knee, shoulder, hip)
        #[arg(long)]
        joint: Option<JointId>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Analyse a YAML list of `{ id, text, joint? }` reports in parallel
    Batch {
        /// YAML batch file
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read report from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input)
        .with_context(|| format!("failed to read report {}", input.display()))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("imprex_core=warn".parse()?)
                .add_directive("imprex_content=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let max_report_chars =
        max_report_chars_from_env_value(std::env::var(MAX_REPORT_CHARS_ENV).ok())?;
    let service = ReportService::new(Arc::new(CoreConfig::new(max_report_chars)?));

    match cli.command {
        Commands::Joint { input } => {
            let text = read_input(&input)?;
            match service.detect(&text) {
                Ok(joint) => println!("{joint}"),
                Err(imprex_core::ReportError::UnidentifiableJoint) => println!("unknown"),
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Analyse {
            input,
            joint,
            format,
        } => {
            let text = read_input(&input)?;
            let analysis = service.analyse(&text, joint)?;
            println!("{}", render(&analysis, format)?);
        }
        Commands::Batch { file, format } => {
            let entries = batch::load_batch(&file)?;
            let outcomes = batch::run_batch(&service, &entries);
            println!("{}", render(&outcomes, format)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyse_args_parse_joint_and_format() {
        let cli = Cli::try_parse_from([
            "imprex", "analyse", "--joint", "shoulder", "--format", "yaml", "report.txt",
        ])
        .expect("parse");
        match cli.command {
            Commands::Analyse { joint, format, .. } => {
                assert_eq!(joint, Some(JointId::Shoulder));
                assert_eq!(format, OutputFormat::Yaml);
            }
            _ => panic!("expected analyse"),
        }
    }

    #[test]
    fn test_unknown_joint_argument_is_rejected() {
        assert!(Cli::try_parse_from(["imprex", "analyse", "--joint", "elbow", "r.txt"]).is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "Complete ACL tear.").expect("write");
        assert_eq!(read_input(file.path()).expect("read"), "Complete ACL tear.");
    }
}
