use std::io;
use std::path::PathBuf;

use readiness_dialoguer_wizard::DialoguerError;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("configuration error")]
    Config(#[from] ConfigError),

    #[error("failed to initialise logging")]
    Telemetry(#[from] TelemetryError),

    #[error("interactive prompt failed")]
    Prompt(#[from] DialoguerError),

    #[error("assessment failed")]
    Assessment(#[from] readiness::AssessmentError),

    #[error("failed to read answers from {}", path.display())]
    ReadAnswers {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("answers file {} is not a JSON object of answer tokens", path.display())]
    ParseAnswers {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write report to {}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize result")]
    Json(#[from] serde_json::Error),
}
