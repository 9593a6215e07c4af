use std::{path::PathBuf, time::Duration};

use thiserror::Error;

use crate::{FileCategory, Stage};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures raised by the pipeline stages.
///
/// A deploy command that runs and exits non-zero is not an error; it is
/// reported through [`crate::DeployOutcome`].
#[derive(Debug, Error)]
pub enum Error {
    /// The project root is missing, not a directory, or unreadable.
    #[error("project root {} is not usable: {reason}", .path.display())]
    Path { path: PathBuf, reason: String },

    #[error("{stage}: failed to access {}: {source}", .path.display())]
    Io {
        stage: Stage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The deploy executable could not be spawned at all.
    #[error("deploy: failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("plan: target API version must not be empty")]
    InvalidVersion,

    #[error("apply: no planned changes to apply")]
    NothingToApply,

    #[error("apply: {} no longer contains an apiVersion declaration", .path.display())]
    MissingDeclaration { path: PathBuf },

    #[error("no version detector registered for {category:?} files")]
    UnsupportedCategory { category: FileCategory },

    #[error("{stage}: {required} must run first")]
    OutOfOrder { stage: Stage, required: Stage },

    #[error("deploy: command did not finish within {}s", .after.as_secs())]
    DeployTimedOut { after: Duration },

    #[error("deploy: cancelled")]
    DeployCancelled,
}

impl Error {
    pub fn io(stage: Stage, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            stage,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_io_error_names_stage_and_path() {
        let err = Error::io(
            Stage::Plan,
            "classes/Foo.cls",
            std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.starts_with("plan:"));
        assert!(message.contains("classes/Foo.cls"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_out_of_order_message() {
        let err = Error::OutOfOrder {
            stage: Stage::Apply,
            required: Stage::Plan,
        };
        assert_eq!(err.to_string(), "apply: plan must run first");
    }

    #[test]
    fn test_timeout_message() {
        let err = Error::DeployTimedOut {
            after: Duration::from_secs(30),
        };
        assert_eq!(err.to_string(), "deploy: command did not finish within 30s");
    }
}
