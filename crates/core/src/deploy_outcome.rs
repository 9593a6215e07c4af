use serde::Serialize;

use crate::ExecOutput;

/// Exit code reported when the deploy process was terminated by a signal.
pub const SIGNAL_EXIT_CODE: i32 = -1;

/// Result of a deploy command that was launched and ran to completion.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeployOutcome {
    success: bool,
    exit_code: i32,
    stdout_text: String,
    stderr_text: String,
}

impl DeployOutcome {
    #[must_use]
    pub fn new(exit_code: i32, stdout_text: String, stderr_text: String) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
            stdout_text,
            stderr_text,
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout_text(&self) -> &str {
        &self.stdout_text
    }

    #[must_use]
    pub fn stderr_text(&self) -> &str {
        &self.stderr_text
    }
}

impl From<ExecOutput> for DeployOutcome {
    fn from(output: ExecOutput) -> Self {
        Self::new(
            output.exit_code.unwrap_or(SIGNAL_EXIT_CODE),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    }
}
