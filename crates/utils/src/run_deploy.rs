use apibump_core::{CommandExecutor, DeployCommand, DeployOutcome, Error, ProjectRoot, Result};
use std::{future::Future, time::Duration};

/// Run the deploy command in the project root and wait for it to exit.
///
/// # Errors
/// Returns [`Error::Launch`] when the command cannot be started. A command that
/// exits non-zero yields an unsuccessful [`DeployOutcome`], not an error.
pub async fn run_deploy(
    root: &ProjectRoot,
    executor: &dyn CommandExecutor,
    command: &DeployCommand,
) -> Result<DeployOutcome> {
    tracing::info!(command = %command, root = %root.path().display(), "starting deploy");
    let outcome = DeployOutcome::from(executor.execute(command, root.path()).await?);
    tracing::info!(
        exit_code = outcome.exit_code(),
        success = outcome.success(),
        "deploy finished"
    );
    Ok(outcome)
}

/// [`run_deploy`] bounded by an optional timeout and a cancellation signal.
///
/// Whichever of `timeout` or `cancel` completes first drops the running
/// command, which terminates the child process.
///
/// # Errors
/// Everything [`run_deploy`] returns, plus [`Error::DeployTimedOut`] and
/// [`Error::DeployCancelled`].
pub async fn run_deploy_until<F>(
    root: &ProjectRoot,
    executor: &dyn CommandExecutor,
    command: &DeployCommand,
    timeout: Option<Duration>,
    cancel: F,
) -> Result<DeployOutcome>
where
    F: Future<Output = ()>,
{
    let deadline = async {
        match timeout {
            Some(after) => {
                tokio::time::sleep(after).await;
                after
            }
            None => std::future::pending().await,
        }
    };

    tokio::select! {
        outcome = run_deploy(root, executor, command) => outcome,
        after = deadline => {
            tracing::warn!(after_secs = after.as_secs(), "deploy timed out");
            Err(Error::DeployTimedOut { after })
        }
        () = cancel => {
            tracing::warn!("deploy cancelled");
            Err(Error::DeployCancelled)
        }
    }
}
