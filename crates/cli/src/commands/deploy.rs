use anyhow::Result;
use apibump_core::{CommandExecutor, DeployOutcome, ProcessExecutor};
use clap::Args;

use crate::{
    context::open_session,
    options::{DeployOptions, FormatOptions, ProjectOptions},
    prompter::{InquirePrompter, Prompter},
    render::print_outcome,
};

#[derive(Args, Debug)]
#[command(about = "Run the deploy command from the project root")]
pub struct DeployArgs {
    #[command(flatten)]
    pub project: ProjectOptions,

    #[arg(short, long)]
    pub yes: bool,

    #[command(flatten)]
    pub deploy: DeployOptions,
}

/// Deploy the project
pub async fn handle_deploy(args: &DeployArgs) -> Result<()> {
    handle_deploy_with(args, &InquirePrompter, &ProcessExecutor).await
}

pub async fn handle_deploy_with(
    args: &DeployArgs,
    prompter: &dyn Prompter,
    executor: &dyn CommandExecutor,
) -> Result<()> {
    let format = &args.project.format;
    let command = &args.deploy.deploy_command;
    let mut session = open_session(args.project.path.as_deref())?;

    let confirm = args.yes
        || prompter.confirm(&format!(
            "Deploy {} with `{command}`?",
            session.root().path().display()
        ))?;
    if !confirm {
        format.print("Deploy cancelled", "{}");
        return Ok(());
    }

    if format.is_stdout() {
        println!("Deploying with `{command}`...");
    }
    let outcome = session
        .deploy(executor, command, args.deploy.timeout(), cancel_on_ctrl_c())
        .await?;
    report_outcome(format, &outcome)
}

/// Print the outcome and turn a failed deploy into an error for the exit status
pub(crate) fn report_outcome(format: &FormatOptions, outcome: &DeployOutcome) -> Result<()> {
    if format.is_stdout() {
        print_outcome(outcome);
    } else {
        format.print_json(outcome)?;
    }
    if !outcome.success() {
        anyhow::bail!("Deploy failed with exit code {}", outcome.exit_code());
    }
    Ok(())
}

/// Resolves on Ctrl+C. Never resolves if the signal handler cannot be installed.
pub(crate) async fn cancel_on_ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
