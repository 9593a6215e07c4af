use anyhow::Result;
use apibump_core::{
    ApplyResult, ChangeRecord, CommandExecutor, DeployOutcome, FileInventory, ProcessExecutor,
};
use apibump_utils::Session;
use serde::Serialize;

use crate::{
    commands::deploy::cancel_on_ctrl_c,
    context::open_session,
    options::{DeployOptions, ProjectOptions},
    prompter::{InquirePrompter, Prompter},
    render::{print_changes, print_inventory, print_outcome, print_results},
};

/// Options for the full discover → plan → apply → deploy run
#[derive(Debug)]
pub struct PipelineArgs {
    pub project: ProjectOptions,
    pub api_version: Option<String>,
    pub yes: bool,
    pub dry_run: bool,
    pub deploy: bool,
    pub deploy_options: DeployOptions,
}

#[derive(Serialize)]
struct PipelineReport<'a> {
    inventory: &'a FileInventory,
    changes: &'a [ChangeRecord],
    results: &'a [ApplyResult],
    deploy: Option<&'a DeployOutcome>,
}

pub async fn handle_pipeline(args: &PipelineArgs) -> Result<()> {
    handle_pipeline_with(args, &InquirePrompter, &ProcessExecutor).await
}

pub async fn handle_pipeline_with(
    args: &PipelineArgs,
    prompter: &dyn Prompter,
    executor: &dyn CommandExecutor,
) -> Result<()> {
    let format = &args.project.format;
    let mut session = open_session(args.project.path.as_deref())?;
    if format.is_stdout() {
        println!("Project: {}", session.root().path().display());
    }

    session.discover().await?;
    if format.is_stdout() {
        print_inventory(session.inventory(), false);
    }

    let api_version = match &args.api_version {
        Some(version) => version.trim().to_string(),
        None => prompter.text("Target API version:")?.trim().to_string(),
    };
    session.plan(&api_version).await?;
    if format.is_stdout() {
        print_changes(session.changes());
    }

    if args.dry_run {
        if format.is_stdout() {
            println!("Dry run, no files will be modified");
        }
        return finish(args, &session, None);
    }

    if !session.changes().is_empty() {
        let confirm = args.yes
            || prompter.confirm(&format!(
                "Update the API version of {} files to {api_version}?",
                session.changes().len()
            ))?;
        if !confirm {
            if format.is_stdout() {
                println!("Update cancelled");
            }
            return finish(args, &session, None);
        }
        session.apply().await?;
        if format.is_stdout() {
            print_results(session.results());
        }
    }

    let command = &args.deploy_options.deploy_command;
    let deploy = match (args.deploy, args.yes) {
        (true, true) => true,
        (false, true) => false,
        _ => prompter.confirm(&format!("Deploy with `{command}`?"))?,
    };
    if !deploy {
        return finish(args, &session, None);
    }

    if format.is_stdout() {
        println!("Deploying with `{command}`...");
    }
    let outcome = session
        .deploy(
            executor,
            command,
            args.deploy_options.timeout(),
            cancel_on_ctrl_c(),
        )
        .await?;
    if format.is_stdout() {
        print_outcome(&outcome);
    }
    finish(args, &session, Some(&outcome))
}

/// Emit the JSON report and map failures to an error exit
fn finish(args: &PipelineArgs, session: &Session, outcome: Option<&DeployOutcome>) -> Result<()> {
    args.project.format.print_json(&PipelineReport {
        inventory: session.inventory(),
        changes: session.changes(),
        results: session.results(),
        deploy: outcome,
    })?;

    let failed = session
        .results()
        .iter()
        .filter(|result| !result.success())
        .count();
    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} files could not be updated",
            session.results().len()
        );
    }
    if let Some(outcome) = outcome.filter(|outcome| !outcome.success()) {
        anyhow::bail!("Deploy failed with exit code {}", outcome.exit_code());
    }
    Ok(())
}
