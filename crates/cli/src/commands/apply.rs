use anyhow::Result;
use apibump_core::{ApplyResult, ChangeRecord};
use apibump_utils::Session;
use clap::Args;
use serde::Serialize;

use crate::{
    context::open_session,
    options::{FormatOptions, ProjectOptions},
    prompter::{InquirePrompter, Prompter},
    render::{print_changes, print_results},
};

#[derive(Args, Debug)]
#[command(about = "Rewrite the apiVersion declaration of every outdated file")]
pub struct ApplyArgs {
    #[command(flatten)]
    pub project: ProjectOptions,

    /// Target API version, e.g. 60.0
    #[arg(short, long)]
    pub api_version: String,

    #[arg(short, long)]
    pub yes: bool,

    #[arg(short, long)]
    pub dry_run: bool,
}

#[derive(Serialize)]
struct ApplyReport<'a> {
    changes: &'a [ChangeRecord],
    results: &'a [ApplyResult],
}

impl<'a> ApplyReport<'a> {
    fn from_session(session: &'a Session) -> Self {
        Self {
            changes: session.changes(),
            results: session.results(),
        }
    }
}

/// Plan and apply the version update
pub async fn handle_apply(args: &ApplyArgs) -> Result<()> {
    handle_apply_with_prompter(args, &InquirePrompter).await
}

pub async fn handle_apply_with_prompter(args: &ApplyArgs, prompter: &dyn Prompter) -> Result<()> {
    let format = &args.project.format;
    let api_version = args.api_version.trim();
    let mut session = open_session(args.project.path.as_deref())?;
    session.discover().await?;
    let count = session.plan(api_version).await?.len();
    if format.is_stdout() {
        print_changes(session.changes());
    }

    if count == 0 {
        return format.print_json(&ApplyReport::from_session(&session));
    }

    if args.dry_run {
        if format.is_stdout() {
            println!("Dry run, no files will be modified");
        }
        return format.print_json(&ApplyReport::from_session(&session));
    }

    let confirm = args.yes
        || prompter.confirm(&format!(
            "Update the API version of {count} files to {api_version}?"
        ))?;
    if !confirm {
        if format.is_stdout() {
            println!("Update cancelled");
        }
        return format.print_json(&ApplyReport::from_session(&session));
    }

    session.apply().await?;
    let failed = report_results(format, &session)?;
    if failed > 0 {
        anyhow::bail!("{failed} of {count} files could not be updated");
    }
    Ok(())
}

fn report_results(format: &FormatOptions, session: &Session) -> Result<usize> {
    if format.is_stdout() {
        return Ok(print_results(session.results()));
    }
    format.print_json(&ApplyReport::from_session(session))?;
    Ok(session
        .results()
        .iter()
        .filter(|result| !result.success())
        .count())
}
