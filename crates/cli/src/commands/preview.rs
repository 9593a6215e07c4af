use anyhow::Result;
use clap::Args;

use crate::{
    context::open_session,
    options::ProjectOptions,
    render::{print_changes, print_inventory},
};

#[derive(Args, Debug)]
#[command(about = "Show which files would change for a target API version")]
pub struct PreviewArgs {
    #[command(flatten)]
    pub project: ProjectOptions,

    /// Target API version, e.g. 60.0
    #[arg(short, long)]
    pub api_version: String,
}

/// Discover and plan without touching any file
pub async fn handle_preview(args: &PreviewArgs) -> Result<()> {
    let mut session = open_session(args.project.path.as_deref())?;
    session.discover().await?;
    if args.project.format.is_stdout() {
        print_inventory(session.inventory(), false);
    }
    let changes = session.plan(args.api_version.trim()).await?;
    if args.project.format.is_stdout() {
        print_changes(changes);
    } else {
        args.project.format.print_json(changes)?;
    }
    Ok(())
}
