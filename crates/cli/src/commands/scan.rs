use anyhow::Result;
use clap::Args;

use crate::{context::open_session, options::ProjectOptions, render::print_inventory};

#[derive(Args, Debug)]
#[command(about = "List Apex classes, triggers and LWC scripts in a project")]
pub struct ScanArgs {
    #[command(flatten)]
    pub project: ProjectOptions,

    /// Print every discovered file, not just the counts
    #[arg(short, long)]
    pub list: bool,
}

/// Discover project files
pub async fn handle_scan(args: &ScanArgs) -> Result<()> {
    let mut session = open_session(args.project.path.as_deref())?;
    let inventory = session.discover().await?;
    if args.project.format.is_stdout() {
        print_inventory(inventory, args.list);
    } else {
        args.project.format.print_json(inventory)?;
    }
    Ok(())
}
