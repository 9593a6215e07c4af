use anyhow::Result;

use clap::{Parser, Subcommand};

use crate::{
    commands::{
        ApplyArgs, DeployArgs, PipelineArgs, PreviewArgs, ScanArgs, handle_apply, handle_deploy,
        handle_pipeline, handle_preview, handle_scan,
    },
    options::{DeployOptions, ProjectOptions},
};
pub mod commands;
pub mod context;
pub mod logging;
pub mod options;
pub mod prompter;
mod render;

pub use prompter::UserCancelled;

#[derive(Parser, Debug)]
#[command(
    name = "apibump",
    author,
    version,
    about = "Batch-update the apiVersion of Salesforce Apex sources and deploy the result",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    project: ProjectOptions,

    /// Target API version, e.g. 60.0 (prompted for when omitted)
    #[arg(short, long)]
    api_version: Option<String>,

    #[arg(short, long, default_value = "false")]
    yes: bool,

    #[arg(short, long, default_value = "false")]
    dry_run: bool,

    /// Deploy after applying the update
    #[arg(long, default_value = "false")]
    deploy: bool,

    #[command(flatten)]
    deploy_options: DeployOptions,

    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Scan(ScanArgs),
    Preview(PreviewArgs),
    Apply(ApplyArgs),
    Deploy(DeployArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    logging::init_tracing(cli.verbose);
    if let Some(command) = cli.command {
        match command {
            Commands::Scan(args) => handle_scan(&args).await?,
            Commands::Preview(args) => handle_preview(&args).await?,
            Commands::Apply(args) => handle_apply(&args).await?,
            Commands::Deploy(args) => handle_deploy(&args).await?,
        }
    } else {
        handle_pipeline(&PipelineArgs {
            project: cli.project,
            api_version: cli.api_version,
            yes: cli.yes,
            dry_run: cli.dry_run,
            deploy: cli.deploy,
            deploy_options: cli.deploy_options,
        })
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FormatOptions;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_scan() {
        let cli = Cli::parse_from(["apibump", "scan", "--path", "project", "--list"]);
        match cli.command {
            Some(Commands::Scan(args)) => {
                assert!(args.list);
                assert_eq!(args.project.path, Some(PathBuf::from("project")));
            }
            other => panic!("Expected Scan, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parsing_preview() {
        let cli = Cli::parse_from(["apibump", "preview", "--api-version", "60.0"]);
        match cli.command {
            Some(Commands::Preview(args)) => assert_eq!(args.api_version, "60.0"),
            other => panic!("Expected Preview, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parsing_apply() {
        let cli = Cli::parse_from(["apibump", "apply", "-a", "61.0", "--yes", "--format", "json"]);
        match cli.command {
            Some(Commands::Apply(args)) => {
                assert_eq!(args.api_version, "61.0");
                assert!(args.yes);
                assert!(!args.dry_run);
                assert!(matches!(args.project.format, FormatOptions::Json));
            }
            other => panic!("Expected Apply, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parsing_preview_requires_version() {
        assert!(Cli::try_parse_from(["apibump", "preview"]).is_err());
    }

    #[test]
    fn test_cli_parsing_deploy() {
        let cli = Cli::parse_from([
            "apibump",
            "deploy",
            "--deploy-command",
            "sf project deploy start",
            "--timeout",
            "600",
        ]);
        match cli.command {
            Some(Commands::Deploy(args)) => {
                assert_eq!(args.deploy.deploy_command.program(), "sf");
                assert_eq!(
                    args.deploy.timeout(),
                    Some(std::time::Duration::from_secs(600))
                );
            }
            other => panic!("Expected Deploy, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parsing_default_with_options() {
        let cli = Cli::parse_from([
            "apibump",
            "--api-version",
            "60.0",
            "--yes",
            "--deploy",
            "--verbose",
        ]);
        assert!(cli.command.is_none());
        assert_eq!(cli.api_version, Some("60.0".to_string()));
        assert!(cli.yes);
        assert!(cli.deploy);
        assert!(cli.verbose);
        assert_eq!(cli.deploy_options.deploy_command.to_string(), "sfdx force:source:push");
        assert_eq!(cli.deploy_options.timeout(), None);
        assert!(matches!(cli.project.format, FormatOptions::Stdout));
    }

    #[test]
    fn test_cli_parsing_rejects_blank_deploy_command() {
        assert!(Cli::try_parse_from(["apibump", "deploy", "--deploy-command", " "]).is_err());
    }
}
