use apibump_core::DeployCommand;
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct DeployOptions {
    /// Deploy command line, run from the project root
    #[arg(
        long,
        value_name = "CMD",
        default_value = "sfdx force:source:push",
        value_parser = parse_deploy_command
    )]
    pub deploy_command: DeployCommand,

    /// Stop the deploy command after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl DeployOptions {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

fn parse_deploy_command(line: &str) -> Result<DeployCommand, String> {
    DeployCommand::parse(line).ok_or_else(|| "deploy command must not be empty".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deploy_command() {
        let command = parse_deploy_command("sf project deploy start").unwrap();
        assert_eq!(command.program(), "sf");
        assert!(parse_deploy_command("").is_err());
    }
}
