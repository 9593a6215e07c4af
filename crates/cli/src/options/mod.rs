mod deploy_options;
mod format_options;
mod project_options;

pub use deploy_options::DeployOptions;
pub use format_options::FormatOptions;
pub use project_options::ProjectOptions;
