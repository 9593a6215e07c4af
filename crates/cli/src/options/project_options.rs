use clap::Args;
use std::path::PathBuf;

use crate::options::FormatOptions;

/// Project selection and output format shared by every command
#[derive(Args, Debug, Clone)]
pub struct ProjectOptions {
    /// Project root directory (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}
