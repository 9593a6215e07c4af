pub mod apply_result;
pub mod change_record;
pub mod deploy_outcome;
pub mod error;
pub mod executor;
pub mod file_category;
pub mod inventory;
pub mod project_root;
pub mod stage;
pub mod version_detector;

// Re-export types for convenience
pub use apply_result::ApplyResult;
pub use change_record::ChangeRecord;
pub use deploy_outcome::DeployOutcome;
pub use error::{Error, Result};
pub use executor::{CommandExecutor, DeployCommand, ExecOutput, ProcessExecutor, resolve_program};
pub use file_category::FileCategory;
pub use inventory::FileInventory;
pub use project_root::ProjectRoot;
pub use stage::{SessionState, Stage};
pub use version_detector::{DetectorSet, VersionDetector};
