mod apply_changes;
mod discover;
mod get_relative_path;
mod plan_changes;
mod run_deploy;
mod session;
mod write_atomic;

#[cfg(test)]
mod test_support;

pub use apply_changes::apply_changes;
pub use discover::{categorize, discover};
pub use get_relative_path::get_relative_path;
pub use plan_changes::plan_changes;
pub use run_deploy::{run_deploy, run_deploy_until};
pub use session::Session;
pub use write_atomic::write_atomic;
