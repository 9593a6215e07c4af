mod apply;
mod deploy;
mod pipeline;
mod preview;
mod scan;

pub use apply::ApplyArgs;
pub use apply::handle_apply;
pub use apply::handle_apply_with_prompter;
pub use deploy::DeployArgs;
pub use deploy::handle_deploy;
pub use deploy::handle_deploy_with;
pub use pipeline::PipelineArgs;
pub use pipeline::handle_pipeline;
pub use pipeline::handle_pipeline_with;
pub use preview::PreviewArgs;
pub use preview::handle_preview;
pub use scan::ScanArgs;
pub use scan::handle_scan;
