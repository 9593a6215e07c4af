use apibump_core::{
    ApplyResult, ChangeRecord, CommandExecutor, DeployCommand, DeployOutcome, DetectorSet, Error,
    FileInventory, ProjectRoot, Result, SessionState, Stage,
};
use std::{future::Future, time::Duration};

use crate::{apply_changes, discover, plan_changes, run_deploy_until};

/// One pipeline run against a single project root.
///
/// Holds the inventory and plan produced by earlier stages so later stages
/// cannot be fed results from another root. Re-running discovery drops any
/// plan and apply results; planning again replaces the previous plan.
#[derive(Debug)]
pub struct Session {
    root: ProjectRoot,
    detectors: DetectorSet,
    state: SessionState,
    inventory: FileInventory,
    target_version: Option<String>,
    changes: Vec<ChangeRecord>,
    results: Vec<ApplyResult>,
}

impl Session {
    #[must_use]
    pub fn new(root: ProjectRoot, detectors: DetectorSet) -> Self {
        Self {
            root,
            detectors,
            state: SessionState::Idle,
            inventory: FileInventory::default(),
            target_version: None,
            changes: Vec::new(),
            results: Vec::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &ProjectRoot {
        &self.root
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn inventory(&self) -> &FileInventory {
        &self.inventory
    }

    #[must_use]
    pub fn target_version(&self) -> Option<&str> {
        self.target_version.as_deref()
    }

    #[must_use]
    pub fn changes(&self) -> &[ChangeRecord] {
        &self.changes
    }

    #[must_use]
    pub fn results(&self) -> &[ApplyResult] {
        &self.results
    }

    /// # Errors
    /// See [`discover`].
    pub async fn discover(&mut self) -> Result<&FileInventory> {
        self.reset(SessionState::Idle);
        self.inventory = discover(&self.root).await?;
        self.state = SessionState::Discovered;
        Ok(&self.inventory)
    }

    /// # Errors
    /// Returns [`Error::OutOfOrder`] before discovery, otherwise see [`plan_changes`].
    pub async fn plan(&mut self, target_version: &str) -> Result<&[ChangeRecord]> {
        if self.state < SessionState::Discovered {
            return Err(Error::OutOfOrder {
                stage: Stage::Plan,
                required: Stage::Discover,
            });
        }
        self.reset(SessionState::Discovered);
        self.changes =
            plan_changes(&self.root, &self.inventory, target_version, &self.detectors).await?;
        self.target_version = Some(target_version.to_string());
        self.state = SessionState::Planned;
        Ok(&self.changes)
    }

    /// # Errors
    /// Returns [`Error::OutOfOrder`] unless the last stage was a plan, and
    /// [`Error::NothingToApply`] when that plan is empty. Per-file failures are
    /// reported in the returned results.
    pub async fn apply(&mut self) -> Result<&[ApplyResult]> {
        if self.state != SessionState::Planned {
            return Err(Error::OutOfOrder {
                stage: Stage::Apply,
                required: Stage::Plan,
            });
        }
        if self.changes.is_empty() {
            return Err(Error::NothingToApply);
        }
        self.results = apply_changes(&self.root, &self.changes, &self.detectors).await;
        self.state = SessionState::Applied;
        Ok(&self.results)
    }

    /// Deploy the project root. Allowed from any state, since earlier stages may be skipped.
    ///
    /// # Errors
    /// See [`run_deploy_until`].
    pub async fn deploy<F>(
        &mut self,
        executor: &dyn CommandExecutor,
        command: &DeployCommand,
        timeout: Option<Duration>,
        cancel: F,
    ) -> Result<DeployOutcome>
    where
        F: Future<Output = ()>,
    {
        let outcome = run_deploy_until(&self.root, executor, command, timeout, cancel).await?;
        self.state = SessionState::Deployed;
        Ok(outcome)
    }

    fn reset(&mut self, state: SessionState) {
        if state < SessionState::Discovered {
            self.inventory = FileInventory::default();
        }
        self.target_version = None;
        self.changes.clear();
        self.results.clear();
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{read_file, sample_project};
    use apibump_apex::apex_detectors;
    use apibump_core::{ExecOutput, FileCategory};
    use async_trait::async_trait;
    use std::path::Path;

    #[derive(Debug)]
    struct SucceedingExecutor;

    #[async_trait]
    impl CommandExecutor for SucceedingExecutor {
        async fn execute(&self, _command: &DeployCommand, _cwd: &Path) -> Result<ExecOutput> {
            Ok(ExecOutput {
                exit_code: Some(0),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_session_full_pipeline() {
        let (temp_dir, root) = sample_project();
        let mut session = Session::new(root, apex_detectors());
        assert_eq!(session.state(), SessionState::Idle);

        let inventory = session.discover().await.unwrap();
        assert_eq!(inventory.count(FileCategory::SourceUnit), 2);
        assert_eq!(session.state(), SessionState::Discovered);

        let changes = session.plan("60.0").await.unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(session.target_version(), Some("60.0"));
        assert_eq!(session.state(), SessionState::Planned);

        let results = session.apply().await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].success());
        assert_eq!(session.state(), SessionState::Applied);
        assert_eq!(
            read_file(session.root(), "force-app/main/default/classes/Foo.cls"),
            "// apiVersion = 60.0\npublic with sharing class Foo {}\n"
        );

        let outcome = session
            .deploy(
                &SucceedingExecutor,
                &DeployCommand::default(),
                None,
                std::future::pending(),
            )
            .await
            .unwrap();
        assert!(outcome.success());
        assert_eq!(session.state(), SessionState::Deployed);

        session.discover().await.unwrap();
        assert!(session.plan("60.0").await.unwrap().is_empty());
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_session_plan_before_discover() {
        let (temp_dir, root) = sample_project();
        let mut session = Session::new(root, apex_detectors());

        let err = session.plan("60.0").await.unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfOrder {
                stage: Stage::Plan,
                required: Stage::Discover
            }
        ));
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_session_apply_requires_fresh_plan() {
        let (temp_dir, root) = sample_project();
        let mut session = Session::new(root, apex_detectors());

        assert!(matches!(
            session.apply().await.unwrap_err(),
            Error::OutOfOrder { stage: Stage::Apply, .. }
        ));

        session.discover().await.unwrap();
        session.plan("60.0").await.unwrap();
        session.apply().await.unwrap();
        assert!(matches!(
            session.apply().await.unwrap_err(),
            Error::OutOfOrder { .. }
        ));

        session.discover().await.unwrap();
        assert!(session.changes().is_empty());
        assert!(session.results().is_empty());
        assert!(matches!(
            session.apply().await.unwrap_err(),
            Error::OutOfOrder { .. }
        ));
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_session_nothing_to_apply() {
        let (temp_dir, root) = sample_project();
        std::fs::write(
            temp_dir
                .path()
                .join("force-app/main/default/triggers/Bar.trigger"),
            "// apiVersion = 58.0\n",
        )
        .unwrap();
        let mut session = Session::new(root, apex_detectors());
        session.discover().await.unwrap();
        assert!(session.plan("58.0").await.unwrap().is_empty());

        let err = session.apply().await.unwrap_err();
        assert!(matches!(err, Error::NothingToApply));
        assert_eq!(session.state(), SessionState::Planned);
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_session_failed_plan_clears_previous_plan() {
        let (temp_dir, root) = sample_project();
        let mut session = Session::new(root, apex_detectors());
        session.discover().await.unwrap();
        session.plan("61.0").await.unwrap();

        assert!(matches!(
            session.plan("").await.unwrap_err(),
            Error::InvalidVersion
        ));
        assert!(session.changes().is_empty());
        assert_eq!(session.target_version(), None);
        assert_eq!(session.state(), SessionState::Discovered);
        temp_dir.close().unwrap();
    }
}
