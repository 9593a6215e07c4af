use std::fmt::Display;

use serde::Serialize;

/// The four pipeline operations, used to tag errors with the stage that raised them.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Discover,
    Plan,
    Apply,
    Deploy,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Discover => "discover",
                Self::Plan => "plan",
                Self::Apply => "apply",
                Self::Deploy => "deploy",
            }
        )
    }
}

/// Progress of a single pipeline run.
///
/// `Idle → Discovered → Planned → Applied → Deployed`. Ordering follows the
/// pipeline so `state >= SessionState::Discovered` reads as "discovery has run".
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    #[default]
    Idle,
    Discovered,
    Planned,
    Applied,
    Deployed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Stage::Discover, "discover")]
    #[case(Stage::Plan, "plan")]
    #[case(Stage::Apply, "apply")]
    #[case(Stage::Deploy, "deploy")]
    fn test_stage_display(#[case] stage: Stage, #[case] expected: &str) {
        assert_eq!(stage.to_string(), expected);
    }

    #[test]
    fn test_session_state_order() {
        assert!(SessionState::Idle < SessionState::Discovered);
        assert!(SessionState::Discovered < SessionState::Planned);
        assert!(SessionState::Planned < SessionState::Applied);
        assert!(SessionState::Applied < SessionState::Deployed);
        assert_eq!(SessionState::default(), SessionState::Idle);
    }
}
