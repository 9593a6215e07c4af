use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of rewriting a single planned file.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResult {
    file: PathBuf,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_detail: Option<String>,
}

impl ApplyResult {
    #[must_use]
    pub fn succeeded(file: PathBuf) -> Self {
        Self {
            file,
            success: true,
            error_detail: None,
        }
    }

    #[must_use]
    pub fn failed(file: PathBuf, error_detail: String) -> Self {
        Self {
            file,
            success: false,
            error_detail: Some(error_detail),
        }
    }

    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.success
    }

    #[must_use]
    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_result_json() {
        let ok = serde_json::to_value(ApplyResult::succeeded(PathBuf::from("a.cls"))).unwrap();
        assert_eq!(ok, serde_json::json!({ "file": "a.cls", "success": true }));

        let failed = ApplyResult::failed(PathBuf::from("b.cls"), "denied".to_string());
        assert!(!failed.success());
        assert_eq!(failed.error_detail(), Some("denied"));
        let json = serde_json::to_value(failed).unwrap();
        assert_eq!(json["errorDetail"], "denied");
    }
}
