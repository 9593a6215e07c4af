use apibump_core::VersionDetector;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static API_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:apiVersion)\s*=\s*(\d+(?:\.\d+)?)").expect("hardcoded regex must compile")
});

/// Version declared by the first `apiVersion = <number>` in `content`
#[must_use]
pub fn find_api_version(content: &str) -> Option<&str> {
    API_VERSION_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Replace the first `apiVersion = <number>` declaration with `apiVersion = <new_version>`.
///
/// Later declarations in the same file are left untouched.
#[must_use]
pub fn update_api_version(content: &str, new_version: &str) -> Option<String> {
    if !API_VERSION_PATTERN.is_match(content) {
        return None;
    }
    let replacement = format!("apiVersion = {new_version}");
    Some(
        API_VERSION_PATTERN
            .replace(content, NoExpand(&replacement))
            .into_owned(),
    )
}

/// Regex detector for Apex classes and triggers
#[derive(Debug, Default, Clone, Copy)]
pub struct ApexVersionDetector;

impl VersionDetector for ApexVersionDetector {
    fn detect(&self, content: &str) -> Option<String> {
        find_api_version(content).map(str::to_string)
    }

    fn rewrite(&self, content: &str, new_version: &str) -> Option<String> {
        update_api_version(content, new_version)
    }
}
