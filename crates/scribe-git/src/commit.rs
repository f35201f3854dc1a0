//! Commit record types and operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parsed git commit, as extracted from a line of log output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Abbreviated commit hash (hex, unique within the repository)
    pub hash: String,
    /// Subject line of the commit message
    pub message: String,
    /// Commit timestamp, normalized to UTC
    pub date: DateTime<Utc>,
    /// Author name
    pub author: String,
    /// Full patch text; `None` until enrichment fetches it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl Commit {
    /// Validate that a hash is an abbreviated or full hex object id
    #[must_use]
    pub fn is_valid_hash(hash: &str) -> bool {
        (4..=40).contains(&hash.len()) && hash.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Literal, case-sensitive substring check against the message
    #[must_use]
    pub fn message_contains(&self, pattern: &str) -> bool {
        self.message.contains(pattern)
    }

    /// Attach the full patch text to this commit
    #[must_use]
    pub fn with_diff(mut self, diff: String) -> Self {
        self.diff = Some(diff);
        self
    }

    /// Whether the patch text has been fetched
    #[must_use]
    pub fn has_diff(&self) -> bool {
        self.diff.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use similar_asserts::assert_eq;

    fn sample_commit() -> Commit {
        Commit {
            hash: "1945ab9".to_string(),
            message: "feat(skills): add milestone-creator".to_string(),
            date: Utc.with_ymd_and_hms(2026, 1, 17, 2, 33, 6).unwrap(),
            author: "Test Author".to_string(),
            diff: None,
        }
    }

    #[test]
    fn test_commit_serialization_roundtrip() {
        let commit = sample_commit();
        let json = serde_json::to_string(&commit).expect("serialize");
        let deserialized: Commit = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(commit, deserialized);
    }

    #[test]
    fn test_commit_json_format() {
        let commit = sample_commit();
        let json = serde_json::to_string_pretty(&commit).expect("serialize");
        assert!(json.contains("\"hash\":"));
        assert!(json.contains("1945ab9"));
        assert!(json.contains("\"date\":"));
    }

    #[test]
    fn test_unfetched_diff_is_omitted_from_json() {
        let commit = sample_commit();
        let json = serde_json::to_string(&commit).expect("serialize");
        assert!(!json.contains("\"diff\""));
    }

    #[test]
    fn test_fetched_diff_appears_in_json() {
        let commit = sample_commit().with_diff("--- a/x\n+++ b/x\n".to_string());
        let json = serde_json::to_string(&commit).expect("serialize");
        assert!(json.contains("\"diff\""));
        assert!(json.contains("+++ b/x"));
    }

    #[test]
    fn test_is_valid_hash_valid() {
        assert!(Commit::is_valid_hash("1945ab9"));
        assert!(Commit::is_valid_hash("abc123"));
        assert!(Commit::is_valid_hash(
            "1945ab9c752534e733c38ba0109dc3b741f0a6eb"
        ));
        assert!(Commit::is_valid_hash("ABCDEF12"));
    }

    #[test]
    fn test_is_valid_hash_invalid() {
        // Too short
        assert!(!Commit::is_valid_hash("1a9"));
        // Too long
        assert!(!Commit::is_valid_hash(
            "1945ab9c752534e733c38ba0109dc3b741f0a6eb0"
        ));
        // Invalid characters
        assert!(!Commit::is_valid_hash("1945abg"));
        // Empty
        assert!(!Commit::is_valid_hash(""));
    }

    #[test]
    fn test_message_contains_literal() {
        let commit = sample_commit();
        assert!(commit.message_contains("milestone"));
        assert!(commit.message_contains("feat(skills)"));
        assert!(!commit.message_contains("fix"));
    }

    #[test]
    fn test_message_contains_is_case_sensitive() {
        let commit = sample_commit();
        assert!(!commit.message_contains("MILESTONE"));
    }

    #[test]
    fn test_with_diff_preserves_fields() {
        let commit = sample_commit();
        let enriched = commit.clone().with_diff("patch".to_string());
        assert_eq!(enriched.hash, commit.hash);
        assert_eq!(enriched.message, commit.message);
        assert_eq!(enriched.date, commit.date);
        assert_eq!(enriched.author, commit.author);
        assert!(enriched.has_diff());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy to generate abbreviated hex hashes
    fn hash_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[0-9a-f]{7,12}").expect("valid regex")
    }

    /// Strategy to generate arbitrary Commit values
    fn commit_strategy() -> impl Strategy<Value = Commit> {
        (
            hash_strategy(),
            "[A-Za-z0-9 .,:()-]{0,80}",              // subject line
            "[A-Za-z ]{1,50}",                       // author name
            0i64..2_000_000_000i64,                  // timestamp as unix seconds
            proptest::option::of(".{0,200}"),        // diff
        )
            .prop_map(|(hash, message, author, ts, diff)| {
                let date = DateTime::from_timestamp(ts, 0).unwrap_or_else(Utc::now);
                Commit {
                    hash,
                    message,
                    date,
                    author,
                    diff,
                }
            })
    }

    proptest! {
        /// Property: Any generated Commit should have a valid hash
        #[test]
        fn prop_commit_hash_is_valid(commit in commit_strategy()) {
            prop_assert!(
                Commit::is_valid_hash(&commit.hash),
                "Generated hash should be valid: {}",
                commit.hash
            );
        }

        /// Property: Round-trip JSON serialization preserves all fields
        #[test]
        fn prop_commit_roundtrip_serialization(commit in commit_strategy()) {
            let json = serde_json::to_string(&commit).expect("serialize");
            let deserialized: Commit = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(commit, deserialized);
        }

        /// Property: message_contains is exactly literal containment
        #[test]
        fn prop_message_contains_iff_substring(
            commit in commit_strategy(),
            pattern in "[A-Za-z0-9 ]{0,10}"
        ) {
            prop_assert_eq!(
                commit.message_contains(&pattern),
                commit.message.contains(&pattern)
            );
        }

        /// Property: enrichment only ever sets the diff field
        #[test]
        fn prop_with_diff_only_touches_diff(commit in commit_strategy(), diff in ".{0,100}") {
            let enriched = commit.clone().with_diff(diff.clone());
            prop_assert_eq!(enriched.hash, commit.hash);
            prop_assert_eq!(enriched.message, commit.message);
            prop_assert_eq!(enriched.date, commit.date);
            prop_assert_eq!(enriched.author, commit.author);
            prop_assert_eq!(enriched.diff, Some(diff));
        }
    }
}
