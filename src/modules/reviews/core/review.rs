// Review entity and its content rule.
//
// Responsibilities
// - Hold the immutable review data: reviews are never updated or deleted
//   once written.
// - Validate content length without touching storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_CONTENT_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub product_name: String,
    pub content: String,
    pub created_at_utc: DateTime<Utc>,
}

/// Content must be 1 to 500 characters. Checked before any store access.
pub fn content_is_valid(content: &str) -> bool {
    let length = content.chars().count();
    (1..=MAX_CONTENT_LENGTH).contains(&length)
}

#[cfg(test)]
mod review_content_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("x", true)]
    #[case("a perfectly ordinary review", true)]
    #[case("", false)]
    fn it_should_judge_content_length(#[case] content: &str, #[case] expected: bool) {
        assert_eq!(content_is_valid(content), expected);
    }

    #[rstest]
    fn it_should_accept_exactly_500_characters() {
        assert!(content_is_valid(&"x".repeat(500)));
    }

    #[rstest]
    fn it_should_reject_501_characters() {
        assert!(!content_is_valid(&"x".repeat(501)));
    }

    #[rstest]
    fn it_should_count_characters_not_bytes() {
        // 500 multi-byte characters are still within the limit.
        assert!(content_is_valid(&"é".repeat(500)));
    }
}
