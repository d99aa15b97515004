use super::extract::{extract_score, RawValue, DEFAULT_SCORE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A selectable strategy card shown alongside the cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Strategy {
    /// Identifier passed back when the strategy is selected
    pub id: String,
    /// Short heading for the card
    pub title: String,
    /// Optional longer explanation
    #[serde(default)]
    pub description: Option<String>,
    /// Rating as free text or a number (e.g. "87 points", 87)
    #[serde(default)]
    pub score: Option<RawValue>,
}

impl Strategy {
    /// Two-digit rating of the strategy, [`DEFAULT_SCORE`] when absent.
    pub fn score(&self) -> u8 {
        self.score.as_ref().map_or(DEFAULT_SCORE, extract_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(score: Option<RawValue>) -> Strategy {
        Strategy {
            id: "s1".to_string(),
            title: "Split ownership".to_string(),
            description: None,
            score,
        }
    }

    #[test]
    fn score_from_text() {
        assert_eq!(strategy(Some("87 points".into())).score(), 87);
    }

    #[test]
    fn score_from_number_is_truncated() {
        assert_eq!(strategy(Some(RawValue::Integer(123))).score(), 12);
    }

    #[test]
    fn missing_score_uses_default() {
        assert_eq!(strategy(None).score(), DEFAULT_SCORE);
        assert_eq!(strategy(Some("n/a".into())).score(), DEFAULT_SCORE);
    }
}
