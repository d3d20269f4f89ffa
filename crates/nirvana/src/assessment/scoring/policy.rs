use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How unanswered items are treated when a response set is scored.
///
/// Neither variant lets a skipped reverse-coded item count as `min + max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnansweredPolicy {
    /// Skipped items contribute `0`, whether or not they are reverse coded. The outcome
    /// is marked incomplete.
    #[default]
    Lenient,
    /// Scoring fails on the first skipped item.
    Strict,
}

impl UnansweredPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for UnansweredPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unanswered policy '{0}'")]
pub struct UnknownPolicy(pub String);

impl FromStr for UnansweredPolicy {
    type Err = UnknownPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lenient" | "partial" => Ok(Self::Lenient),
            "strict" | "complete" => Ok(Self::Strict),
            _ => Err(UnknownPolicy(value.to_string())),
        }
    }
}
