//! Which of the two compared logs a value belongs to.

use serde::Serialize;

/// One side of a comparison: the baseline log or the candidate log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The baseline ("old") log
    Old,
    /// The candidate ("new") log
    New,
}

impl Side {
    /// Stable lowercase label, used in log fields and messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Old => "old",
            Side::New => "new",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Old.to_string(), "old");
        assert_eq!(Side::New.as_str(), "new");
    }

    #[test]
    fn test_side_serializes_snake_case() {
        let json = serde_json::to_string(&Side::New).unwrap();
        assert_eq!(json, "\"new\"");
    }
}
