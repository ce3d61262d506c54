use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ClueError;

/// The four hint kinds a solver may request. Parsed from the wire string so
/// an unknown kind surfaces as `InvalidHintType` rather than a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HintKind {
    RandomLetter,
    Indicator,
    Fodder,
    Definition,
}

impl FromStr for HintKind {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random_letter" => Ok(HintKind::RandomLetter),
            "indicator" => Ok(HintKind::Indicator),
            "fodder" => Ok(HintKind::Fodder),
            "definition" => Ok(HintKind::Definition),
            other => Err(ClueError::InvalidHintType {
                requested: other.to_string(),
            }),
        }
    }
}

/// Hint payload returned to the solver. `position` for a random letter is
/// the index into the full answer string (spaces included) so the client
/// can place the letter in the right box; `letter` is already uppercased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Hint {
    RandomLetter { letter: char, position: usize },
    Indicator { words: Vec<String> },
    Fodder { words: Vec<String> },
    Definition { words: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_kind_parsing() {
        assert_eq!("random_letter".parse(), Ok(HintKind::RandomLetter));
        assert_eq!("indicator".parse(), Ok(HintKind::Indicator));
        assert_eq!("fodder".parse(), Ok(HintKind::Fodder));
        assert_eq!("definition".parse(), Ok(HintKind::Definition));
    }

    #[test]
    fn test_unknown_hint_kind_is_rejected() {
        let err = "anagram".parse::<HintKind>().unwrap_err();
        assert_eq!(
            err,
            ClueError::InvalidHintType {
                requested: "anagram".to_string()
            }
        );
    }
}
