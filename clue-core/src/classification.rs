use std::collections::HashSet;

use clue_types::{ClueError, WordClassification};

/// Check a wholesale classification before it is persisted: it must name at
/// least one word, no word may be blank, and no word may be classified
/// twice (the data model gives every classified word exactly one role).
pub fn validate_classification(word_data: &[WordClassification]) -> Result<(), ClueError> {
    if word_data.is_empty() {
        return Err(ClueError::InvalidClassification {
            reason: "no words classified".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for wc in word_data {
        let word = wc.word.trim().to_lowercase();
        if word.is_empty() {
            return Err(ClueError::InvalidClassification {
                reason: "blank word".to_string(),
            });
        }
        if !seen.insert(word) {
            return Err(ClueError::InvalidClassification {
                reason: format!("word '{}' classified more than once", wc.word),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clue_types::WordRole;

    fn wc(word: &str, role: WordRole) -> WordClassification {
        WordClassification {
            word: word.to_string(),
            role,
        }
    }

    #[test]
    fn test_valid_classification() {
        let word_data = vec![
            wc("ship", WordRole::Fodder),
            wc("wrecked", WordRole::Indicator),
            wc("boat", WordRole::Definition),
        ];
        assert!(validate_classification(&word_data).is_ok());
    }

    #[test]
    fn test_empty_classification_rejected() {
        assert!(matches!(
            validate_classification(&[]),
            Err(ClueError::InvalidClassification { .. })
        ));
    }

    #[test]
    fn test_duplicate_word_rejected() {
        let word_data = vec![wc("ship", WordRole::Fodder), wc("Ship", WordRole::Definition)];
        assert!(matches!(
            validate_classification(&word_data),
            Err(ClueError::InvalidClassification { .. })
        ));
    }

    #[test]
    fn test_blank_word_rejected() {
        let word_data = vec![wc("  ", WordRole::Fodder)];
        assert!(matches!(
            validate_classification(&word_data),
            Err(ClueError::InvalidClassification { .. })
        ));
    }
}
