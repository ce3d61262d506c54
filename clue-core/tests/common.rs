use clue_types::{WordClassification, WordRole};

/// Classification for "Capsized liner near port (6)" with answer LINER.
pub fn liner_classification() -> Vec<WordClassification> {
    vec![
        WordClassification {
            word: "Capsized".to_string(),
            role: WordRole::Indicator,
        },
        WordClassification {
            word: "liner".to_string(),
            role: WordRole::Fodder,
        },
        WordClassification {
            word: "port".to_string(),
            role: WordRole::Definition,
        },
    ]
}
