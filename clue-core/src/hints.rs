use rand::seq::SliceRandom;

use clue_types::{ClueError, Hint, HintKind, WordClassification, WordRole};

/// Stateless hint issuer. Penalty bookkeeping is the caller's concern: the
/// engine neither counts nor limits the hints it hands out.
pub struct HintEngine;

impl HintEngine {
    /// Produce the requested hint for a clue. `word_data` is the clue's
    /// classification if one has been recorded; `revealed_positions` only
    /// matters for random-letter hints.
    pub fn hint(
        answer: &str,
        word_data: Option<&[WordClassification]>,
        kind: HintKind,
        revealed_positions: &[usize],
    ) -> Result<Hint, ClueError> {
        match kind {
            HintKind::RandomLetter => Self::random_letter(answer, revealed_positions),
            HintKind::Indicator => Self::role_words(word_data, WordRole::Indicator)
                .map(|words| Hint::Indicator { words }),
            HintKind::Fodder => {
                Self::role_words(word_data, WordRole::Fodder).map(|words| Hint::Fodder { words })
            }
            HintKind::Definition => Self::role_words(word_data, WordRole::Definition)
                .map(|words| Hint::Definition { words }),
        }
    }

    /// Reveal one not-yet-revealed letter of the answer, chosen uniformly at
    /// random. The returned position indexes the full answer string (spaces
    /// included) so the client can place the letter in its box; the letter
    /// itself comes from the uppercased, space-stripped answer.
    pub fn random_letter(answer: &str, revealed_positions: &[usize]) -> Result<Hint, ClueError> {
        let letters: Vec<char> = answer
            .to_uppercase()
            .chars()
            .filter(|c| *c != ' ')
            .collect();

        // Candidate (position, letter-rank) pairs for every non-space slot
        // that has not been revealed yet.
        let mut candidates = Vec::new();
        let mut rank = 0usize;
        for (position, ch) in answer.chars().enumerate() {
            if ch != ' ' {
                if !revealed_positions.contains(&position) {
                    candidates.push((position, rank));
                }
                rank += 1;
            }
        }

        let Some(&(position, rank)) = candidates.choose(&mut rand::thread_rng()) else {
            return Err(ClueError::AllLettersRevealed);
        };

        tracing::debug!(position, "revealing letter hint");
        Ok(Hint::RandomLetter {
            letter: letters[rank],
            position,
        })
    }

    /// Every classified word with the requested role, in classification
    /// insertion order.
    fn role_words(
        word_data: Option<&[WordClassification]>,
        role: WordRole,
    ) -> Result<Vec<String>, ClueError> {
        let word_data = match word_data {
            Some(data) if !data.is_empty() => data,
            _ => return Err(ClueError::NoClassificationData),
        };

        Ok(word_data
            .iter()
            .filter(|wc| wc.role == role)
            .map(|wc| wc.word.clone())
            .collect())
    }
}
