use clue_types::ClueError;

use crate::scoring::calculate_score;

/// Answers are compared trimmed and uppercased; internal whitespace is kept
/// so multi-word answers must match word for word.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub fn answers_match(submitted: &str, stored: &str) -> bool {
    normalize_answer(submitted) == normalize_answer(stored)
}

/// Where a (clue, member) pair sits in the solve state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    Unattempted,
    AttemptedIncorrect,
    Solved,
}

/// Outcome of a submission against the state machine. `Solved` carries the
/// points the member earns, already floored by the scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Solved { points_earned: i32 },
    Incorrect,
}

/// Run one submission through the solve state machine. Re-submitting after a
/// correct solve is rejected; retrying after an incorrect attempt is allowed,
/// with the caller-supplied penalty count deciding the eventual score.
pub fn evaluate_submission(
    state: SolveState,
    stored_answer: &str,
    submitted: &str,
    hints_used: i32,
) -> Result<SubmissionOutcome, ClueError> {
    if state == SolveState::Solved {
        return Err(ClueError::AlreadySolved);
    }

    if answers_match(submitted, stored_answer) {
        Ok(SubmissionOutcome::Solved {
            points_earned: calculate_score(true, hints_used),
        })
    } else {
        Ok(SubmissionOutcome::Incorrect)
    }
}

/// Length enumeration shown next to a clue, e.g. "(5)" for LINER or "(3,4)"
/// for NEW YORK.
pub fn format_answer_length(answer: &str) -> String {
    let parts: Vec<usize> = answer.split_whitespace().map(|w| w.chars().count()).collect();
    if parts.is_empty() {
        return String::new();
    }
    let lengths: Vec<String> = parts.iter().map(|len| len.to_string()).collect();
    format!("({})", lengths.join(","))
}
