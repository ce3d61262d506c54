mod common;

use common::*;

use clue_core::{
    HintEngine, SolveState, SubmissionOutcome, calculate_score, evaluate_submission,
    validate_classification,
};
use clue_types::{Hint, HintKind};

#[test]
fn test_solver_journey_with_one_hint() {
    let answer = "LINER";
    let word_data = liner_classification();
    validate_classification(&word_data).unwrap();

    // The solver takes one random-letter hint, then answers correctly:
    // one penalty unit, so 9 points.
    let Hint::RandomLetter { position, .. } = HintEngine::random_letter(answer, &[]).unwrap()
    else {
        panic!("expected a random letter hint");
    };
    assert!(position < answer.len());

    let outcome = evaluate_submission(SolveState::Unattempted, answer, "liner", 1).unwrap();
    assert_eq!(outcome, SubmissionOutcome::Solved { points_earned: 9 });
}

#[test]
fn test_wrong_guess_then_hint_then_solve() {
    let answer = "LINER";

    let first = evaluate_submission(SolveState::Unattempted, answer, "LUGGER", 0).unwrap();
    assert_eq!(first, SubmissionOutcome::Incorrect);

    // One incorrect guess plus one word-role hint: two penalty units.
    let word_data = liner_classification();
    let hint = HintEngine::hint(answer, Some(&word_data), HintKind::Definition, &[]).unwrap();
    assert_eq!(
        hint,
        Hint::Definition {
            words: vec!["port".to_string()]
        }
    );

    let second = evaluate_submission(SolveState::AttemptedIncorrect, answer, "LINER", 2).unwrap();
    assert_eq!(second, SubmissionOutcome::Solved { points_earned: 8 });
    assert_eq!(calculate_score(true, 2), 8);
}
