/// Points for a correct first solve: a base of 10 minus one point per
/// penalty unit (each hint taken and each earlier incorrect guess), never
/// dropping below 1. Incorrect submissions score 0.
pub fn calculate_score(correct: bool, penalty_count: i32) -> i32 {
    if !correct {
        return 0;
    }
    (10 - penalty_count).max(1)
}
