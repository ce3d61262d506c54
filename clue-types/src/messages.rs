use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::{Hint, WordClassification};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateGroupRequest {
    pub group_name: String,
    pub member_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateGroupResponse {
    pub group_id: Uuid,
    pub code: String,
    pub member_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JoinGroupRequest {
    pub code: String,
    pub member_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JoinGroupResponse {
    pub group_id: Uuid,
    pub member_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitClueRequest {
    pub text: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassifyClueRequest {
    pub clue_id: Uuid,
    pub word_data: Vec<WordClassification>,
}

/// `revealed_positions` accumulates client-side across random-letter hints
/// for the same clue, so the engine never repeats a position.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HintRequest {
    pub hint_type: String,
    #[serde(default)]
    pub revealed_positions: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HintResponse {
    pub hint: Hint,
}

/// `hints_used` is the caller-tracked penalty count: one unit per hint
/// taken plus one per earlier incorrect guess.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SolveRequest {
    pub answer: String,
    #[serde(default)]
    pub hints_used: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SolveResponse {
    pub correct: bool,
    pub points_earned: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeaderboardEntry {
    pub member: crate::Member,
    pub rank: u32,
}
