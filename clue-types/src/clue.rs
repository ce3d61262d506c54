use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Role a word plays inside a cryptic clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum WordRole {
    Indicator,
    Fodder,
    Definition,
}

/// One classified word of a clue. A clue's classification is an ordered
/// list of these; the order is the classification insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordClassification {
    pub word: String,
    pub role: WordRole,
}

/// Full clue record as stored. Carries the answer, so it never leaves the
/// server boundary; clients get `ClueSummary` instead.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Clue {
    pub id: Uuid,
    pub text: String,
    pub answer: String, // stored uppercase, immutable after creation
    pub author_id: Uuid,
    pub group_id: Uuid,
    pub word_data: Option<Vec<WordClassification>>,
    pub created_at: String, // ISO 8601 string
}

/// Client-safe view of a clue used for listings: the answer is replaced by
/// its length enumeration (e.g. "(3,4)" for a two-word answer).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClueSummary {
    pub id: Uuid,
    pub text: String,
    pub author_id: Uuid,
    pub author_name: String,
    pub group_id: Uuid,
    pub answer_pattern: String,
    pub has_word_data: bool,
    pub solutions: Vec<SolutionView>,
    pub created_at: String, // ISO 8601 string
}

/// Per-solver outcome shown on clue listings.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SolutionView {
    pub member_name: String,
    pub correct: bool,
}

/// Stored solve attempt for a (clue, member) pair. Later attempts update
/// this row rather than inserting a new one.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Solution {
    pub id: Uuid,
    pub clue_id: Uuid,
    pub member_id: Uuid,
    pub answer: String, // submitted answer, stored uppercase
    pub correct: bool,
    pub hints_used: i32,
}
