use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    /// Six-character join code from the unambiguous alphabet.
    pub code: String,
    pub created_at: String, // ISO 8601 string
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub group_id: Uuid,
    pub score: i32,
    pub created_at: String, // ISO 8601 string
}
