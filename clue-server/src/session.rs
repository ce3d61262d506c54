use uuid::Uuid;

use clue_types::ClueError;

/// Cookie carrying the caller's member id. It is the sole authentication
/// mechanism: whoever presents the id acts as that member.
pub const MEMBER_COOKIE: &str = "member_id";

/// Set-Cookie value issued on group create/join.
pub fn member_cookie(member_id: Uuid, max_age_days: u64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        MEMBER_COOKIE,
        member_id,
        max_age_days * 24 * 60 * 60
    )
}

/// Resolve the session cookie to a member id, rejecting absent or mangled
/// values.
pub fn require_member(cookie: Option<String>) -> Result<Uuid, ClueError> {
    let raw = cookie.ok_or(ClueError::NotAuthenticated)?;
    raw.parse().map_err(|_| ClueError::NotAuthenticated)
}
