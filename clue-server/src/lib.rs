use std::sync::Arc;

use uuid::Uuid;
use warp::Filter;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};

use clue_core::HintEngine;
use clue_persistence::repositories::{
    ClueRepository, GroupRepository, MemberRepository, SolutionRepository,
};
use clue_types::{
    ClassifyClueRequest, ClueError, CreateGroupRequest, CreateGroupResponse, HintKind, HintRequest,
    HintResponse, JoinGroupRequest, JoinGroupResponse, SolveRequest, SubmitClueRequest,
};

pub mod config;
pub mod session;

use config::Config;

pub fn create_routes(
    group_repository: Arc<GroupRepository>,
    member_repository: Arc<MemberRepository>,
    clue_repository: Arc<ClueRepository>,
    solution_repository: Arc<SolutionRepository>,
    config: Config,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let groups_filter = warp::any().map({
        let group_repository = group_repository.clone();
        move || group_repository.clone()
    });

    let members_filter = warp::any().map({
        let member_repository = member_repository.clone();
        move || member_repository.clone()
    });

    let clues_filter = warp::any().map({
        let clue_repository = clue_repository.clone();
        move || clue_repository.clone()
    });

    let solutions_filter = warp::any().map({
        let solution_repository = solution_repository.clone();
        move || solution_repository.clone()
    });

    let config_filter = warp::any().map({
        let config = config.clone();
        move || config.clone()
    });

    let session_filter = warp::cookie::optional::<String>(session::MEMBER_COOKIE);

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let create_group = warp::path!("api" / "groups" / "create")
        .and(warp::post())
        .and(warp::body::json())
        .and(groups_filter.clone())
        .and(config_filter.clone())
        .and_then(handle_create_group);

    let join_group = warp::path!("api" / "groups" / "join")
        .and(warp::post())
        .and(warp::body::json())
        .and(groups_filter.clone())
        .and(config_filter.clone())
        .and_then(handle_join_group);

    let list_clues = warp::path!("api" / "groups" / Uuid / "clues")
        .and(warp::get())
        .and(clues_filter.clone())
        .and_then(handle_list_clues);

    let submit_clue = warp::path!("api" / "groups" / Uuid / "clues")
        .and(warp::post())
        .and(warp::body::json())
        .and(session_filter.clone())
        .and(clues_filter.clone())
        .and_then(handle_submit_clue);

    let classify_clue = warp::path!("api" / "groups" / Uuid / "clues" / "classify")
        .and(warp::post())
        .and(warp::body::json())
        .and(session_filter.clone())
        .and(clues_filter.clone())
        .and_then(handle_classify_clue);

    let request_hint = warp::path!("api" / "groups" / Uuid / "clues" / Uuid / "hint")
        .and(warp::post())
        .and(warp::body::json())
        .and(session_filter.clone())
        .and(members_filter.clone())
        .and(clues_filter.clone())
        .and_then(handle_request_hint);

    let submit_solution = warp::path!("api" / "groups" / Uuid / "clues" / Uuid / "solve")
        .and(warp::post())
        .and(warp::body::json())
        .and(session_filter.clone())
        .and(solutions_filter.clone())
        .and_then(handle_submit_solution);

    let leaderboard = warp::path!("api" / "groups" / Uuid / "leaderboard")
        .and(warp::get())
        .and(groups_filter.clone())
        .and(members_filter.clone())
        .and_then(handle_leaderboard);

    // CORS configuration. No credentials flag: a wildcard origin cannot be
    // credentialed, and the session cookie is same-origin anyway.
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(create_group)
        .or(join_group)
        .or(classify_clue)
        .or(request_hint)
        .or(submit_solution)
        .or(list_clues)
        .or(submit_clue)
        .or(leaderboard)
        .with(cors)
        .with(warp::log("clue_club"))
}

fn status_for(err: &ClueError) -> StatusCode {
    match err {
        ClueError::MissingField { .. }
        | ClueError::InvalidHintType { .. }
        | ClueError::InvalidClassification { .. } => StatusCode::BAD_REQUEST,
        ClueError::NotAuthenticated => StatusCode::UNAUTHORIZED,
        ClueError::NotClueAuthor => StatusCode::FORBIDDEN,
        ClueError::GroupNotFound | ClueError::ClueNotFound | ClueError::MemberNotInGroup => {
            StatusCode::NOT_FOUND
        }
        ClueError::AlreadySolved
        | ClueError::AllLettersRevealed
        | ClueError::NoClassificationData => StatusCode::CONFLICT,
        ClueError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: &ClueError) -> Response {
    // Persistence details stay in the logs; callers get a generic message.
    let message = match err {
        ClueError::Internal { message } => {
            tracing::error!(%message, "request failed");
            "internal error".to_string()
        }
        other => other.to_string(),
    };

    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({ "error": message })),
        status_for(err),
    )
    .into_response()
}

fn json_response<T: serde::Serialize>(body: &T) -> Response {
    warp::reply::with_status(warp::reply::json(body), StatusCode::OK).into_response()
}

fn require_field(value: &str, field: &str) -> Result<(), ClueError> {
    if value.trim().is_empty() {
        return Err(ClueError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(())
}

async fn handle_create_group(
    request: CreateGroupRequest,
    groups: Arc<GroupRepository>,
    config: Config,
) -> Result<Response, warp::Rejection> {
    if let Err(err) = require_field(&request.group_name, "group_name")
        .and_then(|_| require_field(&request.member_name, "member_name"))
    {
        return Ok(error_response(&err));
    }

    match groups
        .create_group(request.group_name.trim(), request.member_name.trim())
        .await
    {
        Ok((group, member)) => {
            let body = CreateGroupResponse {
                group_id: group.id,
                code: group.code,
                member_id: member.id,
            };
            let cookie = session::member_cookie(member.id, config.session_max_age_days);
            Ok(
                warp::reply::with_header(json_response(&body), "set-cookie", cookie)
                    .into_response(),
            )
        }
        Err(err) => Ok(error_response(&err)),
    }
}

async fn handle_join_group(
    request: JoinGroupRequest,
    groups: Arc<GroupRepository>,
    config: Config,
) -> Result<Response, warp::Rejection> {
    if let Err(err) = require_field(&request.code, "code")
        .and_then(|_| require_field(&request.member_name, "member_name"))
    {
        return Ok(error_response(&err));
    }

    match groups
        .join_group(request.code.trim(), request.member_name.trim())
        .await
    {
        Ok((group, member)) => {
            let body = JoinGroupResponse {
                group_id: group.id,
                member_id: member.id,
            };
            let cookie = session::member_cookie(member.id, config.session_max_age_days);
            Ok(
                warp::reply::with_header(json_response(&body), "set-cookie", cookie)
                    .into_response(),
            )
        }
        Err(err) => Ok(error_response(&err)),
    }
}

async fn handle_list_clues(
    group_id: Uuid,
    clues: Arc<ClueRepository>,
) -> Result<Response, warp::Rejection> {
    match clues.list_for_group(group_id).await {
        Ok(summaries) => Ok(json_response(&summaries)),
        Err(err) => Ok(error_response(&err)),
    }
}

async fn handle_submit_clue(
    group_id: Uuid,
    request: SubmitClueRequest,
    cookie: Option<String>,
    clues: Arc<ClueRepository>,
) -> Result<Response, warp::Rejection> {
    let member_id = match session::require_member(cookie) {
        Ok(id) => id,
        Err(err) => return Ok(error_response(&err)),
    };

    if let Err(err) =
        require_field(&request.text, "text").and_then(|_| require_field(&request.answer, "answer"))
    {
        return Ok(error_response(&err));
    }

    match clues
        .create_clue(group_id, member_id, request.text.trim(), &request.answer)
        .await
    {
        Ok(summary) => Ok(json_response(&summary)),
        Err(err) => Ok(error_response(&err)),
    }
}

async fn handle_classify_clue(
    group_id: Uuid,
    request: ClassifyClueRequest,
    cookie: Option<String>,
    clues: Arc<ClueRepository>,
) -> Result<Response, warp::Rejection> {
    let member_id = match session::require_member(cookie) {
        Ok(id) => id,
        Err(err) => return Ok(error_response(&err)),
    };

    match clues
        .classify(group_id, request.clue_id, member_id, &request.word_data)
        .await
    {
        Ok(summary) => Ok(json_response(&summary)),
        Err(err) => Ok(error_response(&err)),
    }
}

async fn handle_request_hint(
    group_id: Uuid,
    clue_id: Uuid,
    request: HintRequest,
    cookie: Option<String>,
    members: Arc<MemberRepository>,
    clues: Arc<ClueRepository>,
) -> Result<Response, warp::Rejection> {
    let member_id = match session::require_member(cookie) {
        Ok(id) => id,
        Err(err) => return Ok(error_response(&err)),
    };

    // Only group members may pull hints.
    match members.find_in_group(member_id, group_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(error_response(&ClueError::MemberNotInGroup)),
        Err(err) => return Ok(error_response(&err)),
    }

    let kind: HintKind = match request.hint_type.parse() {
        Ok(kind) => kind,
        Err(err) => return Ok(error_response(&err)),
    };

    let clue = match clues.find_clue(group_id, clue_id).await {
        Ok(clue) => clue,
        Err(err) => return Ok(error_response(&err)),
    };

    match HintEngine::hint(
        &clue.answer,
        clue.word_data.as_deref(),
        kind,
        &request.revealed_positions,
    ) {
        Ok(hint) => Ok(json_response(&HintResponse { hint })),
        Err(err) => Ok(error_response(&err)),
    }
}

async fn handle_submit_solution(
    group_id: Uuid,
    clue_id: Uuid,
    request: SolveRequest,
    cookie: Option<String>,
    solutions: Arc<SolutionRepository>,
) -> Result<Response, warp::Rejection> {
    let member_id = match session::require_member(cookie) {
        Ok(id) => id,
        Err(err) => return Ok(error_response(&err)),
    };

    if let Err(err) = require_field(&request.answer, "answer") {
        return Ok(error_response(&err));
    }

    // A client cannot earn extra points by reporting negative penalties.
    let hints_used = request.hints_used.max(0);

    match solutions
        .submit(group_id, clue_id, member_id, &request.answer, hints_used)
        .await
    {
        Ok(receipt) => Ok(json_response(&receipt)),
        Err(err) => Ok(error_response(&err)),
    }
}

async fn handle_leaderboard(
    group_id: Uuid,
    groups: Arc<GroupRepository>,
    members: Arc<MemberRepository>,
) -> Result<Response, warp::Rejection> {
    match groups.find_by_id(group_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(error_response(&ClueError::GroupNotFound)),
        Err(err) => return Ok(error_response(&err)),
    }

    match members.leaderboard(group_id).await {
        Ok(entries) => Ok(json_response(&entries)),
        Err(err) => Ok(error_response(&err)),
    }
}
