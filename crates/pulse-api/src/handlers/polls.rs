//! Poll handlers
//!
//! Endpoints for creating polls, reading feeds, and casting votes.

use axum::{
    extract::{Path, State},
    Json,
};
use pulse_service::{CreatePollRequest, PollResponse, PollService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create a new poll
///
/// POST /polls
pub async fn create_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePollRequest>,
) -> ApiResult<Created<Json<PollResponse>>> {
    let service = PollService::new(state.service_context());
    let poll = service.create_poll(auth.user_id, request).await?;
    Ok(Created(Json(poll)))
}

/// Get a single poll with options and tallies
///
/// GET /polls/{poll_id}
pub async fn get_poll(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(poll_id): Path<String>,
) -> ApiResult<Json<PollResponse>> {
    let poll_id = poll_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid poll_id format"))?;

    let service = PollService::new(state.service_context());
    let poll = service.get_poll(poll_id).await?;
    Ok(Json(poll))
}

/// List the current user's own polls
///
/// GET /polls/@me
pub async fn get_own_polls(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PollResponse>>> {
    let service = PollService::new(state.service_context());
    let polls = service.list_own_polls(auth.user_id).await?;
    Ok(Json(polls))
}

/// List other users' polls for the explore feed
///
/// GET /polls/explore
pub async fn get_explore_polls(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PollResponse>>> {
    let service = PollService::new(state.service_context());
    let polls = service.list_explore_polls(auth.user_id).await?;
    Ok(Json(polls))
}

/// Cast a vote on a poll option
///
/// POST /polls/{poll_id}/options/{option_id}/vote
pub async fn vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((poll_id, option_id)): Path<(String, String)>,
) -> ApiResult<Json<PollResponse>> {
    let poll_id = poll_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid poll_id format"))?;
    let option_id = option_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid option_id format"))?;

    let service = PollService::new(state.service_context());
    let poll = service.vote(auth.user_id, poll_id, option_id).await?;
    Ok(Json(poll))
}
