//! Like handlers
//!
//! Endpoints for liking a feed, removing a like and listing who liked it.

use axum::{extract::State, Json};
use like_service::dto::{LikeActionResponse, ReactorPage};
use like_service::LikeService;

use crate::extractors::{LikeRequestParams, TargetPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Like a feed or change the mood of an existing like
///
/// POST /feeds/{id}/like
pub async fn like(
    State(state): State<AppState>,
    TargetPath(target_id): TargetPath,
    LikeRequestParams(params): LikeRequestParams,
) -> ApiResult<Json<LikeActionResponse>> {
    let user_id = params.user_id()?;

    let service = LikeService::new(state.service_context());
    let response = service.like(user_id, target_id, params.mood()).await?;
    Ok(Json(response))
}

/// Remove a like
///
/// DELETE /feeds/{id}/like
pub async fn unlike(
    State(state): State<AppState>,
    TargetPath(target_id): TargetPath,
    LikeRequestParams(params): LikeRequestParams,
) -> ApiResult<NoContent> {
    let user_id = params.user_id()?;

    let service = LikeService::new(state.service_context());
    service.unlike(user_id, target_id).await?;
    Ok(NoContent)
}

/// List the users who liked a feed
///
/// GET|POST /feeds/{id}/like/users
pub async fn list_reactors(
    State(state): State<AppState>,
    TargetPath(target_id): TargetPath,
    LikeRequestParams(params): LikeRequestParams,
) -> ApiResult<Json<ReactorPage>> {
    let count = params.count()?;

    let service = LikeService::new(state.service_context());
    let page = service
        .list_reactors(target_id, params.mood(), count)
        .await?;
    Ok(Json(page))
}
