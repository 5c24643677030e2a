//! HTTP API endpoint handlers.
//!
//! Each handler maps one query-string request onto one use case. Failures are
//! returned with HTTP 200 and an `error` field so the browser client only has
//! to inspect the body.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{
    infrastructure::dto::http::{
        ApiResponse, CellQuery, CellResponse, GameQuery, GameStateResponse, JoinQuery,
        JoinResponse, QueryParams,
    },
    ui::state::AppState,
};

/// Unwrap the query pairs, or report a malformed query string in the body
fn query_params<T>(
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Result<QueryParams, Json<ApiResponse<T>>> {
    query.map(|Query(params)| params).map_err(|rejection| {
        tracing::debug!("Malformed query string: {}", rejection.body_text());
        Json(ApiResponse::error(rejection.body_text()))
    })
}

/// Join the game with a username (and the room code, when one is configured)
pub async fn join(
    State(state): State<Arc<AppState>>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Json<ApiResponse<JoinResponse>> {
    let params = match query_params(query) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let JoinQuery { username, room } = JoinQuery::from(&params);

    let result = state
        .join_game_usecase
        .execute(&username, &room)
        .await
        .map(|id| JoinResponse {
            uid: id.into_string(),
        });
    if let Err(e) = &result {
        tracing::debug!("Join rejected for '{}': {}", username, e);
    }

    Json(result.into())
}

/// Get every player's board plus the topic
pub async fn game_state(
    State(state): State<Arc<AppState>>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Json<ApiResponse<GameStateResponse>> {
    let params = match query_params(query) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let GameQuery { uid } = GameQuery::from(&params);

    let result = state
        .get_game_state_usecase
        .execute(&uid)
        .await
        .map(GameStateResponse::from);
    if let Err(e) = &result {
        tracing::debug!("Game state request rejected: {}", e);
    }

    Json(result.into())
}

/// Mark or unmark one cell of the caller's board
pub async fn update_cell(
    State(state): State<Arc<AppState>>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Json<ApiResponse<CellResponse>> {
    let params = match query_params(query) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let CellQuery { uid, cell, marked } = CellQuery::from(&params);

    let result = state
        .update_cell_usecase
        .execute(&uid, &cell, &marked)
        .await
        .map(|marked| CellResponse { marked });
    if let Err(e) = &result {
        tracing::debug!("Cell update rejected (cell={}): {}", cell, e);
    }

    Json(result.into())
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
