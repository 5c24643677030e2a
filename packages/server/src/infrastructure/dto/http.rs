//! HTTP API DTOs.
//!
//! Every endpoint answers with HTTP 200. Failures are reported in the body as
//! `{"error": "..."}` and never carry success fields.

use serde::{Deserialize, Serialize};

/// Raw query string pairs in request order
///
/// Repeated keys are kept; lookups use the first occurrence so that a
/// duplicated parameter never turns into a rejected request.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value of `key`, or an empty string when absent
    pub fn first(&self, key: &str) -> String {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }
}

/// Query parameters of the join endpoint
#[derive(Debug, Default)]
pub struct JoinQuery {
    pub username: String,
    pub room: String,
}

impl From<&QueryParams> for JoinQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            username: params.first("username"),
            room: params.first("room"),
        }
    }
}

/// Query parameters of the game state endpoint
#[derive(Debug, Default)]
pub struct GameQuery {
    pub uid: String,
}

impl From<&QueryParams> for GameQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            uid: params.first("uid"),
        }
    }
}

/// Query parameters of the cell update endpoint
///
/// `cell` and `marked` stay raw strings so that parse failures can be
/// reported in the response body instead of rejected by the extractor.
#[derive(Debug, Default)]
pub struct CellQuery {
    pub uid: String,
    pub cell: String,
    pub marked: String,
}

impl From<&QueryParams> for CellQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            uid: params.first("uid"),
            cell: params.first("cell"),
            marked: params.first("marked"),
        }
    }
}

/// Successful join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinResponse {
    pub uid: String,
}

/// A single cell of a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCellDto {
    pub phrase: String,
    pub marked: bool,
}

/// A player as shown to every viewer (the identifier is never exposed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDto {
    pub username: String,
    pub bingo_board: Vec<BoardCellDto>,
}

/// Full game state for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateResponse {
    pub players: Vec<PlayerDto>,
    pub topic: String,
}

/// Successful cell update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellResponse {
    pub marked: bool,
}

/// Failure body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Either a success payload or an error payload, serialized without a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Err(ErrorResponse),
    Ok(T),
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl ToString) -> Self {
        Self::Err(ErrorResponse {
            error: message.to_string(),
        })
    }
}

impl<T, E: ToString> From<Result<T, E>> for ApiResponse<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(e) => Self::error(e),
        }
    }
}
