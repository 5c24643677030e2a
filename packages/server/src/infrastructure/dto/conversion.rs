//! Conversion logic from domain entities to DTOs.

use crate::domain::{BoardCell, GameState, Player};
use crate::infrastructure::dto::http as dto;

impl From<BoardCell> for dto::BoardCellDto {
    fn from(model: BoardCell) -> Self {
        Self {
            phrase: model.phrase,
            marked: model.marked,
        }
    }
}

impl From<Player> for dto::PlayerDto {
    fn from(model: Player) -> Self {
        Self {
            username: model.username.into_string(),
            bingo_board: model
                .board
                .cells()
                .iter()
                .cloned()
                .map(dto::BoardCellDto::from)
                .collect(),
        }
    }
}

impl From<GameState> for dto::GameStateResponse {
    fn from(model: GameState) -> Self {
        Self {
            players: model.players.into_iter().map(dto::PlayerDto::from).collect(),
            topic: model.topic,
        }
    }
}
