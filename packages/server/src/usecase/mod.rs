//! UseCase 層
//!
//! 1 つの API 操作につき 1 つのユースケースを提供します。

mod error;
mod get_game_state;
mod join_game;
mod update_cell;

pub use error::{GetGameStateError, JoinError, UpdateCellError};
pub use get_game_state::GetGameStateUseCase;
pub use join_game::JoinGameUseCase;
pub use update_cell::{UpdateCellUseCase, parse_marked};
