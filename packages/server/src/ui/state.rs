//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::{GetGameStateUseCase, JoinGameUseCase, UpdateCellUseCase};

/// Shared application state
pub struct AppState {
    /// JoinGameUseCase（プレイヤー参加のユースケース）
    pub join_game_usecase: Arc<JoinGameUseCase>,
    /// GetGameStateUseCase（ゲーム状態取得のユースケース）
    pub get_game_state_usecase: Arc<GetGameStateUseCase>,
    /// UpdateCellUseCase（マス更新のユースケース）
    pub update_cell_usecase: Arc<UpdateCellUseCase>,
}
