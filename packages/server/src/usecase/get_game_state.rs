//! UseCase: ゲーム状態取得
//!
//! 有効な識別子を持つプレイヤーなら誰でも、全プレイヤーのボードを閲覧できる。

use std::sync::Arc;

use crate::domain::{GameConfig, GameState, PlayerId, PlayerRepository};

use super::error::GetGameStateError;

/// ゲーム状態取得のユースケース
pub struct GetGameStateUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PlayerRepository>,
    /// ゲーム設定（トピック）
    config: Arc<GameConfig>,
}

impl GetGameStateUseCase {
    /// 新しい GetGameStateUseCase を作成
    pub fn new(repository: Arc<dyn PlayerRepository>, config: Arc<GameConfig>) -> Self {
        Self { repository, config }
    }

    /// ゲーム状態を取得
    ///
    /// # Returns
    ///
    /// * `Ok(GameState)` - 参加順の全プレイヤーとトピック
    /// * `Err(GetGameStateError)` - 識別子が未指定または無効
    pub async fn execute(&self, uid: &str) -> Result<GameState, GetGameStateError> {
        let player_id =
            PlayerId::new(uid.to_string()).map_err(|_| GetGameStateError::MissingUid)?;

        // 1 回のロックで取得したスナップショットで識別子を確認する
        let players = self.repository.list_players().await;
        if !players.iter().any(|p| p.id == player_id) {
            return Err(GetGameStateError::InvalidUid);
        }

        Ok(GameState {
            topic: self.config.topic.clone(),
            players,
        })
    }
}
