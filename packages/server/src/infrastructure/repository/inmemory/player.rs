//! InMemory Player Repository 実装
//!
//! ドメイン層が定義する PlayerRepository trait の具体的な実装。
//! 参加順を保つため Vec をインメモリ DB として使用し、ストア全体を 1 つの Mutex で守ります。
//! プロセス終了とともに内容は失われます。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{CellIndex, Player, PlayerId, PlayerRepository, RepositoryError};

/// インメモリ Player Repository 実装
#[derive(Default)]
pub struct InMemoryPlayerRepository {
    /// 参加順のプレイヤー一覧
    players: Mutex<Vec<Player>>,
}

impl InMemoryPlayerRepository {
    /// 空の InMemoryPlayerRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn add_player(&self, player: Player) -> Result<(), RepositoryError> {
        let mut players = self.players.lock().await;
        if players.iter().any(|p| p.username == player.username) {
            return Err(RepositoryError::DuplicateUsername(
                player.username.into_string(),
            ));
        }
        players.push(player);
        Ok(())
    }

    async fn find_by_id(&self, player_id: &PlayerId) -> Result<Player, RepositoryError> {
        let players = self.players.lock().await;
        players
            .iter()
            .find(|p| &p.id == player_id)
            .cloned()
            .ok_or_else(|| RepositoryError::PlayerNotFound(player_id.as_str().to_string()))
    }

    async fn set_cell_marked(
        &self,
        player_id: &PlayerId,
        index: CellIndex,
        marked: bool,
    ) -> Result<bool, RepositoryError> {
        let mut players = self.players.lock().await;
        let player = players
            .iter_mut()
            .find(|p| &p.id == player_id)
            .ok_or_else(|| RepositoryError::PlayerNotFound(player_id.as_str().to_string()))?;
        Ok(player.board.set_marked(index, marked)?)
    }

    async fn list_players(&self) -> Vec<Player> {
        let players = self.players.lock().await;
        players.clone()
    }

    async fn count_players(&self) -> usize {
        let players = self.players.lock().await;
        players.len()
    }
}
