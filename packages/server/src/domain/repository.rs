//! Repository trait 定義
//!
//! ドメイン層が必要とするプレイヤー保存先のインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{CellIndex, Player, PlayerId, RepositoryError};

/// Player Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
/// 実装は各メソッドを 1 回のロック取得で完結させること。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// プレイヤーを末尾に追加
    ///
    /// 同じユーザー名のプレイヤーが既にいる場合は `DuplicateUsername` を返し、何も追加しない。
    /// 重複チェックと追加は不可分に行う。
    async fn add_player(&self, player: Player) -> Result<(), RepositoryError>;

    /// 識別子からプレイヤーを取得
    async fn find_by_id(&self, player_id: &PlayerId) -> Result<Player, RepositoryError>;

    /// プレイヤーのボードの指定マスの marked を設定し、設定後の値を返す
    async fn set_cell_marked(
        &self,
        player_id: &PlayerId,
        index: CellIndex,
        marked: bool,
    ) -> Result<bool, RepositoryError>;

    /// 参加順の全プレイヤーを取得
    async fn list_players(&self) -> Vec<Player>;

    /// 参加中のプレイヤー数を取得
    async fn count_players(&self) -> usize;
}
