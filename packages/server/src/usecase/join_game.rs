//! UseCase: プレイヤー参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinGameUseCase::execute() メソッド
//! - ルームコード検証、ユーザー名検証、ボード生成
//!
//! ### なぜこのテストが必要か
//! - 誤ったルームコードではプレイヤーが作られないことを保証
//! - 全プレイヤーが同じフレーズ集合から自分専用の並びを受け取ることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規プレイヤーの参加
//! - 異常系：ルームコード不一致、ユーザー名なし、ユーザー名重複

use std::sync::Arc;

use crate::domain::{
    Board, GameConfig, Player, PlayerId, PlayerIdFactory, PlayerRepository, RepositoryError,
    Username, shuffle_phrases,
};

use super::error::JoinError;

/// プレイヤー参加のユースケース
pub struct JoinGameUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PlayerRepository>,
    /// ゲーム設定（ルームコード・フレーズ）
    config: Arc<GameConfig>,
}

impl JoinGameUseCase {
    /// 新しい JoinGameUseCase を作成
    pub fn new(repository: Arc<dyn PlayerRepository>, config: Arc<GameConfig>) -> Self {
        Self { repository, config }
    }

    /// 参加を実行
    ///
    /// # Arguments
    ///
    /// * `username` - 参加するユーザー名（空文字列は未指定扱い）
    /// * `room` - クライアントが入力したルームコード
    ///
    /// # Returns
    ///
    /// * `Ok(PlayerId)` - 参加成功（以降のリクエストで使う識別子）
    /// * `Err(JoinError)` - 参加失敗
    pub async fn execute(&self, username: &str, room: &str) -> Result<PlayerId, JoinError> {
        // 1. ルームコードの検証（ユーザー名より先）
        if !self.config.accepts_room(room) {
            return Err(JoinError::InvalidRoom);
        }

        // 2. ユーザー名の検証
        let username =
            Username::new(username.to_string()).map_err(|_| JoinError::MissingUsername)?;

        // 3. 自分専用の並びでボードを作成
        let id = PlayerIdFactory::generate();
        let board = Board::from_phrases(shuffle_phrases(&self.config.phrases));
        let player = Player::new(id.clone(), username.clone(), board);

        // 4. Repository に追加（重複チェックを含む）
        self.repository
            .add_player(player)
            .await
            .map_err(|e| match e {
                RepositoryError::DuplicateUsername(_) => JoinError::DuplicateUsername,
                other => JoinError::Registration(other.to_string()),
            })?;

        tracing::info!("Player {} joined with UID {}", username.as_str(), id.as_str());

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MockPlayerRepository, RoomCode},
        infrastructure::repository::InMemoryPlayerRepository,
    };
    use std::collections::HashSet;

    fn create_test_config(room: Option<&str>) -> Arc<GameConfig> {
        Arc::new(GameConfig::new(
            room.map(|r| RoomCode::new(r.to_string()).unwrap()),
            "Generic Bingo".to_string(),
            vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
        ))
    }

    fn sorted_phrases(player: &Player) -> Vec<String> {
        let mut phrases: Vec<String> = player
            .board
            .cells()
            .iter()
            .map(|c| c.phrase.clone())
            .collect();
        phrases.sort();
        phrases
    }

    #[tokio::test]
    async fn test_join_success() {
        // テスト項目: 新規プレイヤーが参加でき、全マス未マークのボードを受け取る
        // given (前提条件):
        let repository = Arc::new(InMemoryPlayerRepository::new());
        let usecase = JoinGameUseCase::new(repository.clone(), create_test_config(None));

        // when (操作):
        let result = usecase.execute("alice", "").await;

        // then (期待する結果):
        let id = result.unwrap();
        let player = repository.find_by_id(&id).await.unwrap();
        assert_eq!(player.username.as_str(), "alice");
        assert_eq!(player.board.len(), 4);
        assert!(player.board.cells().iter().all(|c| !c.marked));
        assert_eq!(sorted_phrases(&player), vec!["A", "B", "C", "D"]);
    }

    #[tokio::test]
    async fn test_join_distinct_players_get_distinct_ids() {
        // テスト項目: 異なるユーザー名の参加では識別子が全て異なる
        // given (前提条件):
        let repository = Arc::new(InMemoryPlayerRepository::new());
        let usecase = JoinGameUseCase::new(repository.clone(), create_test_config(None));

        // when (操作):
        let mut ids = HashSet::new();
        for name in ["alice", "bob", "charlie", "dave"] {
            ids.insert(usecase.execute(name, "").await.unwrap());
        }

        // then (期待する結果):
        assert_eq!(ids.len(), 4);
        for player in repository.list_players().await {
            assert_eq!(player.board.len(), 4);
        }
    }

    #[tokio::test]
    async fn test_join_missing_username() {
        // テスト項目: ユーザー名が空の場合はエラーになる
        // given (前提条件):
        let repository = Arc::new(InMemoryPlayerRepository::new());
        let usecase = JoinGameUseCase::new(repository.clone(), create_test_config(None));

        // when (操作):
        let result = usecase.execute("", "").await;

        // then (期待する結果):
        assert_eq!(result, Err(JoinError::MissingUsername));
        assert_eq!(repository.count_players().await, 0);
    }

    #[tokio::test]
    async fn test_join_duplicate_username() {
        // テスト項目: 同じユーザー名での 2 回目の参加は拒否され、人数は変わらない
        // given (前提条件):
        let repository = Arc::new(InMemoryPlayerRepository::new());
        let usecase = JoinGameUseCase::new(repository.clone(), create_test_config(None));
        usecase.execute("alice", "").await.unwrap();

        // when (操作):
        let result = usecase.execute("alice", "").await;

        // then (期待する結果):
        assert_eq!(result, Err(JoinError::DuplicateUsername));
        assert_eq!(repository.count_players().await, 1);
    }

    #[tokio::test]
    async fn test_join_invalid_room_is_checked_first() {
        // テスト項目: ルームコード不一致はユーザー名の内容に関わらずエラーになる
        // given (前提条件):
        let repository = Arc::new(InMemoryPlayerRepository::new());
        let usecase = JoinGameUseCase::new(repository.clone(), create_test_config(Some("xyz")));
        usecase.execute("alice", "xyz").await.unwrap();

        // when (操作):
        let valid_name = usecase.execute("bob", "abc").await;
        let empty_name = usecase.execute("", "abc").await;
        let taken_name = usecase.execute("alice", "").await;

        // then (期待する結果):
        assert_eq!(valid_name, Err(JoinError::InvalidRoom));
        assert_eq!(empty_name, Err(JoinError::InvalidRoom));
        assert_eq!(taken_name, Err(JoinError::InvalidRoom));
        assert_eq!(repository.count_players().await, 1);
    }

    #[tokio::test]
    async fn test_join_with_empty_phrase_list() {
        // テスト項目: フレーズが 0 件でも参加でき、ボードは空になる
        // given (前提条件):
        let repository = Arc::new(InMemoryPlayerRepository::new());
        let config = Arc::new(GameConfig::new(None, "Empty".to_string(), vec![]));
        let usecase = JoinGameUseCase::new(repository.clone(), config);

        // when (操作):
        let id = usecase.execute("alice", "").await.unwrap();

        // then (期待する結果):
        let player = repository.find_by_id(&id).await.unwrap();
        assert!(player.board.is_empty());
    }

    #[tokio::test]
    async fn test_join_maps_repository_duplicate_error() {
        // テスト項目: Repository の重複エラーが DuplicateUsername に変換される
        // given (前提条件):
        let mut repository = MockPlayerRepository::new();
        repository
            .expect_add_player()
            .times(1)
            .returning(|player| {
                Err(RepositoryError::DuplicateUsername(
                    player.username.into_string(),
                ))
            });
        let usecase = JoinGameUseCase::new(Arc::new(repository), create_test_config(None));

        // when (操作):
        let result = usecase.execute("alice", "").await;

        // then (期待する結果):
        assert_eq!(result, Err(JoinError::DuplicateUsername));
    }
}
