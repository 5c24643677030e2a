//! UseCase: マスの marked 更新
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateCellUseCase::execute() メソッド
//! - パラメータの検証順序（uid → cell → marked → 識別子 → 範囲）
//!
//! ### なぜこのテストが必要か
//! - クライアントはエラーメッセージだけで失敗を判別するため、文言と順序が契約になる
//! - 範囲外の更新がボードを変化させないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：マーク・アンマーク・同じ値の再設定
//! - 異常系：パラメータ欠落、パース失敗、無効な識別子、範囲外

use std::sync::Arc;

use crate::domain::{CellIndex, DomainError, PlayerId, PlayerRepository, RepositoryError};

use super::error::UpdateCellError;

/// 真偽値のパース
///
/// `1 t T TRUE true True` を true、`0 f F FALSE false False` を false として受け付ける。
pub fn parse_marked(value: &str) -> Result<bool, UpdateCellError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(UpdateCellError::InvalidMarked(format!(
            "invalid value for marked: \"{}\"",
            other
        ))),
    }
}

/// マス更新のユースケース
pub struct UpdateCellUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PlayerRepository>,
}

impl UpdateCellUseCase {
    /// 新しい UpdateCellUseCase を作成
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self { repository }
    }

    /// マス更新を実行
    ///
    /// # Arguments
    ///
    /// * `uid` - プレイヤー識別子
    /// * `cell` - セル番号（整数文字列）
    /// * `marked` - 設定する値（真偽値文字列）
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - 設定後の marked
    /// * `Err(UpdateCellError)` - 更新失敗（ボードは変化しない）
    pub async fn execute(
        &self,
        uid: &str,
        cell: &str,
        marked: &str,
    ) -> Result<bool, UpdateCellError> {
        let player_id = PlayerId::new(uid.to_string()).map_err(|_| UpdateCellError::MissingUid)?;

        if cell.is_empty() {
            return Err(UpdateCellError::MissingCell);
        }
        let index = cell
            .parse::<i64>()
            .map(CellIndex::new)
            .map_err(|e| UpdateCellError::InvalidCell(e.to_string()))?;

        if marked.is_empty() {
            return Err(UpdateCellError::MissingMarked);
        }
        let marked = parse_marked(marked)?;

        self.repository
            .set_cell_marked(&player_id, index, marked)
            .await
            .map_err(|e| match e {
                RepositoryError::PlayerNotFound(_) => UpdateCellError::InvalidUid,
                RepositoryError::Domain(DomainError::CellOutOfBounds { .. }) => {
                    UpdateCellError::CellOutOfBounds
                }
                other @ RepositoryError::DuplicateUsername(_) => {
                    UpdateCellError::Repository(other.to_string())
                }
            })
    }
}
