//! ドメイン層のエラー型

use thiserror::Error;

/// Value Object の生成に失敗した場合のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("PlayerId cannot be empty")]
    PlayerIdEmpty,

    #[error("Username cannot be empty")]
    UsernameEmpty,

    #[error("RoomCode cannot be empty")]
    RoomCodeEmpty,
}

/// Entity のルール違反
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// セル番号がボードの範囲外
    #[error("cell {index} is out of bounds for a board of {len} cells")]
    CellOutOfBounds { index: i64, len: usize },
}

/// Repository 操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
