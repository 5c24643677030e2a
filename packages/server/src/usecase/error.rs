//! UseCase 層のエラー型
//!
//! `Display` の文字列はそのままクライアントに返すエラーメッセージになる。

use thiserror::Error;

/// join のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("Invalid room code")]
    InvalidRoom,

    #[error("Missing username")]
    MissingUsername,

    #[error("Username already taken")]
    DuplicateUsername,

    #[error("Failed to register player: {0}")]
    Registration(String),
}

/// ゲーム状態取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetGameStateError {
    #[error("Missing UID")]
    MissingUid,

    #[error("Invalid UID")]
    InvalidUid,
}

/// マス更新のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateCellError {
    #[error("Missing UID")]
    MissingUid,

    #[error("Missing cell")]
    MissingCell,

    /// セル番号が整数として解釈できない（パースエラーの文言をそのまま返す）
    #[error("{0}")]
    InvalidCell(String),

    #[error("Missing marked")]
    MissingMarked,

    /// marked が真偽値として解釈できない
    #[error("{0}")]
    InvalidMarked(String),

    #[error("Invalid UID")]
    InvalidUid,

    #[error("Cell out of bounds")]
    CellOutOfBounds,

    /// 識別子・範囲以外の Repository エラー
    #[error("{0}")]
    Repository(String),
}
