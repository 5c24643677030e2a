//! Value Objects
//!
//! 生成時に検証され、以降は不変な値を表す型。

use serde::{Deserialize, Serialize};

use super::error::ValueObjectError;

/// ボードに並ぶフレーズ（空文字列も 1 つのフレーズとして扱う）
pub type Phrase = String;

/// プレイヤー識別子
///
/// join 時に払い出される bearer token。以降のリクエストはこの値だけで本人を識別する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::PlayerIdEmpty);
        }
        Ok(Self(value))
    }

    /// Factory が生成した非空の値から作成（検証不要）
    pub(crate) fn from_generated(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// ユーザー名（大文字小文字を区別して完全一致で比較する）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::UsernameEmpty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// ルームコード（join 時に要求される共有シークレット）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCode(String);

impl RoomCode {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::RoomCodeEmpty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 与えられたコードがこのルームコードと完全一致するか
    pub fn matches(&self, supplied: &str) -> bool {
        self.0 == supplied
    }
}

/// セル番号
///
/// クライアントから届いた値をそのまま保持する。負数もあり得るため、
/// 範囲チェックは `Board` が行う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellIndex(i64);

impl CellIndex {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// 長さ `len` のボードにおける位置。範囲外なら `None`
    pub fn position_in(&self, len: usize) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|&i| i < len)
    }
}
