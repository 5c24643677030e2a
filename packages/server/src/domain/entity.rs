//! Entities
//!
//! プレイヤーとそのボード、およびゲーム全体の設定と読み取りモデル。

use super::{
    error::DomainError,
    value_object::{CellIndex, Phrase, PlayerId, RoomCode, Username},
};

/// ボード上の 1 マス
///
/// フレーズは生成後に変わらない。変更できるのは `marked` だけ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCell {
    pub phrase: Phrase,
    pub marked: bool,
}

impl BoardCell {
    pub fn new(phrase: Phrase) -> Self {
        Self {
            phrase,
            marked: false,
        }
    }
}

/// プレイヤー個人のボード
///
/// 長さは生成時に決まり、以降変わらない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<BoardCell>,
}

impl Board {
    /// 並び順どおりのフレーズから、全マス未マークのボードを作成
    pub fn from_phrases(phrases: Vec<Phrase>) -> Self {
        Self {
            cells: phrases.into_iter().map(BoardCell::new).collect(),
        }
    }

    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 指定マスの marked を設定し、設定後の値を返す
    ///
    /// 範囲外の場合はどのマスも変更しない。
    pub fn set_marked(&mut self, index: CellIndex, marked: bool) -> Result<bool, DomainError> {
        let len = self.cells.len();
        let position = index
            .position_in(len)
            .ok_or(DomainError::CellOutOfBounds {
                index: index.value(),
                len,
            })?;
        self.cells[position].marked = marked;
        Ok(marked)
    }
}

/// プレイヤー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub username: Username,
    pub board: Board,
}

impl Player {
    pub fn new(id: PlayerId, username: Username, board: Board) -> Self {
        Self {
            id,
            username,
            board,
        }
    }
}

/// ゲームの設定
///
/// `room_code` が `None` の場合、ルームコードなしで誰でも参加できる。
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub room_code: Option<RoomCode>,
    pub topic: String,
    pub phrases: Vec<Phrase>,
}

impl GameConfig {
    pub fn new(room_code: Option<RoomCode>, topic: String, phrases: Vec<Phrase>) -> Self {
        Self {
            room_code,
            topic,
            phrases,
        }
    }

    /// 参加リクエストのルームコードが受け入れられるか
    pub fn accepts_room(&self, supplied: &str) -> bool {
        match &self.room_code {
            Some(room_code) => room_code.matches(supplied),
            None => true,
        }
    }
}

/// クライアントに返すゲーム状態（参加順のプレイヤー一覧とトピック）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub topic: String,
    pub players: Vec<Player>,
}
