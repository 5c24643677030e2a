//! ドメイン層
//!
//! ビンゴのプレイヤー・ボード・セルと、それらを扱うためのルールを定義します。
//! 他の層には依存しません。

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod shuffler;
pub mod value_object;

pub use entity::{Board, BoardCell, GameConfig, GameState, Player};
pub use error::{DomainError, RepositoryError, ValueObjectError};
pub use factory::PlayerIdFactory;
pub use repository::PlayerRepository;
pub use shuffler::{shuffle_phrases, shuffle_phrases_with};
pub use value_object::{CellIndex, Phrase, PlayerId, RoomCode, Username};

#[cfg(test)]
pub use repository::MockPlayerRepository;
