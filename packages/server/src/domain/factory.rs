//! Factory: 識別子の生成

use uuid::Uuid;

use super::value_object::PlayerId;

/// PlayerId の生成を担う Factory
///
/// UUID v4 を使うため衝突確率は無視できる。既存 ID との重複チェックは行わない。
pub struct PlayerIdFactory;

impl PlayerIdFactory {
    pub fn generate() -> PlayerId {
        PlayerId::from_generated(Uuid::new_v4().to_string())
    }
}
