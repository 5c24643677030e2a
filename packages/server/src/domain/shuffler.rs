//! フレーズのシャッフル
//!
//! プレイヤーごとに独立した一様ランダムな並びを作る。

use rand::{Rng, seq::SliceRandom};

use super::value_object::Phrase;

/// スレッドローカルな乱数生成器でフレーズを並び替えた新しい Vec を返す
///
/// 入力は変更しない。
pub fn shuffle_phrases(phrases: &[Phrase]) -> Vec<Phrase> {
    shuffle_phrases_with(phrases, &mut rand::thread_rng())
}

/// 指定した乱数生成器でフレーズを並び替えた新しい Vec を返す
pub fn shuffle_phrases_with<R: Rng + ?Sized>(phrases: &[Phrase], rng: &mut R) -> Vec<Phrase> {
    let mut shuffled = phrases.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
