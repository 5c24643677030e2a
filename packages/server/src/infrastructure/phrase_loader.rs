//! フレーズファイルの読み込み
//!
//! 1 行 1 フレーズのテキストファイルを起動時に読み込みます。空行も 1 つのフレーズです。

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::Phrase;

/// フレーズファイルの読み込みエラー
#[derive(Debug, Error)]
pub enum PhraseLoadError {
    #[error("failed to read phrases file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// ファイルからフレーズをファイル内の順序どおりに読み込む
///
/// 行末の `\n` / `\r\n` は取り除かれ、末尾の改行は余分な空フレーズを生まない。
/// UTF-8 として不正なバイト列は U+FFFD に置き換えて読み込む。
pub async fn load_phrases(path: impl AsRef<Path>) -> Result<Vec<Phrase>, PhraseLoadError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| PhraseLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse_phrases(&String::from_utf8_lossy(&bytes)))
}

/// テキストを行ごとのフレーズに分割する
pub fn parse_phrases(contents: &str) -> Vec<Phrase> {
    contents.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "bingo-phrases-{}-{}.txt",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_phrases_keeps_order_and_empty_lines() {
        // テスト項目: 順序と空行が保持される
        // given (前提条件):
        let contents = "A\n\nB\nC\n";

        // when (操作):
        let phrases = parse_phrases(contents);

        // then (期待する結果):
        assert_eq!(phrases, vec!["A", "", "B", "C"]);
    }

    #[test]
    fn test_parse_phrases_handles_crlf_and_missing_trailing_newline() {
        // テスト項目: CRLF が取り除かれ、末尾改行がなくても最終行が読まれる
        // given (前提条件):
        let contents = "first\r\nsecond\r\nthird";

        // when (操作):
        let phrases = parse_phrases(contents);

        // then (期待する結果):
        assert_eq!(phrases, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_parse_phrases_keeps_duplicates() {
        // テスト項目: 重複したフレーズは別々のマスとして残る
        // given (前提条件):
        let contents = "same\nsame\n";

        // when (操作):
        let phrases = parse_phrases(contents);

        // then (期待する結果):
        assert_eq!(phrases, vec!["same", "same"]);
    }

    #[tokio::test]
    async fn test_load_phrases_from_file() {
        // テスト項目: ファイルからフレーズを読み込める
        // given (前提条件):
        let path = temp_file("load", "Free space\nSomeone is late\nMic is muted\n");

        // when (操作):
        let result = load_phrases(&path).await;

        // then (期待する結果):
        let _ = std::fs::remove_file(&path);
        assert_eq!(
            result.unwrap(),
            vec!["Free space", "Someone is late", "Mic is muted"]
        );
    }

    #[tokio::test]
    async fn test_load_phrases_missing_file() {
        // テスト項目: 存在しないファイルは I/O エラーになる
        // given (前提条件):
        let path = std::env::temp_dir().join("bingo-phrases-does-not-exist.txt");

        // when (操作):
        let result = load_phrases(&path).await;

        // then (期待する結果):
        let err = result.unwrap_err();
        assert!(matches!(err, PhraseLoadError::Io { .. }));
        assert!(err.to_string().contains("bingo-phrases-does-not-exist.txt"));
    }

    #[tokio::test]
    async fn test_load_phrases_with_invalid_utf8() {
        // テスト項目: UTF-8 として不正なバイトを含むファイルも読み込める
        // given (前提条件):
        let path = temp_file("latin1", b"caf\xe9\nplain\n");

        // when (操作):
        let result = load_phrases(&path).await;

        // then (期待する結果):
        let _ = std::fs::remove_file(&path);
        assert_eq!(result.unwrap(), vec!["caf\u{FFFD}", "plain"]);
    }
}
