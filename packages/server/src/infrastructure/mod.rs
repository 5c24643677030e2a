//! Infrastructure 層
//!
//! ドメイン層の trait の具体的な実装と、外部とのデータ変換を提供します。

pub mod dto;
pub mod phrase_loader;
pub mod repository;
