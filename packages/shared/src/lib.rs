//! Utilities shared by the bingo binaries.

pub mod logger;
