//! Multiplayer bingo server library.
//!
//! Players join with a username, receive a board built from a personal
//! shuffle of the shared phrase list and mark cells independently. The browser
//! client polls the game state over HTTP.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
