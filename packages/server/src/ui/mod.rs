//! HTTP server for the bingo game.

pub mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
