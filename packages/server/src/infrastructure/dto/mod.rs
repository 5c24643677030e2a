//! Data Transfer Objects (DTOs) for the bingo HTTP API.
//!
//! - `http`: query parameters and JSON response bodies
//! - `conversion`: domain entity → DTO conversions

pub mod conversion;
pub mod http;
