// src/error/mod.rs
//
// Crate boundary errors

pub mod types;

pub use types::{AppError, AppResult};
