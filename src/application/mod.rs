// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above the domain and never changes it
// - Turns external input (JSON) into validated domain values
// - Turns errors into responses an outer layer can expose

pub mod error_handling;
pub mod import;

pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use import::{import_resolutions, parse_resolution};
