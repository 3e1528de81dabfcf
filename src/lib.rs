//! OneClickToKnow API Server Library
//!
//! This library exports the modules used by the server binary: the
//! explanation relay handlers, the OpenAI completion client, configuration,
//! and error types.

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

// Re-export commonly used types for convenience
pub use config::AppSettings;
pub use error::AppError;
