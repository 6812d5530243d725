//! Data models and DTOs (Data Transfer Objects)
//!
//! Row projections returned by the API and the query-string parameters the
//! routes accept.

pub mod course;
pub mod professor;
pub mod recruiter;
pub mod student;

// Re-export commonly used types
pub use course::*;
pub use professor::*;
pub use recruiter::*;
pub use student::*;

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Deserializes an optional query-string value, treating `?key=` like an
/// absent key.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
