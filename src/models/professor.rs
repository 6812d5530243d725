//! Professor projections

use super::empty_as_none;
use serde::{Deserialize, Serialize};

/// A row of the Professors table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    pub professor_id: i32,
    pub name: String,
    pub department: Option<String>,
}

/// Just the name, for the chat directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorName {
    pub name: String,
}

/// A course taught by a professor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaughtCourse {
    pub course_id: i32,
    pub course_name: String,
    pub credits: Option<i32>,
    pub department: Option<String>,
}

/// Filters for `GET /api/professors/{id}/schedule`
#[derive(Debug, Default, Deserialize)]
pub struct ProfessorScheduleQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub day: Option<String>,
}
