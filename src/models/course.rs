//! Course and schedule projections

use super::empty_as_none;
use serde::{Deserialize, Serialize};

/// A course in the catalogue listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub course_id: i32,
    pub course_name: String,
    pub credits: Option<i32>,
    pub department: Option<String>,
    pub professor_name: Option<String>,
}

/// A single course with its (optional) professor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetail {
    pub course_id: i32,
    pub course_name: String,
    pub credits: Option<i32>,
    pub department: Option<String>,
    pub professor_id: Option<i32>,
    pub professor_name: Option<String>,
}

/// A course name search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseMatch {
    pub course_id: i32,
    pub course_name: String,
    pub department: Option<String>,
}

/// A weekly meeting of some course, as listed on a personal timetable.
///
/// Times are `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub course_name: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub room: Option<String>,
}

/// A weekly meeting slot of a known course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub room: Option<String>,
}

/// Filters for `GET /api/courses`
#[derive(Debug, Default, Deserialize)]
pub struct CourseListQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub department: Option<String>,
}

/// Parameters for `GET /api/courses/{id}/schedule`; semester_id is required
#[derive(Debug, Default, Deserialize)]
pub struct CourseScheduleQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub semester_id: Option<i32>,
}

/// Parameters for `GET /api/courses/search`; q is required
#[derive(Debug, Default, Deserialize)]
pub struct CourseSearchQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub q: Option<String>,
}
