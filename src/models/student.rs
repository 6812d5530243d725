//! Student projections

use super::empty_as_none;
use serde::{Deserialize, Serialize};

/// A row of the Students table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: i32,
    pub name: String,
    pub department: Option<String>,
}

/// A course the student is enrolled in and the semester it was taken in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub course_name: String,
    pub semester_name: String,
}

/// A placement offer as seen from the student's side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPlacement {
    pub company_name: String,
    pub status: Option<String>,
    /// Offered CTC in lakhs per annum
    pub ctc_lpa: Option<f64>,
}

/// Filters for `GET /api/students/{id}/schedule`
#[derive(Debug, Default, Deserialize)]
pub struct StudentScheduleQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub semester_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub day: Option<String>,
}

/// Filters for `GET /api/students/{id}/enrollments`
#[derive(Debug, Default, Deserialize)]
pub struct EnrollmentQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub semester_id: Option<i32>,
}
