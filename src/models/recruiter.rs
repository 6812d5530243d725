//! Recruiter and placement projections

use serde::{Deserialize, Serialize};

/// A row of the Recruiters table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recruiter {
    pub company_id: i32,
    pub company_name: String,
    pub job_roles: Option<String>,
}

/// A placement at a company, with the placed student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruiterPlacement {
    pub placement_id: i32,
    pub student_id: i32,
    pub student_name: String,
    pub department: Option<String>,
    pub status: Option<String>,
    pub ctc_lpa: Option<f64>,
}
