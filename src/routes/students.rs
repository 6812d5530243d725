//! Student route handlers

use super::{ApiPath, ApiQuery};
use crate::db::{self, queries, QueryBuilder};
use crate::error::{not_found_error, ApiResult, DbResultExt};
use crate::models::{Enrollment, EnrollmentQuery, Meeting, Student, StudentPlacement, StudentScheduleQuery};
use crate::state::SharedState;
use axum::{extract::State, routing::get, Json, Router};
use tracing::debug;

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_students))
        .route("/{id}", get(get_student))
        .route("/{id}/schedule", get(get_schedule))
        .route("/{id}/enrollments", get(get_enrollments))
        .route("/{id}/placements", get(get_placements))
}

/// List all students
pub async fn list_students(State(state): State<SharedState>) -> ApiResult<Json<Vec<Student>>> {
    debug!("Listing all students");

    let query = QueryBuilder::new(queries::LIST_STUDENTS).build();
    let students = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| "fetching all students".to_string())?;

    Ok(Json(students))
}

/// Get a single student
pub async fn get_student(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Student>> {
    let query = QueryBuilder::new(queries::LIST_STUDENTS)
        .eq("student_id", id)
        .build();

    db::fetch_optional(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching student with ID {}", id))?
        .map(Json)
        .ok_or_else(|| not_found_error("Student not found"))
}

/// Weekly timetable of a student, optionally for one semester and/or day
pub async fn get_schedule(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(params): ApiQuery<StudentScheduleQuery>,
) -> ApiResult<Json<Vec<Meeting>>> {
    debug!("Fetching schedule for student {} with {:?}", id, params);

    let query = QueryBuilder::new(queries::STUDENT_SCHEDULE)
        .eq("e.student_id", id)
        .eq_opt("cs.semester_id", params.semester_id)
        .eq_opt("cs.day_of_week::text", params.day.clone())
        .order_by("cs.start_time")
        .build();

    let meetings = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching schedule for student ID {} ({:?})", id, params))?;

    Ok(Json(meetings))
}

/// Courses a student is enrolled in, oldest semester first
pub async fn get_enrollments(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(params): ApiQuery<EnrollmentQuery>,
) -> ApiResult<Json<Vec<Enrollment>>> {
    let query = QueryBuilder::new(queries::STUDENT_ENROLLMENTS)
        .eq("e.student_id", id)
        .eq_opt("e.semester_id", params.semester_id)
        .order_by("s.start_date, c.course_name")
        .build();

    let enrollments = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching enrollments for student ID {} ({:?})", id, params))?;

    Ok(Json(enrollments))
}

/// Placement offers received by a student
pub async fn get_placements(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Vec<StudentPlacement>>> {
    let query = QueryBuilder::new(queries::STUDENT_PLACEMENTS)
        .eq("p.student_id", id)
        .order_by("r.company_name")
        .build();

    let placements = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching placements for student ID {}", id))?;

    Ok(Json(placements))
}

#[cfg(test)]
mod tests {
    use super::super::testutils::get;
    use crate::db::query::SqlParam;
    use crate::db::testutils::FakeExecutor;
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn alice() -> serde_json::Value {
        json!({"student_id": 1, "name": "Alice", "department": "CSE"})
    }

    #[tokio::test]
    async fn test_list_students() {
        let executor = Arc::new(FakeExecutor::with_rows(json!([alice()])));
        let response = get(executor.clone(), "/api/students").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json(), json!([alice()]));
        assert!(executor.queries()[0].params().is_empty());
    }

    #[tokio::test]
    async fn test_get_student_binds_id() {
        let executor = Arc::new(FakeExecutor::with_rows(json!([alice()])));
        let response = get(executor.clone(), "/api/students/1").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json(), alice());

        let queries = executor.queries();
        assert!(queries[0].sql().contains("WHERE student_id = $1"));
        assert_eq!(queries[0].params(), &[SqlParam::Int(1)]);
    }

    #[tokio::test]
    async fn test_get_missing_student() {
        let response = get(Arc::new(FakeExecutor::empty()), "/api/students/99").await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.json(), json!({"error": "Student not found"}));
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected_before_query() {
        let executor = Arc::new(FakeExecutor::empty());
        let response = get(executor.clone(), "/api/students/abc").await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.json()["error"].is_string());
        assert!(executor.queries().is_empty());
    }

    #[tokio::test]
    async fn test_database_failure_is_generic() {
        let response = get(Arc::new(FakeExecutor::failing()), "/api/students/1").await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, "Server error");
    }

    #[tokio::test]
    async fn test_schedule_without_filters() {
        let executor = Arc::new(FakeExecutor::with_rows(json!([{
            "course_name": "Operating Systems",
            "day_of_week": "Monday",
            "start_time": "09:00:00",
            "end_time": "10:00:00",
            "room": "LH-1",
        }])));
        let response = get(executor.clone(), "/api/students/1/schedule").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json()[0]["course_name"], "Operating Systems");

        let query = &executor.queries()[0];
        assert_eq!(query.params(), &[SqlParam::Int(1)]);
        assert!(!query.sql().contains("semester_id ="));
        assert!(query.sql().ends_with("ORDER BY cs.start_time"));
    }

    #[tokio::test]
    async fn test_schedule_filters_are_additive() {
        let executor = Arc::new(FakeExecutor::empty());
        get(executor.clone(), "/api/students/1/schedule?day=Friday").await;
        get(executor.clone(), "/api/students/1/schedule?semester_id=3&day=Friday").await;

        let queries = executor.queries();
        assert!(queries[0].sql().contains("AND cs.day_of_week::text = $2"));
        assert_eq!(
            queries[0].params(),
            &[SqlParam::Int(1), SqlParam::Text("Friday".to_string())]
        );

        assert!(queries[1].sql().contains("AND cs.semester_id = $2"));
        assert!(queries[1].sql().contains("AND cs.day_of_week::text = $3"));
        assert_eq!(
            queries[1].params(),
            &[SqlParam::Int(1), SqlParam::Int(3), SqlParam::Text("Friday".to_string())]
        );
    }

    #[tokio::test]
    async fn test_enrollments_for_one_semester() {
        let executor = Arc::new(FakeExecutor::with_rows(json!([
            {"course_name": "Compilers", "semester_name": "Fall 2024"},
        ])));
        let response = get(executor.clone(), "/api/students/7/enrollments?semester_id=2").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.json(),
            json!([{"course_name": "Compilers", "semester_name": "Fall 2024"}])
        );

        let query = &executor.queries()[0];
        assert!(query.sql().contains("AND e.semester_id = $2"));
        assert!(query.sql().ends_with("ORDER BY s.start_date, c.course_name"));
        assert_eq!(query.params(), &[SqlParam::Int(7), SqlParam::Int(2)]);
    }

    #[tokio::test]
    async fn test_empty_semester_filter_is_ignored() {
        let executor = Arc::new(FakeExecutor::empty());
        let response = get(executor.clone(), "/api/students/7/enrollments?semester_id=").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(executor.queries()[0].params(), &[SqlParam::Int(7)]);
    }

    #[tokio::test]
    async fn test_placements() {
        let executor = Arc::new(FakeExecutor::with_rows(json!([
            {"company_name": "Acme", "status": "Placed", "ctc_lpa": 12.5},
        ])));
        let response = get(executor.clone(), "/api/students/1/placements").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json()[0]["ctc_lpa"], 12.5);
        assert!(executor.queries()[0].sql().ends_with("ORDER BY r.company_name"));
    }
}
