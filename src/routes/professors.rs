//! Professor route handlers

use super::{ApiPath, ApiQuery};
use crate::db::{self, queries, QueryBuilder};
use crate::error::{not_found_error, ApiResult, DbResultExt};
use crate::models::{Meeting, Professor, ProfessorScheduleQuery, Student, TaughtCourse};
use crate::state::SharedState;
use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, info};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_professors))
        .route("/{id}", get(get_professor))
        .route("/{id}/courses", get(get_courses))
        .route("/{id}/schedule", get(get_schedule))
        .route("/{id}/courses/{course_id}/students", get(get_course_students))
}

/// List all professors
pub async fn list_professors(State(state): State<SharedState>) -> ApiResult<Json<Vec<Professor>>> {
    let query = QueryBuilder::new(queries::LIST_PROFESSORS).build();
    let professors = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| "fetching all professors".to_string())?;

    Ok(Json(professors))
}

/// Get a single professor
pub async fn get_professor(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Professor>> {
    let query = QueryBuilder::new(queries::LIST_PROFESSORS)
        .eq("professor_id", id)
        .build();

    db::fetch_optional(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching professor with ID {}", id))?
        .map(Json)
        .ok_or_else(|| not_found_error("Professor not found"))
}

/// Courses taught by a professor
pub async fn get_courses(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Vec<TaughtCourse>>> {
    let query = QueryBuilder::new(queries::PROFESSOR_COURSES)
        .eq("professor_id", id)
        .order_by("course_name")
        .build();

    let courses = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching courses for professor ID {}", id))?;

    Ok(Json(courses))
}

/// Teaching timetable of a professor, optionally for one day
pub async fn get_schedule(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(params): ApiQuery<ProfessorScheduleQuery>,
) -> ApiResult<Json<Vec<Meeting>>> {
    debug!("Fetching schedule for professor {} with {:?}", id, params);

    let query = QueryBuilder::new(queries::PROFESSOR_SCHEDULE)
        .eq("c.professor_id", id)
        .eq_opt("cs.day_of_week::text", params.day.clone())
        .order_by("cs.start_time")
        .build();

    let meetings = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching schedule for professor ID {} ({:?})", id, params))?;

    Ok(Json(meetings))
}

/// Students enrolled in one of the professor's courses.
///
/// A course that belongs to someone else yields an empty list rather than an
/// error.
pub async fn get_course_students(
    State(state): State<SharedState>,
    ApiPath((id, course_id)): ApiPath<(i32, i32)>,
) -> ApiResult<Json<Vec<Student>>> {
    let query = QueryBuilder::new(queries::COURSE_ROSTER)
        .predicate(|q| {
            let course = q.bind(course_id);
            let professor = q.bind(id);
            format!(
                "e.course_id = {course}
        AND EXISTS (
            SELECT 1 FROM Courses
            WHERE course_id = {course} AND professor_id = {professor}
        )"
            )
        })
        .build();

    let students: Vec<Student> = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching students for course ID {} of professor ID {}", course_id, id))?;

    info!("Course {} of professor {} has {} students", course_id, id, students.len());
    Ok(Json(students))
}
