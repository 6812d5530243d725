//! Course route handlers

use super::{ApiPath, ApiQuery};
use crate::db::{self, queries, QueryBuilder};
use crate::error::{not_found_error, validation_error, ApiResult, DbResultExt};
use crate::models::{
    CourseDetail, CourseListQuery, CourseMatch, CourseScheduleQuery, CourseSearchQuery,
    CourseSummary, ScheduleSlot,
};
use crate::state::SharedState;
use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, info};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/search", get(search_courses))
        .route("/{id}", get(get_course))
        .route("/{id}/schedule", get(get_schedule))
}

/// List courses, optionally for one department
pub async fn list_courses(
    State(state): State<SharedState>,
    ApiQuery(params): ApiQuery<CourseListQuery>,
) -> ApiResult<Json<Vec<CourseSummary>>> {
    let query = QueryBuilder::new(queries::LIST_COURSES)
        .eq_opt("c.department", params.department.clone())
        .order_by("c.course_name")
        .build();

    let courses: Vec<CourseSummary> = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching all courses ({:?})", params))?;

    debug!("Listed {} courses", courses.len());
    Ok(Json(courses))
}

/// Get a single course with its professor
pub async fn get_course(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<CourseDetail>> {
    let query = QueryBuilder::new(queries::COURSE_DETAIL)
        .eq("c.course_id", id)
        .build();

    db::fetch_optional(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching course with ID {}", id))?
        .map(Json)
        .ok_or_else(|| not_found_error("Course not found"))
}

/// Weekly slots of a course in a semester, Monday first
pub async fn get_schedule(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(params): ApiQuery<CourseScheduleQuery>,
) -> ApiResult<Json<Vec<ScheduleSlot>>> {
    let semester_id = params
        .semester_id
        .ok_or_else(|| validation_error("A semester_id query parameter is required."))?;

    let query = QueryBuilder::new(queries::COURSE_SCHEDULE)
        .eq("course_id", id)
        .eq("semester_id", semester_id)
        .order_by(&format!("{}, start_time", queries::WEEKDAY_RANK))
        .build();

    let slots = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching schedule for course ID {} in semester {}", id, semester_id))?;

    Ok(Json(slots))
}

/// Case-insensitive search on course names
pub async fn search_courses(
    State(state): State<SharedState>,
    ApiQuery(params): ApiQuery<CourseSearchQuery>,
) -> ApiResult<Json<Vec<CourseMatch>>> {
    let needle = params
        .q
        .ok_or_else(|| validation_error("A search query parameter 'q' is required."))?;

    let query = QueryBuilder::new(queries::SEARCH_COURSES)
        .contains_ignore_case("course_name", &needle)
        .order_by("course_name")
        .build();

    let matches: Vec<CourseMatch> = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("searching for courses with query {:?}", needle))?;

    info!("Course search {:?} matched {} courses", needle, matches.len());
    Ok(Json(matches))
}
