//! Recruiter route handlers

use super::ApiPath;
use crate::db::{self, queries, QueryBuilder};
use crate::error::{not_found_error, ApiResult, DbResultExt};
use crate::models::{Recruiter, RecruiterPlacement};
use crate::state::SharedState;
use axum::{extract::State, routing::get, Json, Router};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_recruiters))
        .route("/{id}", get(get_recruiter))
        .route("/{id}/placements", get(get_placements))
}

/// List all recruiting companies
pub async fn list_recruiters(State(state): State<SharedState>) -> ApiResult<Json<Vec<Recruiter>>> {
    let query = QueryBuilder::new(queries::LIST_RECRUITERS)
        .order_by("company_name")
        .build();

    let recruiters = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| "fetching all recruiters".to_string())?;

    Ok(Json(recruiters))
}

pub async fn get_recruiter(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Recruiter>> {
    let query = QueryBuilder::new(queries::LIST_RECRUITERS)
        .eq("company_id", id)
        .build();

    db::fetch_optional(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching recruiter with ID {}", id))?
        .map(Json)
        .ok_or_else(|| not_found_error("Recruiter not found"))
}

/// Students placed at a company
pub async fn get_placements(
    State(state): State<SharedState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Vec<RecruiterPlacement>>> {
    let query = QueryBuilder::new(queries::RECRUITER_PLACEMENTS)
        .eq("p.company_id", id)
        .order_by("s.name")
        .build();

    let placements = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| format!("fetching placements for company ID {}", id))?;

    Ok(Json(placements))
}
