//! Chat directory: the names of every professor

use crate::db::{self, queries, QueryBuilder};
use crate::error::{ApiResult, DbResultExt};
use crate::models::ProfessorName;
use crate::state::SharedState;
use axum::{extract::State, routing::get, Json, Router};

pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(list_professor_names))
}

pub async fn list_professor_names(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<ProfessorName>>> {
    let query = QueryBuilder::new(queries::PROFESSOR_NAMES).build();
    let names = db::fetch_all(state.executor.as_ref(), &query)
        .await
        .with_context(|| "fetching professor names".to_string())?;

    Ok(Json(names))
}
