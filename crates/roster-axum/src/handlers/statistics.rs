//! Statistics handler - head counts per country and city.

use axum::Json;
use axum::extract::State;

use crate::error::HttpError;
use crate::state::AppState;
use roster_core::Statistics;

/// Get country/city head counts and the total.
pub async fn get(State(state): State<AppState>) -> Result<Json<Statistics>, HttpError> {
    Ok(Json(state.roster.statistics().await?))
}
