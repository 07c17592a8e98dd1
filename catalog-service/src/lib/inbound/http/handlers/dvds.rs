use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::dvd::models::Dvd;
use crate::domain::dvd::models::DvdFilter;
use crate::inbound::http::router::AppState;

pub async fn filter_dvds(
    State(state): State<AppState>,
    Json(body): Json<FilterDvdsRequest>,
) -> Result<ApiSuccess<Vec<Dvd>>, ApiError> {
    let total = body.dvds.len();
    let filtered = state.filters.apply(body.dvds, &body.criteria);

    tracing::debug!(total, matched = filtered.len(), "Filtered DVD listing");

    Ok(ApiSuccess::new(StatusCode::OK, filtered))
}

/// HTTP request body for filtering a DVD listing (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterDvdsRequest {
    dvds: Vec<Dvd>,
    #[serde(default)]
    criteria: DvdFilter,
}
