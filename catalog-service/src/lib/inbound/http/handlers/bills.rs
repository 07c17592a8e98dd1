use axum::extract::Path;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use super::ApiError;
use crate::domain::billing::models::BillKind;
use crate::domain::billing::models::Rental;
use crate::inbound::http::router::AppState;

/// Generate a bill document for a settled rental and return it as an attachment.
pub async fn generate_bill(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(rental): Json<Rental>,
) -> Result<Response, ApiError> {
    let kind: BillKind = kind.parse().map_err(ApiError::BadRequest)?;

    let bill = state.billing.generate(kind, &rental)?;
    let disposition = format!("attachment; filename=\"{}\"", bill.filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, bill.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bill.bytes,
    )
        .into_response())
}
