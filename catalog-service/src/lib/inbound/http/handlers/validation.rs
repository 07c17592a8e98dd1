use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::validation::models::FieldValue;
use crate::domain::validation::models::ValidationFieldKind;
use crate::inbound::http::router::AppState;

pub async fn validate_field(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Json(body): Json<ValidateFieldRequest>,
) -> Result<ApiSuccess<ValidateFieldResponseData>, ApiError> {
    let field: ValidationFieldKind = field.parse().map_err(ApiError::BadRequest)?;

    state
        .validator
        .validate(field, &body.value)
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ValidateFieldResponseData { field, valid: true }))
}

/// HTTP request body for validating one field value
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidateFieldRequest {
    #[serde(default)]
    value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateFieldResponseData {
    pub field: ValidationFieldKind,
    pub valid: bool,
}
