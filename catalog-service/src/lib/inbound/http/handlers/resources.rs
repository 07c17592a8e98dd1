use std::sync::Arc;

use axum::extract::Path;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::resource::models::ImageType;
use crate::domain::resource::models::Resource;
use crate::inbound::http::router::AppState;

pub async fn get_poster(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    serve(state, ImageType::Poster, filename, &headers).await
}

pub async fn get_avatar(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    serve(state, ImageType::Avatar, filename, &headers).await
}

pub async fn upload_poster(
    State(state): State<AppState>,
    Json(body): Json<UploadPosterRequest>,
) -> Result<ApiSuccess<UploadPosterResponseData>, ApiError> {
    let resources = Arc::clone(&state.resources);
    let filename =
        tokio::task::spawn_blocking(move || resources.save_poster(&body.image)).await??;

    let url = state.resources.poster_url(&filename).unwrap_or_default();

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        UploadPosterResponseData { filename, url },
    ))
}

async fn serve(
    state: AppState,
    image_type: ImageType,
    filename: String,
    headers: &HeaderMap,
) -> Result<Response, ApiError> {
    let resources = Arc::clone(&state.resources);
    let resource =
        tokio::task::spawn_blocking(move || resources.get(image_type, &filename)).await??;

    let not_modified = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|tags| tags.split(',').any(|tag| tag.trim() == resource.etag));

    Ok(image_response(resource, not_modified))
}

fn image_response(resource: Resource, not_modified: bool) -> Response {
    let disposition = format!("inline; filename=\"{}\"", resource.filename);
    let last_modified = resource
        .last_modified
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string();
    let caching = [
        (header::ETAG, resource.etag),
        (header::CACHE_CONTROL, resource.cache_control),
        (header::LAST_MODIFIED, last_modified),
    ];

    if not_modified {
        return (StatusCode::NOT_MODIFIED, caching).into_response();
    }

    (
        StatusCode::OK,
        caching,
        [
            (header::CONTENT_TYPE, resource.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        resource.bytes,
    )
        .into_response()
}

/// HTTP request body for uploading a poster (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadPosterRequest {
    /// `data:image/<type>;base64,<payload>`
    image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadPosterResponseData {
    pub filename: String,
    pub url: String,
}
