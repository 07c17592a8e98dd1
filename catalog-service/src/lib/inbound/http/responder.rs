use std::io;

use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Output side of an HTTP exchange that error bodies are written to.
pub trait ResponseSink {
    fn set_status(&mut self, status: StatusCode);

    fn set_content_type(&mut self, content_type: &str);

    /// Append `body` to the response payload.
    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Writes authentication and authorization denials as `{"error": message}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorResponder;

impl ErrorResponder {
    /// Write a 401 denial to `sink`.
    ///
    /// # Errors
    /// Sink write failures are returned unchanged.
    pub fn respond_unauthorized<S>(sink: &mut S, message: &str) -> io::Result<()>
    where
        S: ResponseSink + ?Sized,
    {
        Self::respond(sink, StatusCode::UNAUTHORIZED, message)
    }

    /// Write a 403 denial to `sink`.
    ///
    /// # Errors
    /// Sink write failures are returned unchanged.
    pub fn respond_forbidden<S>(sink: &mut S, message: &str) -> io::Result<()>
    where
        S: ResponseSink + ?Sized,
    {
        Self::respond(sink, StatusCode::FORBIDDEN, message)
    }

    /// 401 response with the standard error body.
    pub fn unauthorized(message: &str) -> Response {
        Self::buffered(|sink| Self::respond_unauthorized(sink, message))
    }

    /// 403 response with the standard error body.
    pub fn forbidden(message: &str) -> Response {
        Self::buffered(|sink| Self::respond_forbidden(sink, message))
    }

    fn respond<S>(sink: &mut S, status: StatusCode, message: &str) -> io::Result<()>
    where
        S: ResponseSink + ?Sized,
    {
        let body = serde_json::to_vec(&ErrorBody { error: message })?;

        sink.set_status(status);
        sink.set_content_type(JSON_CONTENT_TYPE);
        sink.write_body(&body)
    }

    fn buffered(write: impl FnOnce(&mut BufferedResponse) -> io::Result<()>) -> Response {
        let mut sink = BufferedResponse::default();
        match write(&mut sink) {
            Ok(()) => sink.into_response(),
            Err(e) => {
                tracing::error!("Failed to write error response: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// In-memory sink that becomes an axum response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl Default for BufferedResponse {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            content_type: None,
            body: Vec::new(),
        }
    }
}

impl BufferedResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl ResponseSink for BufferedResponse {
    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.body.extend_from_slice(body);
        Ok(())
    }
}

impl IntoResponse for BufferedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;

        if let Some(content_type) = self.content_type {
            match HeaderValue::from_str(&content_type) {
                Ok(value) => {
                    response.headers_mut().insert(header::CONTENT_TYPE, value);
                }
                Err(e) => tracing::warn!("Dropping invalid content type {}: {}", content_type, e),
            }
        }

        response
    }
}
