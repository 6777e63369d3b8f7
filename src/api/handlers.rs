//! API handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::AppState;
use crate::types::Album;
use crate::Error;

/// List every album in insertion order
pub async fn list_albums(State(state): State<AppState>) -> IndentedJson<Vec<Album>> {
    IndentedJson(state.directory.list().await)
}

/// Fetch the first album with a matching id
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Album>, ApiError> {
    let album = state.directory.get(&id).await.map_err(|e| {
        tracing::debug!(%id, "Album lookup missed");
        ApiError::from(e)
    })?;

    Ok(IndentedJson(album))
}

/// Create an album from the request body
///
/// The body must be a JSON object and is parsed whatever its declared
/// content type.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, IndentedJson<Album>), ApiError> {
    let album = Album::from_json(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected album payload");
        ApiError::from(e)
    })?;

    let album = state.directory.create(album).await;
    tracing::info!(id = %album.id, title = %album.title, "Album created");

    Ok((StatusCode::CREATED, IndentedJson(album)))
}

/// JSON response body rendered with indentation
#[derive(Debug, Clone)]
pub struct IndentedJson<T>(pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(bytes) => (
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                bytes,
            )
                .into_response(),
            Err(err) => {
                let err = Error::internal(format!("failed to render response: {}", err));
                ApiError::from(err).into_response()
            }
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::AlbumNotFound(_) => ApiError::not_found("album not found"),
            Error::InvalidRequest(_) | Error::Serialization(_) => {
                ApiError::bad_request(err.to_string())
            }
            Error::Internal(_) => ApiError::internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "message": self.message });
        let body =
            serde_json::to_vec_pretty(&body).unwrap_or_else(|_| body.to_string().into_bytes());
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_fixed_message() {
        let err = ApiError::from(Error::not_found("42"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "album not found");
    }

    #[test]
    fn test_parse_error_maps_to_bad_request() {
        let parse_err = serde_json::from_str::<Album>("not json").unwrap_err();
        let err = ApiError::from(Error::from(parse_err));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message.starts_with("Serialization error"));
    }

    #[test]
    fn test_non_object_payload_maps_to_bad_request() {
        let err = ApiError::from(Album::from_json(b"[]").unwrap_err());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message.contains("JSON object"));
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        let err = ApiError::from(Error::internal("boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
