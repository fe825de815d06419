use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use snafu::Snafu;

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub))]
pub enum ApiError {
    #[snafu(display("there is no slide {index}, the journey has {len}"))]
    SlideNotFound { index: usize, len: usize },

    #[snafu(display("carousel state points at slide {index} but the journey has {len}"))]
    InvalidCarouselState { index: usize, len: usize },

    /// The request body, query or path could not be read
    #[snafu(display("{message}"))]
    InvalidRequest { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SlideNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidCarouselState { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidRequest { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request failed: {}", self);
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_keeps_its_status() {
        let error = InvalidRequestSnafu {
            status: StatusCode::BAD_REQUEST,
            message: "missing field `url`",
        }
        .build();

        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "missing field `url`");
    }
}
