//! REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::AppState;
use crate::error::Error;
use crate::models::AggregatedProfile;

/// Uniform error body for every failure status.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Wraps the crate error for HTTP mapping: 400 for a missing handle, 404 for
/// an unknown user, 500 for everything else. The 500 message is generic on
/// purpose; upstream details stay in the logs.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self.0 {
            Error::MissingUsername => (
                StatusCode::BAD_REQUEST,
                "Missing username",
                "Please provide a GitHub username".to_string(),
            ),
            Error::UserNotFound(username) => (
                StatusCode::NOT_FOUND,
                "User not found",
                format!("GitHub user '{}' does not exist", username),
            ),
            err => {
                tracing::error!("Aggregation failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    "Failed to fetch GitHub data. Please try again later.".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

pub async fn user_stats(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<AggregatedProfile>, ApiError> {
    let profile = state.aggregator.aggregate_user(&username).await?;
    Ok(Json(profile))
}

/// `/api/github` without a handle segment.
pub async fn missing_username() -> ApiError {
    ApiError(Error::MissingUsername)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_username_maps_to_400() {
        let response = ApiError(Error::MissingUsername).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing username");
    }

    #[tokio::test]
    async fn test_unknown_user_maps_to_404_and_names_the_handle() {
        let response = ApiError(Error::UserNotFound("nobody".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "User not found");
        assert_eq!(body["message"], "GitHub user 'nobody' does not exist");
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_500_without_details() {
        let response =
            ApiError(Error::GitHubApi("503 from api.github.com".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(!body["message"].as_str().unwrap().contains("api.github.com"));
    }
}
