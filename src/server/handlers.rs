//! HTTP request handlers

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::RouterError;
use crate::llm::{LlmClient, ToolDefinition};
use crate::router::RouteDecision;

use super::AppState;

/// Query string for `GET /execute`
#[derive(Debug, Deserialize)]
pub struct ExecuteParams {
    pub q: String,
}

/// Routing failure rendered as a JSON error body
#[derive(Debug)]
pub struct ApiError(pub RouterError);

impl From<RouterError> for ApiError {
    fn from(err: RouterError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// `GET /` liveness check
pub async fn root() -> Json<Value> {
    Json(json!({ "status": "running" }))
}

/// `GET /execute?q=...`
pub async fn execute<C: LlmClient + 'static>(
    State(state): State<AppState<C>>,
    Query(params): Query<ExecuteParams>,
) -> Result<Json<RouteDecision>, ApiError> {
    match state.router.route(&params.q).await {
        Ok(decision) => Ok(Json(decision)),
        Err(e) => {
            tracing::warn!(error = %e, "Routing failed");
            Err(ApiError(e))
        }
    }
}

/// `GET /tools` - the catalog as sent to the model
pub async fn tools<C: LlmClient + 'static>(State(state): State<AppState<C>>) -> Json<Vec<ToolDefinition>> {
    Json(state.router.catalog().to_llm_definitions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_maps_to_bad_gateway() {
        let err = ApiError(RouterError::Upstream("timeout".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_no_decision_maps_to_bad_gateway() {
        let err = ApiError(RouterError::NoDecision("empty".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_other_errors_map_to_internal() {
        let err: ApiError = RouterError::Config("bad".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_root_body() {
        let Json(body) = root().await;
        assert_eq!(body, json!({"status": "running"}));
    }
}
