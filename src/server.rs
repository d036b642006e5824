//! HTTP adapter exposing the planner as `POST /generate_meals`.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::error::{PlannerError, Result};
use crate::models::MealPlanResponse;
use crate::request::MealPlanRequest;
use crate::service::MealPlanService;

impl IntoResponse for PlannerError {
    /// Every planning failure is reported as a 400 with `{"error": message}`.
    fn into_response(self) -> Response {
        if self.is_client_error() {
            warn!(error = %self, "request rejected");
        } else {
            error!(error = %self, "request failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

async fn generate_meals_handler(
    State(service): State<MealPlanService>,
    body: Bytes,
) -> std::result::Result<Json<MealPlanResponse>, PlannerError> {
    let request = MealPlanRequest::from_slice(&body)?;

    // Dataset providers may do blocking file I/O.
    let response = tokio::task::spawn_blocking(move || service.handle(&request))
        .await
        .map_err(|e| PlannerError::Internal(format!("planning task failed: {}", e)))??;

    Ok(Json(response))
}

/// Build the application router.
pub fn router(service: MealPlanService) -> Router {
    Router::new()
        .route("/generate_meals", post(generate_meals_handler))
        .route("/health", get(health_handler))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, service: MealPlanService) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, data_dir = %config.data_dir.display(), preload = config.preload, "meal planner listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
