//! Router definition

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{health_check, post_word_analysis};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// CORS is fully open: the client app is served from a different origin.
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// Configured Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/api/word-analysis", post(post_word_analysis))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// Starts the server
///
/// Runs until Ctrl-C (or SIGTERM on Unix), then drains in-flight requests.
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if the server fails to bind or serve
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("백엔드 서버 실행 중: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  tracing::info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }

  tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use async_trait::async_trait;
  use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
  };
  use tower::ServiceExt;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::{WordAnalysisRequest, WordAnalysisResponse};
  use crate::service::WordAnalysisApiService;

  /// Test dummy (never touches the network)
  struct DummyService;

  #[async_trait]
  impl WordAnalysisApiService for DummyService {
    async fn analyze(&self, _request: WordAnalysisRequest) -> ApiResult<WordAnalysisResponse> {
      Ok(WordAnalysisResponse {
        meaning: String::new(),
        phonics: String::new(),
        syllables: String::new(),
        pronunciation_guide: Vec::new(),
      })
    }
  }

  fn create_test_state() -> AppState {
    let config = Config::from_lookup(|_| None).unwrap();
    let service = Arc::new(DummyService) as Arc<dyn WordAnalysisApiService>;
    AppState::new(config, service)
  }

  #[test]
  fn test_router_creation() {
    let state = create_test_state();
    let _router = create_router(state);
  }

  #[tokio::test]
  async fn cors_preflight_is_allowed() {
    let router = create_router(create_test_state());

    let response = router
      .oneshot(
        Request::builder()
          .method(Method::OPTIONS)
          .uri("/api/word-analysis")
          .header(header::ORIGIN, "http://localhost:3000")
          .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();

    assert!(response.status().is_success());
    let allow_origin = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap();
    assert_eq!(allow_origin.to_str().unwrap(), "*");
  }

  #[tokio::test]
  async fn unknown_route_is_not_found() {
    let router = create_router(create_test_state());

    let response = router
      .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
      .await
      .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }
}
