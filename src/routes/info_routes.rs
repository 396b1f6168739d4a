use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use serde::Serialize;
use tracing::{debug, error};

pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/info", get(info_check))
}

pub async fn info_check() -> Response {
    match crate::utils::conf_helper::get_cached_config() {
        Some(config) => {
            debug!("{} info requested", config.name);
            Json(config).into_response()
        }
        None => {
            error!("Info requested before config was initialized");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

async fn health_check() -> Response {
    Json(HealthStatus {
        status: "ok".to_owned(),
    })
    .into_response()
}

#[derive(Serialize)]
pub struct HealthStatus {
    status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let resp = health_check().await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_info_before_init() {
        let resp = info_check().await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
