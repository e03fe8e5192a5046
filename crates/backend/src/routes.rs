use axum::{routing::get, Router};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D405 Application level retention remediation
        .route(
            "/api/d405/app_level_retn_rem",
            get(handlers::d405_app_level_retn_rem::get_app_level),
        )
        .route(
            "/api/d405/app_level_retn_rem/:appl_sys_id/assets",
            get(handlers::d405_app_level_retn_rem::get_asset_level),
        )
}
