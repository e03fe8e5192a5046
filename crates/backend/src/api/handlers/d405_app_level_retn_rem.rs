use axum::{extract::Path, http::StatusCode, Json};
use contracts::dashboards::d405_app_level_retn_rem::TabularDataset;

use crate::dashboards::d405_app_level_retn_rem::service;
use crate::shared::data::db::get_connection;

/// GET /api/d405/app_level_retn_rem
pub async fn get_app_level() -> Result<Json<TabularDataset>, StatusCode> {
    match service::get_app_level_report(get_connection()).await {
        Ok(report) => {
            tracing::info!("D405: Returning {} application rows", report.len());
            Ok(Json(report))
        }
        Err(e) => {
            tracing::error!("D405: Failed to load application level report: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/d405/app_level_retn_rem/:appl_sys_id/assets
pub async fn get_asset_level(
    Path(appl_sys_id): Path<String>,
) -> Result<Json<TabularDataset>, StatusCode> {
    let Some(id) = service::parse_appl_sys_id(&appl_sys_id) else {
        tracing::warn!("D405: Rejecting non-numeric application id '{}'", appl_sys_id);
        return Err(StatusCode::BAD_REQUEST);
    };

    match service::get_asset_level_report(get_connection(), id).await {
        Ok(report) => {
            tracing::info!("D405: Returning {} asset rows for application {}", report.len(), id);
            Ok(Json(report))
        }
        Err(e) => {
            tracing::error!("D405: Failed to load assets for application {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
