use anyhow::Result;
use contracts::dashboards::d405_app_level_retn_rem::columns::{
    column_names, APP_LEVEL_COLUMNS, ASSET_LEVEL_COLUMNS,
};
use contracts::dashboards::d405_app_level_retn_rem::TabularDataset;
use sea_orm::ConnectionTrait;

use super::repository;

/// Application level report (all applications)
pub async fn get_app_level_report<C: ConnectionTrait>(db: &C) -> Result<TabularDataset> {
    let rows = repository::fetch_app_level(db).await?;
    Ok(TabularDataset::new(column_names(APP_LEVEL_COLUMNS), rows))
}

/// Asset level report of one application
pub async fn get_asset_level_report<C: ConnectionTrait>(
    db: &C,
    appl_sys_id: i64,
) -> Result<TabularDataset> {
    let rows = repository::fetch_asset_level(db, appl_sys_id).await?;
    Ok(TabularDataset::new(column_names(ASSET_LEVEL_COLUMNS), rows))
}

/// Path parameter -> application id (ids are numeric in the asset table)
pub fn parse_appl_sys_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
