use crate::shared::api_utils::api_url;
use contracts::dashboards::d405_app_level_retn_rem::TabularDataset;
use gloo_net::http::Request;

const API_BASE: &str = "/api/d405/app_level_retn_rem";

/// Data source of the dashboard. The HTTP implementation is used in the
/// app; flows take the trait so they can run against an in-memory stub.
#[allow(async_fn_in_trait)]
pub trait RetnRemApi {
    /// Все приложения (application level)
    async fn fetch_app_level(&self) -> Result<TabularDataset, String>;

    /// Активы одного приложения (asset level)
    async fn fetch_asset_level(&self, appl_sys_id: &str) -> Result<TabularDataset, String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRetnRemApi;

pub fn app_level_path() -> String {
    API_BASE.to_string()
}

pub fn asset_level_path(appl_sys_id: &str) -> String {
    format!("{}/{}/assets", API_BASE, urlencoding::encode(appl_sys_id.trim()))
}

async fn get_dataset(url: &str) -> Result<TabularDataset, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: TabularDataset = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

impl RetnRemApi for HttpRetnRemApi {
    async fn fetch_app_level(&self) -> Result<TabularDataset, String> {
        get_dataset(&api_url(&app_level_path())).await
    }

    async fn fetch_asset_level(&self, appl_sys_id: &str) -> Result<TabularDataset, String> {
        get_dataset(&api_url(&asset_level_path(appl_sys_id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(app_level_path(), "/api/d405/app_level_retn_rem");
        assert_eq!(
            asset_level_path("14775"),
            "/api/d405/app_level_retn_rem/14775/assets"
        );
        assert_eq!(
            asset_level_path(" a/b "),
            "/api/d405/app_level_retn_rem/a%2Fb/assets"
        );
    }
}
