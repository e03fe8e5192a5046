//! Async flows of the dashboard: initial load and detail lookup.
//!
//! Flows return a [`FetchOutcome`] instead of touching signals, so the
//! component decides what to mutate and the flows run against any
//! [`RetnRemApi`] in tests.

use crate::dashboards::d405_app_level_retn_rem::api::RetnRemApi;
use chrono::{DateTime, Utc};
use contracts::dashboards::d405_app_level_retn_rem::{ExportTable, TabularDataset};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const DASHBOARD_TITLE: &str = "Retention Remediation Dashboard";
pub const APP_LEVEL_REPORT: &str = "app_level_retn_rem";
pub const ASSET_LEVEL_REPORT: &str = "asset_level_retn_rem";

/// Cleared when the owning component is torn down; completions check it
/// before applying their result.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(T),
    Failed(String),
    /// Completed after unmount; nothing may be applied
    Detached,
}

impl<T> FetchOutcome<T> {
    /// Result to feed into state, `None` once detached
    pub fn into_result(self) -> Option<Result<T, String>> {
        match self {
            FetchOutcome::Loaded(v) => Some(Ok(v)),
            FetchOutcome::Failed(e) => Some(Err(e)),
            FetchOutcome::Detached => None,
        }
    }
}

pub fn detail_path(appl_sys_id: &str) -> String {
    format!("/app-level-retn-rem/{}", urlencoding::encode(appl_sys_id))
}

/// `{report}_{YYYYMMDD_HHMMSS}.{ext}`
pub fn export_file_name(report: &str, extension: &str, now: DateTime<Utc>) -> String {
    format!("{}_{}.{}", report, now.format("%Y%m%d_%H%M%S"), extension)
}

/// Export payload, or `None` with a warning when there are no rows.
/// Also covers clicks made before the data arrived.
pub fn exportable(table: ExportTable) -> Option<ExportTable> {
    if table.is_empty() {
        log::warn!("D405: nothing to export");
        return None;
    }
    Some(table)
}

/// Initial application level load
pub async fn load_app_level<A: RetnRemApi>(
    api: &A,
    guard: &MountGuard,
) -> FetchOutcome<TabularDataset> {
    log::info!("D405: loading application level report");
    let result = api.fetch_app_level().await;

    if !guard.is_mounted() {
        log::debug!("D405: dashboard unmounted, dropping load result");
        return FetchOutcome::Detached;
    }

    match result {
        Ok(dataset) => {
            log::info!("D405: loaded {} application rows", dataset.len());
            FetchOutcome::Loaded(dataset)
        }
        Err(e) => {
            log::error!("D405: failed to load application level report: {}", e);
            FetchOutcome::Failed(e)
        }
    }
}

/// Asset level rows of one application
pub async fn load_asset_level<A: RetnRemApi>(
    api: &A,
    guard: &MountGuard,
    appl_sys_id: &str,
) -> FetchOutcome<TabularDataset> {
    let result = api.fetch_asset_level(appl_sys_id).await;

    if !guard.is_mounted() {
        return FetchOutcome::Detached;
    }

    match result {
        Ok(dataset) => {
            log::info!("D405: loaded {} assets of {}", dataset.len(), appl_sys_id);
            FetchOutcome::Loaded(dataset)
        }
        Err(e) => {
            log::error!("D405: failed to load assets of {}: {}", appl_sys_id, e);
            FetchOutcome::Failed(e)
        }
    }
}

/// Row activation: fetch the assets of `appl_sys_id`, hand them to `cache`,
/// then `navigate` to the detail route. Failure navigates nowhere.
pub async fn open_detail<A, C, N>(
    api: &A,
    guard: &MountGuard,
    appl_sys_id: &str,
    cache: C,
    navigate: N,
) -> FetchOutcome<()>
where
    A: RetnRemApi,
    C: FnOnce(&str, TabularDataset),
    N: FnOnce(&str),
{
    match load_asset_level(api, guard, appl_sys_id).await {
        FetchOutcome::Loaded(dataset) => {
            cache(appl_sys_id, dataset);
            let path = detail_path(appl_sys_id);
            log::info!("D405: navigating to {}", path);
            navigate(&path);
            FetchOutcome::Loaded(())
        }
        FetchOutcome::Failed(e) => FetchOutcome::Failed(e),
        FetchOutcome::Detached => FetchOutcome::Detached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d405_app_level_retn_rem::ui::state::RetnRemState;
    use crate::shared::components::data_table::RowActivation;
    use chrono::TimeZone;
    use contracts::dashboards::d405_app_level_retn_rem::RetnRemFilter;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    /// Counting stand-in for the HTTP API
    struct StubApi {
        app_level: Result<TabularDataset, String>,
        assets: Result<TabularDataset, String>,
        app_calls: Cell<usize>,
        asset_calls: RefCell<Vec<String>>,
        /// Simulates the component going away while the request is in flight
        unmount_during_fetch: Option<MountGuard>,
    }

    impl StubApi {
        fn new(app_level: Result<TabularDataset, String>) -> Self {
            Self {
                app_level,
                assets: Ok(TabularDataset::default()),
                app_calls: Cell::new(0),
                asset_calls: RefCell::new(Vec::new()),
                unmount_during_fetch: None,
            }
        }

        fn with_assets(mut self, assets: Result<TabularDataset, String>) -> Self {
            self.assets = assets;
            self
        }

        fn settle(&self) {
            if let Some(guard) = &self.unmount_during_fetch {
                guard.unmount();
            }
        }
    }

    impl RetnRemApi for StubApi {
        async fn fetch_app_level(&self) -> Result<TabularDataset, String> {
            self.app_calls.set(self.app_calls.get() + 1);
            self.settle();
            self.app_level.clone()
        }

        async fn fetch_asset_level(&self, appl_sys_id: &str) -> Result<TabularDataset, String> {
            self.asset_calls.borrow_mut().push(appl_sys_id.to_string());
            self.settle();
            self.assets.clone()
        }
    }

    fn app_rows() -> TabularDataset {
        TabularDataset::new(
            vec!["APPL_SYS_ID".into(), "APPL_SYS_NM".into()],
            vec![
                vec![json!("14775"), json!("Credit")],
                vec![json!("20553"), json!("Images")],
            ],
        )
    }

    fn asset_rows() -> TabularDataset {
        TabularDataset::new(vec!["ASET_ID".into()], vec![vec![json!("A-1")]])
    }

    #[test]
    fn test_load_success_populates_state() {
        let api = StubApi::new(Ok(app_rows()));
        let guard = MountGuard::new();
        let mut state = RetnRemState::default();

        state.begin_load();
        let outcome = block_on(load_app_level(&api, &guard));
        if let Some(result) = outcome.into_result() {
            state.finish_load(result);
        }

        assert_eq!(api.app_calls.get(), 1);
        assert!(!state.is_busy());
        assert_eq!(state.dataset.len(), 2);
    }

    #[test]
    fn test_rejected_fetch_is_attempted_once_and_clears_indicator() {
        let api = StubApi::new(Err("Request failed: offline".into()));
        let guard = MountGuard::new();
        let mut state = RetnRemState::default();

        state.begin_load();
        assert!(state.is_busy());
        let outcome = block_on(load_app_level(&api, &guard));
        assert_eq!(outcome, FetchOutcome::Failed("Request failed: offline".into()));
        if let Some(result) = outcome.into_result() {
            state.finish_load(result);
        }

        assert_eq!(api.app_calls.get(), 1);
        assert!(!state.is_busy());
        assert!(state.shows_no_data(&RetnRemFilter::default()));
    }

    #[test]
    fn test_unmounted_dashboard_ignores_completion() {
        let guard = MountGuard::new();
        let mut api = StubApi::new(Ok(app_rows()));
        api.unmount_during_fetch = Some(guard.clone());

        let outcome = block_on(load_app_level(&api, &guard));
        assert_eq!(outcome, FetchOutcome::Detached);
        assert!(outcome.into_result().is_none());
        assert_eq!(api.app_calls.get(), 1);
    }

    #[test]
    fn test_row_activation_fetches_once_and_navigates_once() {
        let api = StubApi::new(Ok(app_rows())).with_assets(Ok(asset_rows()));
        let guard = MountGuard::new();
        let mut state = RetnRemState::default();
        state.finish_load(Ok(app_rows()));

        let key = state
            .row_key(&RetnRemFilter::default(), RowActivation::cell(1, 0))
            .unwrap();

        let cached = RefCell::new(Vec::new());
        let navigations = RefCell::new(Vec::new());
        let outcome = block_on(open_detail(
            &api,
            &guard,
            &key,
            |id, dataset| cached.borrow_mut().push((id.to_string(), dataset.len())),
            |path| navigations.borrow_mut().push(path.to_string()),
        ));

        assert_eq!(outcome, FetchOutcome::Loaded(()));
        assert_eq!(*api.asset_calls.borrow(), vec!["14775".to_string()]);
        assert_eq!(*cached.borrow(), vec![("14775".to_string(), 1)]);
        assert_eq!(*navigations.borrow(), vec!["/app-level-retn-rem/14775".to_string()]);
    }

    #[test]
    fn test_failed_detail_lookup_does_not_navigate() {
        let api = StubApi::new(Ok(app_rows())).with_assets(Err("HTTP error: 500".into()));
        let guard = MountGuard::new();
        let navigations = Cell::new(0);

        let outcome = block_on(open_detail(
            &api,
            &guard,
            "14775",
            |_, _| panic!("nothing to cache"),
            |_| navigations.set(navigations.get() + 1),
        ));

        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(api.asset_calls.borrow().len(), 1);
        assert_eq!(navigations.get(), 0);
    }

    #[test]
    fn test_detail_lookup_after_unmount_does_not_navigate() {
        let guard = MountGuard::new();
        let mut api = StubApi::new(Ok(app_rows())).with_assets(Ok(asset_rows()));
        api.unmount_during_fetch = Some(guard.clone());
        let navigations = Cell::new(0);

        let outcome = block_on(open_detail(
            &api,
            &guard,
            "14775",
            |_, _| {},
            |_| navigations.set(navigations.get() + 1),
        ));

        assert_eq!(outcome, FetchOutcome::Detached);
        assert_eq!(navigations.get(), 0);
    }

    #[test]
    fn test_export_refused_before_data_arrives() {
        let mut state = RetnRemState::default();
        state.begin_load();
        assert!(exportable(state.export_table(&RetnRemFilter::default())).is_none());

        state.finish_load(Ok(app_rows()));
        let table = exportable(state.export_table(&RetnRemFilter::default())).unwrap();
        assert_eq!(table.rows.len(), 2);

        let mut nothing = RetnRemFilter::default();
        nothing.app_ids.insert("99999".into());
        assert!(exportable(state.export_table(&nothing)).is_none());
    }

    #[test]
    fn test_detail_path_encodes_key() {
        assert_eq!(detail_path("14775"), "/app-level-retn-rem/14775");
        assert_eq!(detail_path("a b"), "/app-level-retn-rem/a%20b");
    }

    #[test]
    fn test_export_file_name() {
        let now = Utc.with_ymd_and_hms(2024, 6, 11, 13, 25, 7).unwrap();
        assert_eq!(
            export_file_name(APP_LEVEL_REPORT, "csv", now),
            "app_level_retn_rem_20240611_132507.csv"
        );
    }
}
