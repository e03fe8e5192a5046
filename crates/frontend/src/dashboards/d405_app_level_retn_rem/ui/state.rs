use crate::shared::components::data_table::RowActivation;
use contracts::dashboards::d405_app_level_retn_rem::columns::{APPL_SYS_ID, RETN_CLS_MV};
use contracts::dashboards::d405_app_level_retn_rem::{
    ExportTable, RetnRemFilter, RetnRemTiles, TabularDataset,
};
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Data side of the dashboard. Filters live in their own signals and are
/// passed in as a [`RetnRemFilter`]; nothing here mutates the loaded rows.
#[derive(Clone, Debug, Default)]
pub struct RetnRemState {
    pub load: LoadState,
    /// Full dataset as fetched
    pub dataset: TabularDataset,
    /// Detail lookup in flight
    pub detail_pending: bool,
    /// Key of the keyed load in flight; any other key's result is stale
    pub pending_key: Option<String>,
}

impl RetnRemState {
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Load of one key (route parameter); supersedes any earlier key
    pub fn begin_load_for(&mut self, key: &str) {
        self.begin_load();
        self.pending_key = Some(key.to_string());
    }

    /// Applies the result only while `key` is still the one requested.
    /// Returns whether it was applied.
    pub fn finish_load_for(&mut self, key: &str, result: Result<TabularDataset, String>) -> bool {
        if self.pending_key.as_deref() != Some(key) {
            return false;
        }
        self.finish_load(result);
        true
    }

    pub fn finish_load(&mut self, result: Result<TabularDataset, String>) {
        self.pending_key = None;
        match result {
            Ok(dataset) => {
                self.dataset = dataset;
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                self.dataset = TabularDataset::default();
                self.load = LoadState::Failed(e);
            }
        }
    }

    /// Claims the detail lookup slot; `false` while another lookup is in flight
    pub fn begin_detail(&mut self) -> bool {
        if self.detail_pending {
            return false;
        }
        self.detail_pending = true;
        true
    }

    pub fn end_detail(&mut self) {
        self.detail_pending = false;
    }

    /// Progress indicator visibility
    pub fn is_busy(&self) -> bool {
        self.load == LoadState::Loading || self.detail_pending
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.load, LoadState::Loaded | LoadState::Failed(_))
    }

    pub fn visible(&self, filter: &RetnRemFilter) -> TabularDataset {
        filter.apply(&self.dataset)
    }

    pub fn tiles(&self, filter: &RetnRemFilter) -> RetnRemTiles {
        RetnRemTiles::compute(&self.visible(filter))
    }

    /// Options come from the full dataset so a selection never hides its peers
    pub fn app_id_options(&self) -> Vec<String> {
        self.dataset.distinct_values(APPL_SYS_ID)
    }

    pub fn obr_options(&self) -> Vec<String> {
        self.dataset.distinct_values(RETN_CLS_MV)
    }

    /// "No Data Found" replaces the table once loading is over and no row is visible
    pub fn shows_no_data(&self, filter: &RetnRemFilter) -> bool {
        self.is_settled() && self.visible(filter).is_empty()
    }

    /// `APPL_SYS_ID` of the visible row a click landed on
    pub fn row_key(&self, filter: &RetnRemFilter, activation: RowActivation) -> Option<String> {
        let visible = self.visible(filter);
        let row = visible.rows.get(activation.data_row()?)?;
        let key = visible.cell_text(row, APPL_SYS_ID);
        let key = key.trim();
        (!key.is_empty()).then(|| key.to_string())
    }

    /// Export payload of the filtered view
    pub fn export_table(&self, filter: &RetnRemFilter) -> ExportTable {
        ExportTable::from_dataset(&self.visible(filter))
    }
}

pub fn create_state() -> RwSignal<RetnRemState> {
    RwSignal::new(RetnRemState::default())
}

/// Asset dataset fetched by the dashboard, handed over to the detail route
/// so it does not fetch the same rows twice.
#[derive(Clone, Copy)]
pub struct DetailCache(RwSignal<Option<(String, TabularDataset)>>);

impl DetailCache {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn store(&self, key: &str, dataset: TabularDataset) {
        self.0.set(Some((key.to_string(), dataset)));
    }

    /// Takes the cached dataset if it belongs to `key`
    pub fn take_for(&self, key: &str) -> Option<TabularDataset> {
        let mut taken = None;
        self.0.update_untracked(|slot| {
            if slot.as_ref().is_some_and(|(k, _)| k == key) {
                taken = slot.take().map(|(_, dataset)| dataset);
            }
        });
        taken
    }
}

impl Default for DetailCache {
    fn default() -> Self {
        Self::new()
    }
}
