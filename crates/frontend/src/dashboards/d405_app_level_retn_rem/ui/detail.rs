use super::flow::{self, export_file_name, MountGuard, ASSET_LEVEL_REPORT};
use super::state::{DetailCache, LoadState, RetnRemState};
use crate::dashboards::d405_app_level_retn_rem::api::HttpRetnRemApi;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::{export_to_excel, export_to_pdf};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use chrono::Utc;
use contracts::dashboards::d405_app_level_retn_rem::{ExportTable, RetnRemFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::{Button, ButtonAppearance, Spinner};

/// Asset level rows of one application (`/app-level-retn-rem/:appl_sys_id`)
#[component]
pub fn AssetLevelRetnRemDetail() -> impl IntoView {
    let params = use_params_map();
    let appl_sys_id = Memo::new(move |_| {
        params
            .read()
            .get("appl_sys_id")
            .map(|id| id.trim().to_string())
            .unwrap_or_default()
    });

    let state = RwSignal::new(RetnRemState::default());
    let detail_cache = use_context::<DetailCache>().unwrap_or_default();
    let guard = MountGuard::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.unmount());
    }

    // Данные из кэша дашборда, иначе (прямая ссылка, другой ключ) запрос
    Effect::new(move |_| {
        let id = appl_sys_id.get();
        if id.is_empty() {
            state.update(|s| s.finish_load(Err("Missing application id".into())));
            return;
        }
        if let Some(dataset) = detail_cache.take_for(&id) {
            state.update(|s| s.finish_load(Ok(dataset)));
            return;
        }

        state.update(|s| s.begin_load_for(&id));
        let guard = guard.clone();
        spawn_local(async move {
            let outcome = flow::load_asset_level(&HttpRetnRemApi, &guard, &id).await;
            if let Some(result) = outcome.into_result() {
                state.update(|s| {
                    if !s.finish_load_for(&id, result) {
                        log::debug!("D405: dropping stale assets of {}", id);
                    }
                });
            }
        });
    });

    let dataset = Memo::new(move |_| state.with(|s| s.dataset.clone()));
    let navigate = StoredValue::new_local(use_navigate());

    let current_table = move || -> Option<ExportTable> {
        flow::exportable(state.with_untracked(|s| s.export_table(&RetnRemFilter::default())))
    };

    let export_excel = move || {
        let Some(table) = current_table() else { return };
        let name = format!("{}_{}", ASSET_LEVEL_REPORT, appl_sys_id.get_untracked());
        if let Err(e) = export_to_excel(&table, &export_file_name(&name, "csv", Utc::now())) {
            log::error!("D405: export failed: {}", e);
        }
    };

    let export_pdf = move || {
        let Some(table) = current_table() else { return };
        let title = format!("Asset Level Retention Remediation: {}", appl_sys_id.get_untracked());
        let generated_at = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
        if let Err(e) = export_to_pdf(&table, &title, &generated_at) {
            log::error!("D405: export failed: {}", e);
        }
    };

    let empty = move || dataset.with(|d| d.is_empty());

    view! {
        <PageFrame page_id="d405_asset_level_retn_rem--detail" category=PAGE_CAT_DETAIL>
            <PageHeader
                title="Asset Level Retention Remediation"
                subtitle=Signal::derive(move || Some(format!("Application {}", appl_sys_id.get())))
            >
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| navigate.with_value(|nav| nav("/", Default::default()))
                >
                    {icon("arrow-left")}
                    " Back"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| export_excel()
                >
                    {icon("download")}
                    " Excel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| export_pdf()
                >
                    {icon("printer")}
                    " PDF"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || match state.with(|s| s.load.clone()) {
                    LoadState::Idle | LoadState::Loading => view! {
                        <div class="retn-rem__spinner"><Spinner /></div>
                    }.into_any(),
                    _ if empty() => view! {
                        <div class="retn-rem__empty">"No Data Found"</div>
                    }.into_any(),
                    _ => view! {
                        <DataTable dataset=dataset test_id="asset-level-retn-rem-datatable" />
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
