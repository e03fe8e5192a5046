use super::flow::{
    self, export_file_name, FetchOutcome, MountGuard, APP_LEVEL_REPORT, DASHBOARD_TITLE,
};
use super::state::{create_state, DetailCache};
use crate::dashboards::d405_app_level_retn_rem::api::HttpRetnRemApi;
use crate::shared::components::data_table::{DataTable, RowActivation};
use crate::shared::components::multi_select::{to_sorted, MultiSelect};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::export::{export_to_excel, export_to_pdf};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use chrono::Utc;
use contracts::dashboards::d405_app_level_retn_rem::{FilterToggle, RetnRemFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use std::collections::HashSet;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, Spinner, Switch};

#[derive(Clone, Copy)]
enum ExportFormat {
    Excel,
    Pdf,
}

fn toggle_test_id(toggle: FilterToggle) -> &'static str {
    match toggle {
        FilterToggle::LegalHold => "app-level-retn-rem-legal-hold-filter",
        FilterToggle::ApprovedExtendedRetention => {
            "app-level-retn-rem-approved-extended-retn-filter"
        }
        FilterToggle::ClassCodeComparison => "app-level-retn-rem-class_code_comp-filter",
    }
}

/// Application level retention remediation dashboard
#[component]
pub fn AppLevelRetnRemDashboard() -> impl IntoView {
    let state = create_state();
    let detail_cache = use_context::<DetailCache>().unwrap_or_default();
    let guard = MountGuard::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.unmount());
    }

    // Filter fields, each one independent
    let selected_app_ids: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let selected_obr: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let toggles = FilterToggle::ALL.map(|t| (t, RwSignal::new(false)));

    let filter = Memo::new(move |_| {
        let mut filter = RetnRemFilter {
            app_ids: selected_app_ids.with(to_sorted),
            obr_classes: selected_obr.with(to_sorted),
            ..Default::default()
        };
        for (toggle, on) in toggles {
            filter.set_toggle(toggle, on.get());
        }
        filter
    });

    let visible = Memo::new(move |_| state.with(|s| s.visible(&filter.get())));
    let tiles = Memo::new(move |_| state.with(|s| s.tiles(&filter.get())));
    let app_id_options = Signal::derive(move || state.with(|s| s.app_id_options()));
    let obr_options = Signal::derive(move || state.with(|s| s.obr_options()));
    let loaded = move || state.with(|s| s.is_settled());

    let clear_filters = move || {
        selected_app_ids.set(HashSet::new());
        selected_obr.set(HashSet::new());
        for (_, on) in toggles {
            on.set(false);
        }
    };

    // Load data on mount
    {
        let guard = guard.clone();
        state.update(|s| s.begin_load());
        spawn_local(async move {
            let outcome = flow::load_app_level(&HttpRetnRemApi, &guard).await;
            if let Some(result) = outcome.into_result() {
                state.update(|s| s.finish_load(result));
            }
        });
    }

    // Router navigation closure is not Send, keep it in a local store
    let navigate = StoredValue::new_local(use_navigate());
    let on_row_activate = {
        let guard = guard.clone();
        Callback::new(move |activation: RowActivation| {
            let Some(key) = state.with_untracked(|s| s.row_key(&filter.get_untracked(), activation))
            else {
                return;
            };
            let mut claimed = false;
            state.update(|s| claimed = s.begin_detail());
            if !claimed {
                log::debug!("D405: detail lookup already in flight, ignoring {}", key);
                return;
            }

            let guard = guard.clone();
            let navigate = navigate.get_value();
            spawn_local(async move {
                let outcome = flow::open_detail(
                    &HttpRetnRemApi,
                    &guard,
                    &key,
                    |id, dataset| detail_cache.store(id, dataset),
                    |path| navigate(path, Default::default()),
                )
                .await;
                if outcome != FetchOutcome::Detached {
                    state.update(|s| s.end_detail());
                }
            });
        })
    };

    let run_export = move |format: ExportFormat| {
        let Some(table) =
            flow::exportable(state.with_untracked(|s| s.export_table(&filter.get_untracked())))
        else {
            return;
        };
        let now = Utc::now();
        let result = match format {
            ExportFormat::Excel => {
                export_to_excel(&table, &export_file_name(APP_LEVEL_REPORT, "csv", now))
            }
            ExportFormat::Pdf => export_to_pdf(
                &table,
                DASHBOARD_TITLE,
                &now.format("%Y-%m-%d %H:%M UTC").to_string(),
            ),
        };
        match result {
            Ok(()) => log::info!("D405: exported {} rows", table.rows.len()),
            Err(e) => log::error!("D405: export failed: {}", e),
        }
    };

    view! {
        <PageFrame page_id="d405_app_level_retn_rem--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title=DASHBOARD_TITLE
                title_test_id="app-level-retn-rem-dashboard-title-text"
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    attr:data-testid="app-level-retn-rem-excel-export-data-button"
                    on_click=move |_| run_export(ExportFormat::Excel)
                >
                    {icon("download")}
                    " Excel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    attr:data-testid="app-level-retn-rem-pdf-export-data-button"
                    on_click=move |_| run_export(ExportFormat::Pdf)
                >
                    {icon("printer")}
                    " PDF"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || state.with(|s| s.is_busy()).then(|| view! {
                    <div class="retn-rem__spinner" data-testid="app-levl-retn-rem-mds-progress-spinner">
                        <Spinner />
                    </div>
                })}

                <Show when=loaded>
                    <div class="retn-rem__tiles">
                        <StatCard
                            label="Total Apps"
                            icon_name="apps"
                            test_id="app-level-retn-rem-dashboard-total-apps-tile"
                            value=Signal::derive(move || Some(tiles.get().total_apps))
                        />
                        <StatCard
                            label="Total OBR Count"
                            icon_name="archive"
                            test_id="app-level-retn-rem-dashboard-total-obr-count-tile"
                            value=Signal::derive(move || Some(tiles.get().total_obr_count))
                        />
                        <StatCard
                            label="Total Active Legal Hold"
                            icon_name="lock"
                            test_id="app-level-retn-rem-dashboard-total-active-legal-hold-count-tile"
                            value=Signal::derive(move || Some(tiles.get().total_active_legal_hold))
                        />
                    </div>

                    <div class="retn-rem__filters">
                        <div class="retn-rem__filters-header">
                            <span>"Filters"</span>
                            {move || {
                                let active = filter.with(|f| f.active_count());
                                (active > 0).then(|| view! {
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                        {active.to_string()}
                                    </Badge>
                                })
                            }}
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| clear_filters()
                                disabled=Signal::derive(move || filter.with(|f| f.is_empty()))
                            >
                                "Clear filters"
                            </Button>
                        </div>
                        <MultiSelect
                            label="App ID"
                            test_id="app-level-retn-rem-app-id-multiselect"
                            options=app_id_options
                            selected=selected_app_ids
                        />
                        <MultiSelect
                            label="OBR"
                            test_id="app-level-retn-rem-obr-multiselect"
                            options=obr_options
                            selected=selected_obr
                        />
                        <div class="retn-rem__toggles">
                            {toggles.into_iter().map(|(toggle, on)| view! {
                                <div data-testid=toggle_test_id(toggle)>
                                    <Switch checked=on label=toggle.label() />
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <Show
                        when=move || !visible.with(|v| v.is_empty())
                        fallback=|| view! {
                            <div class="retn-rem__empty">"No Data Found"</div>
                        }
                    >
                        <DataTable
                            dataset=visible
                            test_id="app-level-retn-rem-mds-datatable"
                            on_row_activate=on_row_activate
                        />
                    </Show>
                </Show>
            </div>
        </PageFrame>
    }
}
