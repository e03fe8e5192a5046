use crate::dashboards::d405_app_level_retn_rem::ui::state::DetailCache;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Asset rows fetched by the dashboard, read by the detail route
    provide_context(DetailCache::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
