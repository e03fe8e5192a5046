use crate::dashboards::d405_app_level_retn_rem::ui::{
    AppLevelRetnRemDashboard, AssetLevelRetnRemDetail,
};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page not found"</h1>
            <a href="/">"Back to the dashboard"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=AppLevelRetnRemDashboard />
                    <Route
                        path=path!("/app-level-retn-rem/:appl_sys_id")
                        view=AssetLevelRetnRemDetail
                    />
                </Routes>
            </main>
        </Router>
    }
}
