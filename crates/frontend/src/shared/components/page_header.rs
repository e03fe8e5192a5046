use leptos::prelude::*;

/// PageHeader component - title, optional subtitle and an actions slot
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// `data-testid` of the title element
    #[prop(optional)]
    title_test_id: Option<&'static str>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title" data-testid=title_test_id>{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
