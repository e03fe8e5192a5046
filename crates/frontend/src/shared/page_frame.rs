//! PageFrame: standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  - `"{entity}--{category}"`
//!   - `data-page-category`  - one of the PAGE_CAT_* constants
//!
//! Usage inside a page component:
//! ```text
//! <PageFrame page_id="d405_app_level_retn_rem--dashboard" category=PAGE_CAT_DASHBOARD>
//!     <div class="page__header">...</div>
//!     <div class="page__content">...</div>
//! </PageFrame>
//! ```

use super::page_standard::*;
use leptos::prelude::*;

fn base_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    }
}

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {}", page_id);

    let full_class = if class.is_empty() {
        base_class(category).to_string()
    } else {
        format!("{} {class}", base_class(category))
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_class_by_category() {
        assert_eq!(base_class(PAGE_CAT_DASHBOARD), "page page--dashboard");
        assert_eq!(base_class(PAGE_CAT_DETAIL), "page page--detail");
        assert_eq!(base_class("other"), "page");
    }
}
