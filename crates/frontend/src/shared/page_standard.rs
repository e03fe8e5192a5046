//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}`
//!     (e.g. `"d405_app_level_retn_rem--dashboard"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM Inspector, paste it into IDE search, and you land in the
//! `dashboards/d405_app_level_retn_rem/` directory.

/// Analytical dashboard view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Drill-down view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
