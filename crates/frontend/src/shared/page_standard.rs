//! Page category constants for page standardization.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"d400_financial_overview--dashboard"`)
//!   - `data-page-category` with the category constant below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `dashboards/d400_financial_overview/` directory.

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
