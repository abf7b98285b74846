//! PageFrame: standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"d400_financial_overview--dashboard"`
//!   - `data-page-category`: a PAGE_CAT_* constant
//!
//! Usage:
//! ```rust,ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
//!
//! #[component]
//! pub fn MyDashboard() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="d400_financial_overview--dashboard" category=PAGE_CAT_DASHBOARD>
//!             <div class="page__header">...</div>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on a page.
///
/// Adds the BEM modifier class based on category:
/// - `dashboard` → `page page--dashboard`
/// - anything else → `page`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// A PAGE_CAT_* constant from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "invalid page id: {page_id}");

    let full_class = page_class(category, class);

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

fn page_class(category: &str, extra: &str) -> String {
    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };
    if extra.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {extra}")
    }
}
