//! Root wrapper of every routed page.
//!
//! Sets `id="{route}--{category}"` and `data-page-category` on the root
//! element so pages can be located in the DOM.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_FORM: &str = "form";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

fn base_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// Route segment of the page, e.g. `"movies"`
    route: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=format!("{}--{}", route, category)
            class=base_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}
