use crate::shared::icons::icon;
use contracts::shared::pagination::{PageItem, PaginationState};
use leptos::prelude::*;

/// Page-number bar with ellipsis markers, prev/next buttons and a page-size
/// select. Pages are 1-indexed.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    pagination: Signal<PaginationState>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,

    /// Available page size options
    page_size_options: Vec<u32>,
) -> impl IntoView {
    let current = move || pagination.get().page;

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("{} records", p.total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_prev() {
                        on_page_change.run(p.page - 1);
                    }
                }
                disabled=move || !pagination.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                pagination
                    .get()
                    .window()
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => view! {
                            <button
                                class=move || {
                                    if current() == n {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                }
                                on:click=move |_| {
                                    if current() != n {
                                        on_page_change.run(n);
                                    }
                                }
                            >
                                {n.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => {
                            view! { <span class="pagination-ellipsis">"..."</span> }.into_any()
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_next() {
                        on_page_change.run(p.page + 1);
                    }
                }
                disabled=move || !pagination.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(val);
                    }
                }
                prop:value=move || pagination.get().limit.to_string()
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || pagination.get().limit == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
