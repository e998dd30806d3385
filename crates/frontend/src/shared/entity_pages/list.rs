use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use std::collections::BTreeMap;
use thaw::{MessageBar, MessageBarIntent, Spinner};

use super::{create_path, detail_path, edit_path, render_cell};
use crate::config::AppConfig;
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::relation_select::use_options;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::notice::{alert, confirm};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::resource::{EntitySchema, EntityService, FilterDef};

fn keep<S: EntitySchema>(item: &S::Item, search: &str, filters: &BTreeMap<String, String>) -> bool {
    let search = search.trim();
    (search.is_empty() || S::matches_search(item, search))
        && filters.iter().all(|(k, v)| S::matches_filter(item, k, v))
}

/// List page: search, filters, table, pagination and row deletion.
pub fn entity_list<S: EntitySchema>() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not provided");
    let service = EntityService::<S>::new(use_api());
    let state = RwSignal::new(ListState::<S::Item>::new(S::PAGING, config.default_page_size));
    let debounce_ms = config.search_debounce_ms;
    let page_size_options = config.page_size_options.clone();

    let fetch = {
        let service = service.clone();
        Callback::new(move |_: ()| {
            let service = service.clone();
            let Some((seq, query)) = state.try_update(|s| (s.begin_fetch(), s.query())) else {
                return;
            };
            spawn_local(async move {
                match service.list(&query).await {
                    Ok(page) => {
                        state.try_update(|s| s.apply_page(seq, page));
                    }
                    Err(e) => {
                        log::error!("failed to load {}: {}", S::ROUTE, e);
                        let message = e.to_string();
                        let current = state
                            .try_update(|s| s.fail_fetch(seq, message.clone()))
                            .unwrap_or(false);
                        if current && e != ApiError::Unauthenticated {
                            alert(&format!("Failed to load {}: {}", S::TITLE.to_lowercase(), message));
                        }
                    }
                }
            });
        })
    };

    fetch.run(());

    let refetch_if = move |needed: Option<bool>| {
        if needed.unwrap_or(false) {
            fetch.run(());
        }
    };

    let on_search = Callback::new(move |value: String| {
        refetch_if(state.try_update(|s| s.set_search(&value)));
    });
    let on_filter = move |key: &'static str, value: String| {
        refetch_if(state.try_update(|s| s.set_filter(key, &value)));
    };
    let on_page = Callback::new(move |page: u32| {
        refetch_if(state.try_update(|s| s.set_page(page)));
    });
    let on_page_size = Callback::new(move |limit: u32| {
        refetch_if(state.try_update(|s| s.set_limit(limit)));
    });

    let on_delete = Callback::new(move |(id, name): (String, String)| {
        if !confirm(&format!(
            "Delete {} \"{}\"? This cannot be undone.",
            S::SINGULAR,
            name
        )) {
            return;
        }
        let service = service.clone();
        spawn_local(async move {
            match service.delete(&id).await {
                Ok(()) => {
                    log::info!("deleted {} {}", S::SINGULAR, id);
                    let refetch = state
                        .try_update(|s| s.remove_row(|item| S::item_id(item) == id))
                        .unwrap_or(false);
                    if refetch {
                        fetch.run(());
                    }
                }
                Err(e) => {
                    log::error!("failed to delete {} {}: {}", S::SINGULAR, id, e);
                    alert(&format!("Failed to delete {}: {}", S::SINGULAR, e));
                }
            }
        });
    });

    let visible = Signal::derive(move || {
        state.with(|s| s.visible(|item| keep::<S>(item, &s.search, &s.filters)))
    });
    let rows = move || visible.with(|(rows, _)| rows.clone());
    let pagination = Signal::derive(move || visible.with(|(_, p)| *p));

    let search_value = Signal::derive(move || state.with(|s| s.search.clone()));
    let first_load = move || state.with(|s| s.is_first_load());
    let dimmed = move || state.with(|s| s.is_dimmed());
    let error = move || state.with(|s| s.error.clone());

    view! {
        <PageFrame route=S::ROUTE category=PAGE_CAT_LIST>
            <PageHeader title=S::TITLE.to_string()>
                <A href={create_path::<S>()} attr:class="button button--primary">
                    {icon("plus")}
                    {format!(" New {}", S::SINGULAR)}
                </A>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=search_value
                    on_change=on_search
                    debounce_ms=debounce_ms
                    placeholder=format!("Search {}...", S::TITLE.to_lowercase())
                />
                {S::filters()
                    .into_iter()
                    .map(|def| filter_select(def, state, on_filter))
                    .collect_view()}
            </div>

            {move || error().map(|message| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <span>{message}</span>
                </MessageBar>
            })}

            <Show
                when=move || !first_load()
                fallback=|| view! { <div class="list-loading"><Spinner /></div> }
            >
                <div class=move || if dimmed() { "table-wrapper table-wrapper--dimmed" } else { "table-wrapper" }>
                    <table class="data-table">
                        <thead>
                            <tr>
                                {S::columns().iter().map(|c| view! { <th>{c.header}</th> }).collect_view()}
                                <th class="data-table__actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = rows();
                                if rows.is_empty() {
                                    let span = S::columns().len() + 1;
                                    return view! {
                                        <tr>
                                            <td class="data-table__empty" colspan=span>
                                                {format!("No {} found", S::TITLE.to_lowercase())}
                                            </td>
                                        </tr>
                                    }
                                    .into_any();
                                }
                                rows.into_iter()
                                    .map(|item| table_row::<S>(item, on_delete))
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                </div>
                <PaginationControls
                    pagination=pagination
                    on_page_change=on_page
                    on_page_size_change=on_page_size
                    page_size_options=page_size_options.clone()
                />
            </Show>
        </PageFrame>
    }
}

fn table_row<S: EntitySchema>(item: S::Item, on_delete: Callback<(String, String)>) -> impl IntoView {
    let id = S::item_id(&item);
    let name = S::display_name(&item);
    let cells = S::columns()
        .iter()
        .map(|c| view! { <td>{render_cell((c.render)(&item))}</td> })
        .collect_view();
    let delete_args = (id.clone(), name);

    view! {
        <tr>
            {cells}
            <td class="data-table__actions">
                <A href={detail_path::<S>(&id)} attr:class="button button--ghost button--small" attr:title="View">
                    {icon("eye")}
                </A>
                <A href={edit_path::<S>(&id)} attr:class="button button--ghost button--small" attr:title="Edit">
                    {icon("edit")}
                </A>
                <button
                    class="button button--ghost button--small button--danger"
                    title="Delete"
                    on:click=move |_| on_delete.run(delete_args.clone())
                >
                    {icon("trash")}
                </button>
            </td>
        </tr>
    }
}

fn filter_select<T, F>(def: FilterDef, state: RwSignal<ListState<T>>, on_filter: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&'static str, String) + Copy + Send + Sync + 'static,
{
    let options = use_options(def.source);
    let key = def.key;
    let current = move || state.with(|s| s.filter(key).to_string());

    view! {
        <label class="list-filter">
            <span class="list-filter__label">{def.label}</span>
            <select
                class="form__select"
                prop:value=current
                on:change=move |ev| on_filter(key, event_target_value(&ev))
            >
                <option value="">"All"</option>
                {move || options.get().into_iter().map(|o| {
                    let id = o.id.clone();
                    view! { <option value=o.id selected=move || current() == id>{o.label}</option> }
                }).collect_view()}
            </select>
        </label>
    }
}
