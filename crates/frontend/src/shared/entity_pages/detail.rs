use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::{Card, Spinner};

use super::{edit_path, list_path, render_cell, route_id};
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notice::{alert, confirm};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::resource::{EntitySchema, EntityService};

/// Read-only view of one record with edit and delete actions. A missing
/// record sends the user back to the list.
pub fn entity_detail<S: EntitySchema>() -> impl IntoView {
    let service = EntityService::<S>::new(use_api());
    let navigate = use_navigate();
    let id = route_id();
    let item = RwSignal::new(None::<S::Item>);
    let loading = RwSignal::new(true);

    let load = {
        let service = service.clone();
        let navigate = navigate.clone();
        move |id: String| {
            let service = service.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match service.fetch(&id).await {
                    Ok(found) => {
                        item.try_set(Some(found));
                    }
                    Err(ApiError::NotFound) => {
                        log::warn!("{} {} not found", S::SINGULAR, id);
                        alert(&format!("The {} no longer exists.", S::SINGULAR));
                        navigate(&list_path::<S>(), Default::default());
                    }
                    Err(ApiError::Unauthenticated) => {}
                    Err(e) => {
                        log::error!("failed to load {} {}: {}", S::SINGULAR, id, e);
                        alert(&format!("Failed to load {}: {}", S::SINGULAR, e));
                    }
                }
                loading.try_set(false);
            });
        }
    };

    Effect::new(move |_| {
        let id = id.get();
        if !id.is_empty() {
            loading.set(true);
            load(id);
        }
    });

    let on_delete = move |_| {
        let Some(name) = item.with_untracked(|i| i.as_ref().map(S::display_name)) else {
            return;
        };
        if !confirm(&format!("Delete {} \"{}\"? This cannot be undone.", S::SINGULAR, name)) {
            return;
        }
        let service = service.clone();
        let navigate = navigate.clone();
        let id = id.get_untracked();
        spawn_local(async move {
            match service.delete(&id).await {
                Ok(()) => {
                    log::info!("deleted {} {}", S::SINGULAR, id);
                    navigate(&list_path::<S>(), Default::default());
                }
                Err(e) => {
                    log::error!("failed to delete {} {}: {}", S::SINGULAR, id, e);
                    alert(&format!("Failed to delete {}: {}", S::SINGULAR, e));
                }
            }
        });
    };

    let title = Signal::derive(move || {
        item.with(|i| {
            i.as_ref()
                .map(S::display_name)
                .unwrap_or_else(|| S::SINGULAR.to_string())
        })
    });

    view! {
        <PageFrame route=S::ROUTE category=PAGE_CAT_DETAIL>
            <PageHeader title=title subtitle=format!("{} details", S::SINGULAR)>
                <A href={list_path::<S>()} attr:class="button button--secondary">
                    {icon("chevron-left")}
                    " Back"
                </A>
                <A href={move || edit_path::<S>(&id.get())} attr:class="button button--primary">
                    {icon("edit")}
                    " Edit"
                </A>
                <button class="button button--danger" on:click=on_delete>
                    {icon("trash")}
                    " Delete"
                </button>
            </PageHeader>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="detail-loading"><Spinner /></div> }
            >
                {move || item.get().map(|item| {
                    let rows = S::detail_rows(&item)
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="detail-row">
                                <dt class="detail-row__label">{label}</dt>
                                <dd class="detail-row__value">{render_cell(value)}</dd>
                            </div>
                        })
                        .collect_view();
                    view! {
                        <Card>
                            <dl class="detail-grid">{rows}</dl>
                        </Card>
                    }
                })}
            </Show>
        </PageFrame>
    }
}
