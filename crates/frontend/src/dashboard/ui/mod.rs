use contracts::domain::stats::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{MessageBar, MessageBarIntent, Spinner};

use super::fetch_stats;
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{format_thousands, StatCard};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = use_api();
    let stats = RwSignal::new(None::<DashboardStats>);
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    let load = Callback::new(move |_: ()| {
        let client = client.clone();
        loading.set(true);
        error_msg.set(None);
        spawn_local(async move {
            match fetch_stats(&client).await {
                Ok(loaded) => {
                    let _ = stats.try_set(Some(loaded));
                }
                Err(ApiError::Unauthenticated) => {}
                Err(e) => {
                    log::error!("failed to load dashboard statistics: {e}");
                    let _ = error_msg.try_set(Some(e.to_string()));
                }
            }
            let _ = loading.try_set(false);
        });
    });

    load.run(());

    let card = move |format: fn(&DashboardStats) -> String| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(format)))
    };

    view! {
        <PageFrame route="dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard".to_string() subtitle="Catalog overview".to_string()>
                <button
                    class="button button--secondary"
                    disabled=move || loading.get()
                    on:click=move |_| load.run(())
                >
                    {icon("refresh")}
                    " Refresh"
                </button>
            </PageHeader>

            {move || error_msg.get().map(|msg| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {format!("Could not load statistics: {msg}")}
                </MessageBar>
            })}

            <Show when=move || loading.get() && stats.with(Option::is_none)>
                <div class="page__loading"><Spinner /></div>
            </Show>

            <div class="stat-grid">
                <StatCard
                    label="Total movies"
                    icon_name="film"
                    value=card(|s| format_thousands(s.total_movies))
                />
                <StatCard
                    label="Published"
                    icon_name="eye"
                    value=card(|s| format_thousands(s.published_movies))
                    tone="success"
                />
                <StatCard
                    label="Unpublished"
                    icon_name="eye-off"
                    value=card(|s| format_thousands(s.unpublished_movies))
                    tone="warning"
                />
                <StatCard
                    label="Total views"
                    icon_name="play"
                    value=card(|s| format_thousands(s.total_views))
                />
                <StatCard
                    label="Average rating"
                    icon_name="star"
                    value=card(DashboardStats::rating_label)
                />
            </div>
        </PageFrame>
    }
}
