//! Application top bar: sidebar toggle, brand, signed-in user and logout.

use crate::layout::global_context::use_layout;
use crate::shared::api_client::use_api;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_session};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_layout();
    let session = use_session();
    let client = use_api();

    let logout = move |_| {
        let client = client.clone();
        spawn_local(async move {
            do_logout(&client).await;
        });
    };

    let user_label = move || {
        session
            .user()
            .map(|u| u.label().to_string())
            .unwrap_or_else(|| "Guest".to_string())
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Catalog Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_label}</span>
                    {move || session.user().map(|u| view! {
                        <span class="top-header__role">{u.role}</span>
                    })}
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
