use leptos::prelude::*;

use super::context::use_session;
use crate::config::AppConfig;

/// Renders children only for administrators. The role check is skipped when
/// `enforce_admin_guard` is off, so any signed-in user passes.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let enforce = use_context::<AppConfig>()
        .map(|c| c.enforce_admin_guard)
        .unwrap_or(false);

    view! {
        <Show
            when=move || !enforce || session.is_admin()
            fallback=|| view! {
                <div class="access-denied">
                    <h2>"Access denied"</h2>
                    <p>"Administrator privileges are required."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
