//! Sidebar with collapsible menu groups linking to the entity pages.

use crate::config::AppConfig;
use crate::layout::global_context::use_layout;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            icon: "dashboard",
            items: vec![("/", "Dashboard", "dashboard")],
            admin_only: false,
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "film",
            items: vec![
                ("/movies", "Movies", "film"),
                ("/franchises", "Franchises", "layers"),
                ("/genres", "Genres", "tag"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "streaming",
            label: "Streaming",
            icon: "play",
            items: vec![
                ("/episodes", "Episodes", "play"),
                ("/servers", "Servers", "server"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "users",
            items: vec![("/users", "Users", "users")],
            admin_only: true,
        },
    ]
}

/// `/` only matches itself; other entries also own their sub-pages.
fn is_active(path: &str, current: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current == path || current.starts_with(&format!("{path}/"))
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_layout();
    let session = use_session();
    let pathname = use_location().pathname;
    let enforce = use_context::<AppConfig>()
        .map(|c| c.enforce_admin_guard)
        .unwrap_or(false);

    let groups = menu_groups();

    view! {
        <nav class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let id = group.id;
                let admin_only = group.admin_only;
                let (label, group_icon) = (group.label, group.icon);
                let items = StoredValue::new(group.items);
                let visible = move || !admin_only || !enforce || session.is_admin();

                view! {
                    <Show when=visible>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| ctx.toggle_group(id)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group_icon)}
                                <span>{label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || ctx.is_expanded(id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || ctx.is_expanded(id)>
                            {items.with_value(|items| items.iter().map(|&(path, label, item_icon)| {
                                view! {
                                    <A
                                        href=path
                                        attr:class=move || {
                                            if is_active(path, &pathname.get()) {
                                                "app-sidebar__link app-sidebar__link--active"
                                            } else {
                                                "app-sidebar__link"
                                            }
                                        }
                                    >
                                        {icon(item_icon)}
                                        <span>{label}</span>
                                    </A>
                                }
                            }).collect_view())}
                        </Show>
                    </Show>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/movies"));
        assert!(is_active("/movies", "/movies"));
        assert!(is_active("/movies", "/movies/edit/m1"));
        assert!(!is_active("/movies", "/movies-archive"));
    }

    #[test]
    fn test_every_entity_is_reachable() {
        let paths: Vec<&str> = menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(path, _, _)| path))
            .collect();
        for path in ["/", "/movies", "/franchises", "/genres", "/episodes", "/servers", "/users"] {
            assert!(paths.contains(&path), "{path} missing from the menu");
        }
    }
}
