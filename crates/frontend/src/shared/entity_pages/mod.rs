//! Generic list, detail and form pages driven by an [`EntitySchema`].

mod detail;
mod form;
mod list;

pub use detail::entity_detail;
pub use form::entity_form;
pub use list::entity_list;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use super::resource::{CellValue, EntitySchema};

pub fn list_path<S: EntitySchema>() -> String {
    format!("/{}", S::ROUTE)
}

pub fn create_path<S: EntitySchema>() -> String {
    format!("/{}/create", S::ROUTE)
}

pub fn detail_path<S: EntitySchema>(id: &str) -> String {
    format!("/{}/{}", S::ROUTE, id)
}

pub fn edit_path<S: EntitySchema>(id: &str) -> String {
    format!("/{}/edit/{}", S::ROUTE, id)
}

/// `:id` segment of the current route, empty when absent.
pub fn route_id() -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()))
}

pub fn render_cell(value: CellValue) -> AnyView {
    match value {
        CellValue::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellValue::Status {
            on,
            on_label,
            off_label,
        } => {
            let color = if on { BadgeColor::Success } else { BadgeColor::Informative };
            view! {
                <Badge appearance=BadgeAppearance::Tint color=color>
                    {if on { on_label } else { off_label }}
                </Badge>
            }
            .into_any()
        }
        CellValue::Image(Some(url)) if !url.trim().is_empty() => {
            view! { <img class="cell-image" src=url alt="" loading="lazy" /> }.into_any()
        }
        CellValue::Image(_) => view! { <span class="cell-image cell-image--empty">"-"</span> }.into_any(),
    }
}
