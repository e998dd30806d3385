pub mod ui;

use contracts::domain::server::{Server, ServerForm};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use crate::shared::components::relation_select::OptionSource;
use crate::shared::list_state::PagingMode;
use crate::shared::resource::{
    flag_matches, timestamp_cell, CellValue, Column, EntitySchema, Endpoints, FilterDef,
    UpdateMethod, ACTIVE_OPTIONS,
};

pub struct ServerSchema;

impl EntitySchema for ServerSchema {
    type Item = Server;
    type Form = ServerForm;

    const ROUTE: &'static str = "servers";
    const TITLE: &'static str = "Servers";
    const SINGULAR: &'static str = "server";
    const PAGING: PagingMode = PagingMode::Client;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/master/servers",
            detail: "/server",
            create: "/server",
            update: "/server",
            update_method: UpdateMethod::Patch,
            delete: "/server",
        }
    }

    fn item_id(item: &Server) -> String {
        item.id.clone()
    }

    fn display_name(item: &Server) -> String {
        item.name.clone()
    }

    fn matches_search(item: &Server, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        item.name.to_lowercase().contains(&needle)
            || item
                .base_url
                .as_deref()
                .map(|u| u.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }

    fn matches_filter(item: &Server, key: &str, value: &str) -> bool {
        match key {
            "isActive" => flag_matches(item.is_active, value),
            _ => true,
        }
    }

    fn columns() -> Vec<Column<Server>> {
        vec![
            Column {
                header: "Name",
                render: |s| CellValue::text(s.name.clone()),
            },
            Column {
                header: "Base URL",
                render: |s| CellValue::optional(s.base_url.as_deref()),
            },
            Column {
                header: "Status",
                render: |s| CellValue::active(s.is_active),
            },
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![FilterDef {
            key: "isActive",
            label: "Status",
            source: OptionSource::Static(ACTIVE_OPTIONS),
        }]
    }

    fn detail_rows(s: &Server) -> Vec<(&'static str, CellValue)> {
        vec![
            ("ID", CellValue::text(s.id.clone())),
            ("Name", CellValue::text(s.name.clone())),
            ("Base URL", CellValue::optional(s.base_url.as_deref())),
            ("Status", CellValue::active(s.is_active)),
            ("Created", timestamp_cell(s.created_at.as_ref())),
            ("Updated", timestamp_cell(s.updated_at.as_ref())),
        ]
    }

    fn form_fields(form: RwSignal<ServerForm>, errors: Signal<ValidationErrors>) -> AnyView {
        ui::server_fields(form, errors).into_any()
    }
}
