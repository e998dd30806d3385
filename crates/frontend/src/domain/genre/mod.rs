pub mod ui;

use contracts::domain::genre::{Genre, GenreForm};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use crate::shared::components::relation_select::OptionSource;
use crate::shared::list_state::PagingMode;
use crate::shared::resource::{
    flag_matches, timestamp_cell, CellValue, Column, EntitySchema, Endpoints, FilterDef,
    UpdateMethod, ACTIVE_OPTIONS,
};

pub struct GenreSchema;

impl EntitySchema for GenreSchema {
    type Item = Genre;
    type Form = GenreForm;

    const ROUTE: &'static str = "genres";
    const TITLE: &'static str = "Genres";
    const SINGULAR: &'static str = "genre";
    const PAGING: PagingMode = PagingMode::Client;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/master/genres",
            detail: "/master/genres",
            create: "/master/genres",
            update: "/master/genres",
            update_method: UpdateMethod::Put,
            delete: "/master/genres",
        }
    }

    fn item_id(item: &Genre) -> String {
        item.id.clone()
    }

    fn display_name(item: &Genre) -> String {
        item.display_title()
    }

    fn matches_search(item: &Genre, needle: &str) -> bool {
        item.title.matches(needle) || item.slug.matches(needle)
    }

    fn matches_filter(item: &Genre, key: &str, value: &str) -> bool {
        match key {
            "isActive" => flag_matches(item.is_active, value),
            _ => true,
        }
    }

    fn columns() -> Vec<Column<Genre>> {
        vec![
            Column {
                header: "Title",
                render: |g| CellValue::Text(g.display_title()),
            },
            Column {
                header: "Slug",
                render: |g| CellValue::optional(g.slug.display(&g.default_lang)),
            },
            Column {
                header: "Languages",
                render: |g| CellValue::Text(g.title.codes().collect::<Vec<_>>().join(", ")),
            },
            Column {
                header: "Status",
                render: |g| CellValue::active(g.is_active),
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

    fn detail_rows(g: &Genre) -> Vec<(&'static str, CellValue)> {
        let mut rows = vec![("ID", CellValue::text(g.id.clone()))];
        for (code, title) in g.title.iter() {
            rows.push(("Title", CellValue::Text(format!("[{}] {}", code, title))));
        }
        for (code, slug) in g.slug.iter() {
            rows.push(("Slug", CellValue::Text(format!("[{}] {}", code, slug))));
        }
        for (code, description) in g.description.iter() {
            rows.push(("Description", CellValue::Text(format!("[{}] {}", code, description))));
        }
        rows.extend([
            ("Default language", CellValue::text(g.default_lang.clone())),
            ("Status", CellValue::active(g.is_active)),
            ("Created", timestamp_cell(g.created_at.as_ref())),
            ("Updated", timestamp_cell(g.updated_at.as_ref())),
        ]);
        rows
    }

    fn form_fields(form: RwSignal<GenreForm>, errors: Signal<ValidationErrors>) -> AnyView {
        ui::genre_fields(form, errors).into_any()
    }
}
