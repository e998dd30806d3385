pub mod ui;

use contracts::domain::franchise::{Franchise, FranchiseForm};
use contracts::shared::localized::DEFAULT_LANGUAGE;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use crate::shared::components::relation_select::OptionSource;
use crate::shared::list_state::PagingMode;
use crate::shared::resource::{
    flag_matches, timestamp_cell, CellValue, Column, EntitySchema, Endpoints, FilterDef,
    UpdateMethod, PUBLISHED_OPTIONS,
};

pub struct FranchiseSchema;

impl EntitySchema for FranchiseSchema {
    type Item = Franchise;
    type Form = FranchiseForm;

    const ROUTE: &'static str = "franchises";
    const TITLE: &'static str = "Franchises";
    const SINGULAR: &'static str = "franchise";
    const PAGING: PagingMode = PagingMode::Client;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/master/franchises",
            detail: "/master/franchises",
            create: "/franchise",
            update: "/franchise",
            update_method: UpdateMethod::Patch,
            delete: "/franchise",
        }
    }

    fn item_id(item: &Franchise) -> String {
        item.id.clone()
    }

    fn display_name(item: &Franchise) -> String {
        item.display_title()
    }

    fn matches_search(item: &Franchise, needle: &str) -> bool {
        item.title.matches(needle) || item.slug.matches(needle)
    }

    fn matches_filter(item: &Franchise, key: &str, value: &str) -> bool {
        match key {
            "isPublished" => flag_matches(item.is_published, value),
            _ => true,
        }
    }

    fn columns() -> Vec<Column<Franchise>> {
        vec![
            Column {
                header: "Title",
                render: |f| CellValue::Text(f.display_title()),
            },
            Column {
                header: "Slug",
                render: |f| CellValue::optional(f.slug.display(DEFAULT_LANGUAGE)),
            },
            Column {
                header: "Movies",
                render: |f| CellValue::Text(f.movies.len().to_string()),
            },
            Column {
                header: "Status",
                render: |f| CellValue::published(f.is_published),
            },
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![FilterDef {
            key: "isPublished",
            label: "Status",
            source: OptionSource::Static(PUBLISHED_OPTIONS),
        }]
    }

    fn detail_rows(f: &Franchise) -> Vec<(&'static str, CellValue)> {
        let mut rows = vec![("ID", CellValue::text(f.id.clone()))];
        for (code, title) in f.title.iter() {
            rows.push(("Title", CellValue::Text(format!("[{}] {}", code, title))));
        }
        for (code, slug) in f.slug.iter() {
            rows.push(("Slug", CellValue::Text(format!("[{}] {}", code, slug))));
        }
        for (code, description) in f.description.iter() {
            rows.push(("Description", CellValue::Text(format!("[{}] {}", code, description))));
        }
        let movies = f
            .movies
            .iter()
            .map(|m| m.label(DEFAULT_LANGUAGE))
            .collect::<Vec<_>>();
        rows.extend([
            (
                "Movies",
                if movies.is_empty() {
                    CellValue::text("-")
                } else {
                    CellValue::Text(movies.join(", "))
                },
            ),
            ("Status", CellValue::published(f.is_published)),
            ("Created", timestamp_cell(f.created_at.as_ref())),
            ("Updated", timestamp_cell(f.updated_at.as_ref())),
        ]);
        rows
    }

    fn form_fields(form: RwSignal<FranchiseForm>, errors: Signal<ValidationErrors>) -> AnyView {
        ui::franchise_fields(form, errors).into_any()
    }
}
