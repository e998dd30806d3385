pub mod ui;

use contracts::domain::episode::{format_duration, Episode, EpisodeForm};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use crate::shared::components::relation_select::OptionSource;
use crate::shared::list_state::PagingMode;
use crate::shared::resource::{
    timestamp_cell, CellValue, Column, EntitySchema, Endpoints, FilterDef, UpdateMethod,
};

pub struct EpisodeSchema;

fn duration_cell(e: &Episode) -> CellValue {
    match e.duration {
        Some(secs) => CellValue::Text(format_duration(secs)),
        None => CellValue::text("-"),
    }
}

impl EntitySchema for EpisodeSchema {
    type Item = Episode;
    type Form = EpisodeForm;

    const ROUTE: &'static str = "episodes";
    const TITLE: &'static str = "Episodes";
    const SINGULAR: &'static str = "episode";
    const PAGING: PagingMode = PagingMode::Server;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/master/episodes",
            detail: "/master/episodes",
            create: "/episode",
            update: "/episode",
            update_method: UpdateMethod::Patch,
            delete: "/episode",
        }
    }

    fn item_id(item: &Episode) -> String {
        item.id.clone()
    }

    fn display_name(item: &Episode) -> String {
        item.display_title()
    }

    fn matches_search(item: &Episode, needle: &str) -> bool {
        item.title.matches(needle)
            || item.slug.matches(needle)
            || item
                .episode_or_label
                .to_lowercase()
                .contains(&needle.to_lowercase())
    }

    fn columns() -> Vec<Column<Episode>> {
        vec![
            Column {
                header: "Title",
                render: |e| CellValue::Text(e.display_title()),
            },
            Column {
                header: "Episode",
                render: |e| CellValue::optional(Some(e.episode_or_label.as_str())),
            },
            Column {
                header: "Movie",
                render: |e| CellValue::Text(e.movie_id.label(&e.default_lang)),
            },
            Column {
                header: "Server",
                render: |e| CellValue::Text(e.server_id.label(&e.default_lang)),
            },
            Column {
                header: "Duration",
                render: duration_cell,
            },
            Column {
                header: "Status",
                render: |e| CellValue::published(e.is_published),
            },
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef {
                key: "movieId",
                label: "Movie",
                source: OptionSource::Movies,
            },
            FilterDef {
                key: "serverId",
                label: "Server",
                source: OptionSource::Servers,
            },
        ]
    }

    fn detail_rows(e: &Episode) -> Vec<(&'static str, CellValue)> {
        let mut rows = vec![("ID", CellValue::text(e.id.clone()))];
        for (code, title) in e.title.iter() {
            rows.push(("Title", CellValue::Text(format!("[{}] {}", code, title))));
        }
        for (code, slug) in e.slug.iter() {
            rows.push(("Slug", CellValue::Text(format!("[{}] {}", code, slug))));
        }
        rows.extend([
            ("Episode", CellValue::optional(Some(e.episode_or_label.as_str()))),
            ("Movie", CellValue::Text(e.movie_id.label(&e.default_lang))),
            ("Server", CellValue::Text(e.server_id.label(&e.default_lang))),
            ("Video URL", CellValue::optional(Some(e.video_url.as_str()))),
            ("Duration", duration_cell(e)),
            ("Thumbnail", CellValue::Image(e.thumbnail.clone())),
            ("Default language", CellValue::text(e.default_lang.clone())),
            ("Status", CellValue::published(e.is_published)),
            ("Created", timestamp_cell(e.created_at.as_ref())),
            ("Updated", timestamp_cell(e.updated_at.as_ref())),
        ]);
        rows
    }

    fn form_fields(form: RwSignal<EpisodeForm>, errors: Signal<ValidationErrors>) -> AnyView {
        ui::episode_fields(form, errors).into_any()
    }
}
