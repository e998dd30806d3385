pub mod ui;

use contracts::domain::movie::{Movie, MovieForm};
use contracts::shared::relation::RelationRef;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use crate::shared::components::relation_select::OptionSource;
use crate::shared::components::stat_card::format_thousands;
use crate::shared::list_state::PagingMode;
use crate::shared::resource::{
    flag_matches, timestamp_cell, CellValue, Column, EntitySchema, Endpoints, FilterDef,
    UpdateMethod, PUBLISHED_OPTIONS,
};

pub const MOVIE_TYPE_OPTIONS: &[(&str, &str)] =
    &[("MOVIE", "Movie"), ("SERIES", "Series"), ("EPISODE", "Episode")];

pub struct MovieSchema;

fn episodes_cell(m: &Movie) -> CellValue {
    match (m.current_episode, m.total_episodes) {
        (Some(current), Some(total)) => CellValue::Text(format!("{current}/{total}")),
        (None, Some(total)) => CellValue::Text(format!("?/{total}")),
        (Some(current), None) => CellValue::Text(current.to_string()),
        (None, None) => CellValue::text("-"),
    }
}

fn relation_list(m: &Movie, refs: &[RelationRef]) -> CellValue {
    if refs.is_empty() {
        return CellValue::text("-");
    }
    CellValue::Text(
        refs.iter()
            .map(|r| r.label(&m.default_lang))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

impl EntitySchema for MovieSchema {
    type Item = Movie;
    type Form = MovieForm;

    const ROUTE: &'static str = "movies";
    const TITLE: &'static str = "Movies";
    const SINGULAR: &'static str = "movie";
    const PAGING: PagingMode = PagingMode::Client;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/movie/admin/all",
            detail: "/master/movie",
            create: "/movie/admin",
            update: "/movie/admin",
            update_method: UpdateMethod::Patch,
            delete: "/movie/admin",
        }
    }

    fn item_id(item: &Movie) -> String {
        item.id.clone()
    }

    fn display_name(item: &Movie) -> String {
        item.display_title()
    }

    fn matches_search(item: &Movie, needle: &str) -> bool {
        item.title.matches(needle) || item.slug.matches(needle)
    }

    fn matches_filter(item: &Movie, key: &str, value: &str) -> bool {
        match key {
            "type" => item.movie_type.as_str() == value,
            "isPublished" => flag_matches(item.is_published, value),
            _ => true,
        }
    }

    fn columns() -> Vec<Column<Movie>> {
        vec![
            Column {
                header: "Poster",
                render: |m| CellValue::Image(m.poster.clone()),
            },
            Column {
                header: "Title",
                render: |m| CellValue::Text(m.display_title()),
            },
            Column {
                header: "Type",
                render: |m| CellValue::text(m.movie_type.label()),
            },
            Column {
                header: "Year",
                render: |m| CellValue::optional(m.year.map(|y| y.to_string()).as_deref()),
            },
            Column {
                header: "Episodes",
                render: episodes_cell,
            },
            Column {
                header: "Views",
                render: |m| CellValue::Text(format_thousands(m.views)),
            },
            Column {
                header: "Status",
                render: |m| CellValue::published(m.is_published),
            },
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef {
                key: "type",
                label: "Type",
                source: OptionSource::Static(MOVIE_TYPE_OPTIONS),
            },
            FilterDef {
                key: "isPublished",
                label: "Status",
                source: OptionSource::Static(PUBLISHED_OPTIONS),
            },
        ]
    }

    fn detail_rows(m: &Movie) -> Vec<(&'static str, CellValue)> {
        let mut rows = vec![
            ("ID", CellValue::text(m.id.clone())),
            ("Poster", CellValue::Image(m.poster.clone())),
        ];
        for (code, title) in m.title.iter() {
            rows.push(("Title", CellValue::Text(format!("[{code}] {title}"))));
        }
        for (code, slug) in m.slug.iter() {
            rows.push(("Slug", CellValue::Text(format!("[{code}] {slug}"))));
        }
        for (code, description) in m.description.iter() {
            rows.push(("Description", CellValue::Text(format!("[{code}] {description}"))));
        }
        let franchise = m.franchise_id.as_ref().map(|f| f.label(&m.default_lang));
        let director = m.director.as_ref().map(|d| d.label(&m.default_lang));
        let flags = m
            .flags
            .iter()
            .map(|f| f.kind.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        rows.extend([
            ("Default language", CellValue::text(m.default_lang.clone())),
            ("Type", CellValue::text(m.movie_type.label())),
            ("Franchise", CellValue::optional(franchise.as_deref())),
            ("Genres", relation_list(m, &m.genres)),
            ("Cast", relation_list(m, &m.cast)),
            ("Director", CellValue::optional(director.as_deref())),
            ("Year", CellValue::optional(m.year.map(|y| y.to_string()).as_deref())),
            ("Country", CellValue::optional(m.country.as_deref())),
            ("Episodes", episodes_cell(m)),
            ("Trailer", CellValue::optional(m.trailer_url.as_deref())),
            ("Flags", CellValue::optional(Some(flags.as_str()))),
            ("Status", CellValue::published(m.is_published)),
            ("Rating", CellValue::Text(format!("{:.1}", m.rating_avg))),
            ("Views", CellValue::Text(m.views.to_string())),
            ("Daily views", CellValue::Text(m.daily_views.to_string())),
            ("Weekly views", CellValue::Text(m.weekly_views.to_string())),
            ("Likes", CellValue::Text(m.likes.to_string())),
            ("Favorites", CellValue::Text(m.favorites.to_string())),
            ("Shares", CellValue::Text(m.shares.to_string())),
            ("Comments", CellValue::Text(m.comments.to_string())),
            ("Trending updated", timestamp_cell(m.last_trending_update.as_ref())),
            ("Created", timestamp_cell(m.created_at.as_ref())),
            ("Updated", timestamp_cell(m.updated_at.as_ref())),
        ]);
        rows
    }

    fn form_fields(form: RwSignal<MovieForm>, errors: Signal<ValidationErrors>) -> AnyView {
        ui::movie_fields(form, errors).into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        serde_json::from_value(serde_json::json!({
            "_id": "m1",
            "title": {"vi": "Bố Già"},
            "type": "SERIES",
            "currentEpisode": 3,
            "totalEpisodes": 12,
            "isPublished": false
        }))
        .unwrap()
    }

    #[test]
    fn test_filters_apply_locally() {
        let m = movie();
        assert!(MovieSchema::matches_filter(&m, "type", "SERIES"));
        assert!(!MovieSchema::matches_filter(&m, "type", "MOVIE"));
        assert!(MovieSchema::matches_filter(&m, "isPublished", "false"));
        assert!(!MovieSchema::matches_filter(&m, "isPublished", "true"));
        assert!(MovieSchema::matches_filter(&m, "unknown", "x"));
    }

    #[test]
    fn test_episodes_cell() {
        assert_eq!(episodes_cell(&movie()), CellValue::Text("3/12".into()));
    }

    #[test]
    fn test_search_matches_title() {
        assert!(MovieSchema::matches_search(&movie(), "bố"));
        assert!(!MovieSchema::matches_search(&movie(), "matrix"));
    }
}
