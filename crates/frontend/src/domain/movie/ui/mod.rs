use chrono::Utc;
use contracts::domain::movie::{FlagDraft, FlagSource, MovieFlagType, MovieForm, MovieType};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use super::MovieSchema;
use crate::shared::components::form_fields::{
    bound_checkbox, bound_input, bound_select, split_list, FieldSpec,
};
use crate::shared::components::multilang_editor::multilang_editor;
use crate::shared::components::relation_select::{MultiSelect, OptionSource, SingleSelect};
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::entity_pages::{entity_detail, entity_form, entity_list};
use crate::shared::icons::icon;

const TYPE: FieldSpec = FieldSpec::text("type", "Type").required();
const YEAR: FieldSpec = FieldSpec::text("year", "Year").kind("number");
const COUNTRY: FieldSpec = FieldSpec::text("country", "Country");
const CURRENT_EPISODE: FieldSpec = FieldSpec::text("currentEpisode", "Current episode").kind("number");
const TOTAL_EPISODES: FieldSpec = FieldSpec::text("totalEpisodes", "Total episodes").kind("number");
const DIRECTOR: FieldSpec = FieldSpec::text("director", "Director ID");
const POSTER: FieldSpec = FieldSpec::text("poster", "Poster URL").kind("url");
const THUMBNAIL: FieldSpec = FieldSpec::text("thumbnail", "Thumbnail URL").kind("url");
const BANNER: FieldSpec = FieldSpec::text("banner", "Banner URL").kind("url");
const BACKDROP: FieldSpec = FieldSpec::text("backdrop", "Backdrop URL").kind("url");
const TRAILER: FieldSpec = FieldSpec::text("trailerUrl", "Trailer URL")
    .kind("url")
    .placeholder("https://www.youtube.com/watch?v=...");

fn movie_type_options() -> Vec<(String, String)> {
    MovieType::ALL
        .into_iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect()
}

pub fn movie_fields(form: RwSignal<MovieForm>, errors: Signal<ValidationErrors>) -> impl IntoView {
    let franchise = Signal::derive(move || form.with(|f| f.franchise_id.clone()));
    let genres = Signal::derive(move || form.with(|f| f.genres.clone()));

    view! {
        {multilang_editor(form, errors)}

        <h3 class="form__section-title">"Classification"</h3>
        <div class="form__row">
            {bound_select(
                form,
                errors,
                TYPE,
                movie_type_options(),
                |f| f.movie_type.as_str(),
                |f, v| {
                    if let Some(kind) = MovieType::parse(&v) {
                        f.movie_type = kind;
                    }
                },
            )}
            {bound_input(form, errors, YEAR, |f| f.year.as_str(), |f, v| f.year = v)}
            {bound_input(form, errors, COUNTRY, |f| f.country.as_str(), |f, v| f.country = v)}
        </div>
        <div class="form__row">
            {bound_input(form, errors, CURRENT_EPISODE, |f| f.current_episode.as_str(), |f, v| f.current_episode = v)}
            {bound_input(form, errors, TOTAL_EPISODES, |f| f.total_episodes.as_str(), |f, v| f.total_episodes = v)}
        </div>
        <SingleSelect
            label="Franchise"
            value=franchise
            on_change=Callback::new(move |id: String| form.update(|f| f.franchise_id = id))
            source=OptionSource::Franchises
        />
        <MultiSelect
            label="Genres"
            values=genres
            on_change=Callback::new(move |ids: Vec<String>| form.update(|f| f.genres = ids))
            source=OptionSource::Genres
        />

        <h3 class="form__section-title">"People"</h3>
        {cast_input(form)}
        {bound_input(form, errors, DIRECTOR, |f| f.director.as_str(), |f, v| f.director = v)}

        <h3 class="form__section-title">"Media"</h3>
        {bound_input(form, errors, POSTER, |f| f.poster.as_str(), |f, v| f.poster = v)}
        {bound_input(form, errors, THUMBNAIL, |f| f.thumbnail.as_str(), |f, v| f.thumbnail = v)}
        {bound_input(form, errors, BANNER, |f| f.banner.as_str(), |f, v| f.banner = v)}
        {bound_input(form, errors, BACKDROP, |f| f.backdrop.as_str(), |f, v| f.backdrop = v)}
        {bound_input(form, errors, TRAILER, |f| f.trailer_url.as_str(), |f, v| f.trailer_url = v)}

        <h3 class="form__section-title">"Flags"</h3>
        {flags_editor(form, errors)}

        {bound_checkbox(form, "Published", |f| f.is_published, |f, on| f.is_published = on)}
    }
}

/// Cast ids typed as a comma-separated list. The raw text is kept locally so
/// separators survive while typing.
fn cast_input(form: RwSignal<MovieForm>) -> impl IntoView {
    let raw = RwSignal::new(String::new());

    Effect::new(move |_| {
        let cast = form.with(|f| f.cast.clone());
        if split_list(&raw.get_untracked()) != cast {
            raw.set(cast.join(", "));
        }
    });

    view! {
        <Input
            label="Cast (comma-separated ids)"
            value=raw
            placeholder="id1, id2"
            on_input=Callback::new(move |v: String| {
                let ids = split_list(&v);
                raw.set(v);
                form.update(|f| f.cast = ids);
            })
        />
    }
}

fn flag_error(errors: Signal<ValidationErrors>, index: usize, name: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || {
        errors.with(|e| e.get(&format!("flags.{index}.{name}")).map(str::to_string))
    })
}

fn flag_value(form: RwSignal<MovieForm>, index: usize, get: fn(&FlagDraft) -> &str) -> Signal<String> {
    Signal::derive(move || {
        form.with(|f| f.flags.get(index).map(|d| get(d).to_string()).unwrap_or_default())
    })
}

fn flag_setter(form: RwSignal<MovieForm>, index: usize, set: fn(&mut FlagDraft, String)) -> Callback<String> {
    Callback::new(move |v: String| {
        form.update(|f| {
            if let Some(draft) = f.flags.get_mut(index) {
                set(draft, v);
            }
        })
    })
}

fn flag_row(form: RwSignal<MovieForm>, errors: Signal<ValidationErrors>, index: usize) -> impl IntoView {
    let kinds: Vec<(String, String)> = MovieFlagType::ALL
        .into_iter()
        .map(|k| (k.as_str().to_string(), k.as_str().to_string()))
        .collect();
    let sources = vec![
        (FlagSource::Admin.as_str().to_string(), "Admin".to_string()),
        (FlagSource::System.as_str().to_string(), "System".to_string()),
    ];

    view! {
        <div class="flag-row">
            <div class="form__row">
                <Select
                    label="Type"
                    value=flag_value(form, index, |d| d.kind.as_str())
                    options=kinds
                    on_change=flag_setter(form, index, |d, v| {
                        if let Some(kind) = MovieFlagType::parse(&v) {
                            d.kind = kind;
                        }
                    })
                />
                <Select
                    label="Source"
                    value=flag_value(form, index, |d| d.source.as_str())
                    options=sources
                    on_change=flag_setter(form, index, |d, v| {
                        if let Some(source) = FlagSource::parse(&v) {
                            d.source = source;
                        }
                    })
                />
                <Input
                    label="Score"
                    input_type="number"
                    value=flag_value(form, index, |d| d.score.as_str())
                    error=flag_error(errors, index, "score")
                    on_input=flag_setter(form, index, |d, v| d.score = v)
                />
                <Input
                    label="Priority"
                    input_type="number"
                    value=flag_value(form, index, |d| d.priority.as_str())
                    error=flag_error(errors, index, "priority")
                    on_input=flag_setter(form, index, |d, v| d.priority = v)
                />
            </div>
            <div class="form__row">
                <Input
                    label="Start"
                    input_type="datetime-local"
                    required=true
                    value=flag_value(form, index, |d| d.start_at.as_str())
                    error=flag_error(errors, index, "startAt")
                    on_input=flag_setter(form, index, |d, v| d.start_at = v)
                />
                <Input
                    label="End"
                    input_type="datetime-local"
                    value=flag_value(form, index, |d| d.end_at.as_str())
                    error=flag_error(errors, index, "endAt")
                    on_input=flag_setter(form, index, |d, v| d.end_at = v)
                />
                <Input
                    label="Reason"
                    value=flag_value(form, index, |d| d.reason.as_str())
                    on_input=flag_setter(form, index, |d, v| d.reason = v)
                />
            </div>
            <Button
                variant="ghost"
                size="sm"
                on_click=Callback::new(move |_: leptos::ev::MouseEvent| form.update(|f| f.remove_flag(index)))
            >
                {icon("trash")}
                " Remove flag"
            </Button>
        </div>
    }
}

fn flags_editor(form: RwSignal<MovieForm>, errors: Signal<ValidationErrors>) -> impl IntoView {
    let count = Memo::new(move |_| form.with(|f| f.flags.len()));

    view! {
        <div class="flags-editor">
            {move || {
                (0..count.get())
                    .map(|index| flag_row(form, errors, index))
                    .collect_view()
            }}
            <Button
                variant="secondary"
                size="sm"
                on_click=Callback::new(move |_: leptos::ev::MouseEvent| form.update(|f| f.add_flag(Utc::now())))
            >
                {icon("plus")}
                " Add flag"
            </Button>
        </div>
    }
}

#[component]
pub fn MovieList() -> impl IntoView {
    entity_list::<MovieSchema>()
}

#[component]
pub fn MovieDetails() -> impl IntoView {
    entity_detail::<MovieSchema>()
}

#[component]
pub fn MovieFormPage() -> impl IntoView {
    entity_form::<MovieSchema>()
}
