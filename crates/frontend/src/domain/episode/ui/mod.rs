use contracts::domain::episode::EpisodeForm;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use super::EpisodeSchema;
use crate::shared::components::form_fields::{
    bound_checkbox, bound_input, field_error_signal, FieldSpec,
};
use crate::shared::components::multilang_editor::multilang_editor;
use crate::shared::components::relation_select::{OptionSource, SingleSelect};
use crate::shared::entity_pages::{entity_detail, entity_form, entity_list};

const EPISODE_LABEL: FieldSpec = FieldSpec::text("episodeOrLabel", "Episode number or label")
    .placeholder("1, 2, Special...")
    .required();
const VIDEO_URL: FieldSpec = FieldSpec::text("videoUrl", "Video URL")
    .kind("url")
    .placeholder("https://.../index.m3u8")
    .required();
const DURATION: FieldSpec = FieldSpec::text("duration", "Duration (seconds)").kind("number");
const THUMBNAIL: FieldSpec = FieldSpec::text("thumbnail", "Thumbnail URL").kind("url");

pub fn episode_fields(form: RwSignal<EpisodeForm>, errors: Signal<ValidationErrors>) -> impl IntoView {
    let movie_id = Signal::derive(move || form.with(|f| f.movie_id.clone()));
    let server_id = Signal::derive(move || form.with(|f| f.server_id.clone()));

    view! {
        <div class="form__row">
            <SingleSelect
                label="Movie"
                value=movie_id
                on_change=Callback::new(move |id: String| form.update(|f| f.movie_id = id))
                source=OptionSource::Movies
                empty_label="Choose a movie"
                required=true
                error=field_error_signal(errors, "movieId")
            />
            <SingleSelect
                label="Server"
                value=server_id
                on_change=Callback::new(move |id: String| form.update(|f| f.server_id = id))
                source=OptionSource::Servers
                empty_label="Choose a server"
                required=true
                error=field_error_signal(errors, "serverId")
            />
        </div>
        {multilang_editor(form, errors)}
        {bound_input(form, errors, EPISODE_LABEL, |f| f.episode_or_label.as_str(), |f, v| f.episode_or_label = v)}
        {bound_input(form, errors, VIDEO_URL, |f| f.video_url.as_str(), |f, v| f.video_url = v)}
        {bound_input(form, errors, DURATION, |f| f.duration.as_str(), |f, v| f.duration = v)}
        {bound_input(form, errors, THUMBNAIL, |f| f.thumbnail.as_str(), |f, v| f.thumbnail = v)}
        {bound_checkbox(form, "Published", |f| f.is_published, |f, on| f.is_published = on)}
    }
}

#[component]
pub fn EpisodeList() -> impl IntoView {
    entity_list::<EpisodeSchema>()
}

#[component]
pub fn EpisodeDetails() -> impl IntoView {
    entity_detail::<EpisodeSchema>()
}

#[component]
pub fn EpisodeFormPage() -> impl IntoView {
    entity_form::<EpisodeSchema>()
}
