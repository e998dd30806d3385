use contracts::domain::genre::GenreForm;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use super::GenreSchema;
use crate::shared::components::form_fields::bound_checkbox;
use crate::shared::components::multilang_editor::multilang_editor;
use crate::shared::entity_pages::{entity_detail, entity_form, entity_list};

pub fn genre_fields(form: RwSignal<GenreForm>, errors: Signal<ValidationErrors>) -> impl IntoView {
    view! {
        {multilang_editor(form, errors)}
        {bound_checkbox(form, "Active", |f| f.is_active, |f, on| f.is_active = on)}
    }
}

#[component]
pub fn GenreList() -> impl IntoView {
    entity_list::<GenreSchema>()
}

#[component]
pub fn GenreDetails() -> impl IntoView {
    entity_detail::<GenreSchema>()
}

#[component]
pub fn GenreFormPage() -> impl IntoView {
    entity_form::<GenreSchema>()
}
