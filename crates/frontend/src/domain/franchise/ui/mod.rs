use contracts::domain::franchise::FranchiseForm;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use super::FranchiseSchema;
use crate::shared::components::form_fields::bound_checkbox;
use crate::shared::components::multilang_editor::multilang_editor;
use crate::shared::components::relation_select::{MultiSelect, OptionSource};
use crate::shared::entity_pages::{entity_detail, entity_form, entity_list};

pub fn franchise_fields(
    form: RwSignal<FranchiseForm>,
    errors: Signal<ValidationErrors>,
) -> impl IntoView {
    let movies = Signal::derive(move || form.with(|f| f.movies.clone()));

    view! {
        {multilang_editor(form, errors)}
        <MultiSelect
            label="Movies"
            values=movies
            on_change=Callback::new(move |ids: Vec<String>| form.update(|f| f.movies = ids))
            source=OptionSource::Movies
        />
        {bound_checkbox(form, "Published", |f| f.is_published, |f, on| f.is_published = on)}
    }
}

#[component]
pub fn FranchiseList() -> impl IntoView {
    entity_list::<FranchiseSchema>()
}

#[component]
pub fn FranchiseDetails() -> impl IntoView {
    entity_detail::<FranchiseSchema>()
}

#[component]
pub fn FranchiseFormPage() -> impl IntoView {
    entity_form::<FranchiseSchema>()
}
