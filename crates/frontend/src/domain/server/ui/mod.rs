use contracts::domain::server::ServerForm;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use super::ServerSchema;
use crate::shared::components::form_fields::{bound_checkbox, bound_input, FieldSpec};
use crate::shared::entity_pages::{entity_detail, entity_form, entity_list};

const NAME: FieldSpec = FieldSpec::text("name", "Name").required();
const BASE_URL: FieldSpec = FieldSpec::text("baseUrl", "Base URL")
    .kind("url")
    .placeholder("https://cdn.example.com");

pub fn server_fields(form: RwSignal<ServerForm>, errors: Signal<ValidationErrors>) -> impl IntoView {
    view! {
        {bound_input(form, errors, NAME, |f| f.name.as_str(), |f, v| f.name = v)}
        {bound_input(form, errors, BASE_URL, |f| f.base_url.as_str(), |f, v| f.base_url = v)}
        {bound_checkbox(form, "Active", |f| f.is_active, |f, on| f.is_active = on)}
    }
}

#[component]
pub fn ServerList() -> impl IntoView {
    entity_list::<ServerSchema>()
}

#[component]
pub fn ServerDetails() -> impl IntoView {
    entity_detail::<ServerSchema>()
}

#[component]
pub fn ServerFormPage() -> impl IntoView {
    entity_form::<ServerSchema>()
}
