use contracts::domain::user::{UserForm, UserRole};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use super::{UserSchema, ROLE_OPTIONS};
use crate::shared::components::form_fields::{bound_checkbox, bound_input, bound_select, FieldSpec};
use crate::shared::components::ui::{Button, Checkbox};
use crate::shared::entity_pages::{entity_detail, entity_form, entity_list};

const EMAIL: FieldSpec = FieldSpec::text("email", "Email").kind("email").required();
const PASSWORD: FieldSpec = FieldSpec::text("password", "Password")
    .kind("password")
    .placeholder("At least 6 characters");
const ROLE: FieldSpec = FieldSpec::text("role", "Role").required();
const AVATAR: FieldSpec = FieldSpec::text("avatar", "Avatar URL").kind("url");
const COVER: FieldSpec = FieldSpec::text("cover", "Cover URL").kind("url");
const USERNAME: FieldSpec = FieldSpec::text("username", "Username");
const FIRST_NAME: FieldSpec = FieldSpec::text("firstName", "First name");
const LAST_NAME: FieldSpec = FieldSpec::text("lastName", "Last name");
const DISPLAY_NAME: FieldSpec = FieldSpec::text("displayName", "Display name");

pub fn user_fields(form: RwSignal<UserForm>, errors: Signal<ValidationErrors>) -> impl IntoView {
    let editing = Signal::derive(move || form.with(|f| f.editing));
    let password_shown = Signal::derive(move || form.with(|f| !f.editing || f.change_password));
    let change_password = Signal::derive(move || form.with(|f| f.change_password));
    let roles: Vec<(String, String)> = ROLE_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    let generate = move |_: leptos::ev::MouseEvent| {
        form.update(|f| {
            let seed = if f.email.trim().is_empty() {
                js_sys::Date::now().to_string()
            } else {
                f.email.trim().to_string()
            };
            f.generate_images(&seed);
        })
    };

    view! {
        {bound_input(form, errors, EMAIL, |f| f.email.as_str(), |f, v| f.email = v)}
        <Show when=move || editing.get()>
            <Checkbox
                label="Change password".to_string()
                checked=change_password
                on_change=Callback::new(move |on: bool| form.update(|f| f.set_change_password(on)))
            />
        </Show>
        <Show when=move || password_shown.get()>
            {bound_input(form, errors, PASSWORD, |f| f.password.as_str(), |f, v| f.password = v)}
        </Show>
        {bound_select(
            form,
            errors,
            ROLE,
            roles,
            |f| f.role.as_str(),
            |f, v| {
                if let Some(role) = UserRole::parse(&v) {
                    f.role = role;
                }
            },
        )}

        <h3 class="form__section-title">"Profile"</h3>
        <div class="form__row">
            {bound_input(form, errors, USERNAME, |f| f.username.as_str(), |f, v| f.username = v)}
            {bound_input(form, errors, DISPLAY_NAME, |f| f.display_name.as_str(), |f, v| f.display_name = v)}
        </div>
        <div class="form__row">
            {bound_input(form, errors, FIRST_NAME, |f| f.first_name.as_str(), |f, v| f.first_name = v)}
            {bound_input(form, errors, LAST_NAME, |f| f.last_name.as_str(), |f, v| f.last_name = v)}
        </div>
        {bound_input(form, errors, AVATAR, |f| f.avatar.as_str(), |f, v| f.avatar = v)}
        {bound_input(form, errors, COVER, |f| f.cover.as_str(), |f, v| f.cover = v)}
        <Button variant="secondary" size="sm" on_click=Callback::new(generate)>
            "Generate random images"
        </Button>
        {move || {
            let avatar = form.with(|f| f.avatar.clone());
            (!avatar.is_empty()).then(|| view! { <img class="avatar-preview" src=avatar alt="avatar" /> })
        }}

        {bound_checkbox(form, "Active", |f| f.is_active, |f, on| f.is_active = on)}
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    entity_list::<UserSchema>()
}

#[component]
pub fn UserDetails() -> impl IntoView {
    entity_detail::<UserSchema>()
}

#[component]
pub fn UserFormPage() -> impl IntoView {
    entity_form::<UserSchema>()
}
