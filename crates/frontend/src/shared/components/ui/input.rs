use leptos::prelude::*;

use super::{field_error, field_label, has_error};

/// Single-line text input. `input_type` defaults to `"text"`; forms also use
/// `"email"`, `"password"`, `"url"`, `"number"` and `"datetime-local"`.
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {field_label(label, required)}
            <input
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                class="form__input"
                class:form__input--invalid=move || has_error(error)
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
            />
            {field_error(error)}
        </div>
    }
}
