use leptos::prelude::*;

use super::{field_error, field_label, has_error};

/// Select over `(value, label)` pairs.
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {field_label(label, required)}
            <select
                class="form__select"
                class:form__input--invalid=move || has_error(error)
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(on_change) = on_change {
                        on_change.run(event_target_value(&ev));
                    }
                }
            >
                {move || options.get().into_iter().map(|(option_value, option_label)| {
                    let selected = option_value.clone();
                    view! {
                        <option value=option_value selected=move || value.get() == selected>
                            {option_label}
                        </option>
                    }
                }).collect_view()}
            </select>
            {field_error(error)}
        </div>
    }
}
