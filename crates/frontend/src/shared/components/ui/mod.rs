//! Form controls shared by every entity form. Each control renders inside a
//! `form__group` with its label and validation message.

pub mod button;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;

use leptos::prelude::*;

/// Field-level validation message under an input.
pub(crate) fn field_error(error: MaybeProp<String>) -> impl IntoView {
    move || {
        error
            .get()
            .filter(|e| !e.is_empty())
            .map(|e| view! { <div class="form__error">{e}</div> })
    }
}

pub(crate) fn has_error(error: MaybeProp<String>) -> bool {
    error.get().is_some_and(|e| !e.is_empty())
}

/// Label row with the required marker.
pub(crate) fn field_label(label: MaybeProp<String>, required: bool) -> impl IntoView {
    move || {
        label.get().map(|text| {
            view! {
                <label class="form__label">
                    {text}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            }
        })
    }
}
