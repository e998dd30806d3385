//! Inputs bound to one field of a form draft held in a signal.

use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use super::ui::{Checkbox, Input, Select, Textarea};

/// Presentation of a bound input. `key` is the field name validation
/// errors are reported under.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            input_type: "text",
            placeholder: "",
            required: false,
        }
    }

    pub const fn kind(mut self, input_type: &'static str) -> Self {
        self.input_type = input_type;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

fn error_for(errors: Signal<ValidationErrors>, key: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(key).map(str::to_string)))
}

pub fn bound_input<F>(
    form: RwSignal<F>,
    errors: Signal<ValidationErrors>,
    spec: FieldSpec,
    get: fn(&F) -> &str,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| get(f).to_string()));
    view! {
        <Input
            label=spec.label
            input_type=spec.input_type
            placeholder=spec.placeholder
            required=spec.required
            value=value
            error=error_for(errors, spec.key)
            on_input=Callback::new(move |v: String| form.update(|f| set(f, v)))
        />
    }
}

pub fn bound_textarea<F>(
    form: RwSignal<F>,
    label: &'static str,
    get: fn(&F) -> &str,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| get(f).to_string()));
    view! {
        <Textarea
            label=label
            value=value
            on_input=Callback::new(move |v: String| form.update(|f| set(f, v)))
        />
    }
}

pub fn bound_checkbox<F>(
    form: RwSignal<F>,
    label: &'static str,
    get: fn(&F) -> bool,
    set: fn(&mut F, bool),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    let checked = Signal::derive(move || form.with(get));
    view! {
        <Checkbox
            label=label.to_string()
            checked=checked
            on_change=Callback::new(move |on: bool| form.update(|f| set(f, on)))
        />
    }
}

/// Select over a fixed list of `(value, label)` pairs.
pub fn bound_select<F>(
    form: RwSignal<F>,
    errors: Signal<ValidationErrors>,
    spec: FieldSpec,
    options: Vec<(String, String)>,
    get: fn(&F) -> &str,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| get(f).to_string()));
    view! {
        <Select
            label=spec.label
            required=spec.required
            value=value
            options=options
            error=error_for(errors, spec.key)
            on_change=Callback::new(move |v: String| form.update(|f| set(f, v)))
        />
    }
}

/// Error message of a field, for inputs built by hand.
pub fn field_error_signal(errors: Signal<ValidationErrors>, key: &'static str) -> Signal<Option<String>> {
    error_for(errors, key)
}

/// Comma-separated list input, e.g. ids of cast members.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" a1, b2 ,,c3 "), vec!["a1", "b2", "c3"]);
        assert!(split_list("  ").is_empty());
    }

    #[test]
    fn test_field_spec_builder() {
        const SPEC: FieldSpec = FieldSpec::text("videoUrl", "Video URL").kind("url").required();
        assert_eq!(SPEC.input_type, "url");
        assert!(SPEC.required);
        assert_eq!(SPEC.placeholder, "");
    }
}
