//! Editor for the translatable fields of a form: a language bar with add,
//! remove and default-language controls, then one block of title, slug and
//! description inputs per active language.

use contracts::shared::multilang::{LangField, Multilingual};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use super::ui::{Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::notice::alert;

/// Display names of common languages. Any other code is shown as-is.
const LANGUAGE_NAMES: [(&str, &str); 8] = [
    ("vi", "Tiếng Việt"),
    ("en", "English"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("zh", "中文"),
    ("th", "ไทย"),
    ("fr", "Français"),
    ("es", "Español"),
];

pub fn language_name(code: &str) -> &str {
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

pub fn multilang_editor<F>(form: RwSignal<F>, errors: Signal<ValidationErrors>) -> impl IntoView
where
    F: Multilingual + Clone + Send + Sync + 'static,
{
    let languages = move || form.with(|f| f.editor().languages().to_vec());
    let default_language = move || form.with(|f| f.editor().default_language().to_string());
    let (to_add, set_to_add) = signal(String::new());

    let add_language = move |_| {
        let code = to_add.get_untracked();
        let added = form
            .try_update(|f| f.editor_mut().add_language(&code))
            .unwrap_or(false);
        if added || code.trim().is_empty() {
            set_to_add.set(String::new());
        } else {
            alert(&format!("Language {} is already in use", code.trim()));
        }
    };

    let remove_language = move |code: String| {
        let result = form
            .try_update(|f| f.editor_mut().remove_language(&code))
            .unwrap_or(Ok(()));
        if let Err(e) = result {
            alert(&e.to_string());
        }
    };

    let change_default = Callback::new(move |code: String| {
        let result = form
            .try_update(|f| f.editor_mut().change_default_language(&code))
            .unwrap_or(Ok(()));
        if let Err(e) = result {
            alert(&e.to_string());
        }
    });

    let default_options = Signal::derive(move || {
        languages()
            .into_iter()
            .map(|code| {
                let label = format!("{} ({})", language_name(&code), code);
                (code, label)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="multilang">
            <div class="multilang__bar">
                <div class="multilang__chips">
                    {icon("globe")}
                    <For
                        each=languages
                        key=|code| code.clone()
                        children=move |code| {
                            let is_default = {
                                let code = code.clone();
                                move || default_language() == code
                            };
                            let can_remove = {
                                let code = code.clone();
                                move || form.with(|f| f.editor().can_remove(&code))
                            };
                            let remove_code = code.clone();
                            let is_default_class = is_default.clone();
                            view! {
                                <span class="multilang__chip" class:multilang__chip--default=is_default_class>
                                    {code.clone()}
                                    <Show when=is_default>
                                        <span class="multilang__chip-tag">"default"</span>
                                    </Show>
                                    <button
                                        type="button"
                                        class="multilang__chip-remove"
                                        class:multilang__chip-remove--locked=move || !can_remove()
                                        title="Remove language"
                                        on:click=move |_| remove_language(remove_code.clone())
                                    >
                                        {icon("x")}
                                    </button>
                                </span>
                            }
                        }
                    />
                </div>
                <div class="multilang__controls">
                    <Select
                        label="Default language"
                        value=Signal::derive(default_language)
                        options=default_options
                        on_change=change_default
                    />
                    <div class="multilang__add">
                        <Input
                            value=to_add
                            placeholder="Language code, e.g. de"
                            on_input=Callback::new(move |code: String| set_to_add.set(code))
                        />
                        <button type="button" class="button button--secondary" on:click=add_language>
                            {icon("plus")}
                            " Add"
                        </button>
                    </div>
                </div>
            </div>

            <For
                each=languages
                key=|code| code.clone()
                children=move |code| language_block(form, errors, code)
            />
        </div>
    }
}

/// Inputs of every managed field for one language. Field-level errors are
/// shown on the default language's block.
fn language_block<F>(form: RwSignal<F>, errors: Signal<ValidationErrors>, code: String) -> impl IntoView
where
    F: Multilingual + Clone + Send + Sync + 'static,
{
    let manages = |field: LangField| form.with_untracked(|f| f.editor().manages(field));
    let heading = format!("{} ({})", language_name(&code), code);

    let field_value = {
        let code = code.clone();
        move |field: LangField| {
            let code = code.clone();
            Signal::derive(move || form.with(|f| f.editor().value(&code, field).to_string()))
        }
    };
    let on_field_input = {
        let code = code.clone();
        move |field: LangField| {
            let code = code.clone();
            Callback::new(move |v: String| {
                form.update(|f| f.editor_mut().set_field_value(&code, field, &v))
            })
        }
    };
    let field_error = {
        let code = code.clone();
        move |field: LangField| {
            let code = code.clone();
            Signal::derive(move || {
                let is_default = form.with(|f| f.editor().default_language() == code);
                if is_default {
                    errors.with(|e| e.get(field.key()).map(str::to_string))
                } else {
                    None
                }
            })
        }
    };

    let title = manages(LangField::Title).then(|| {
        view! {
            <Input
                label="Title"
                value=field_value(LangField::Title)
                on_input=on_field_input(LangField::Title)
                error=field_error(LangField::Title)
            />
        }
    });
    let slug = manages(LangField::Slug).then(|| {
        view! {
            <Input
                label="Slug"
                value=field_value(LangField::Slug)
                on_input=on_field_input(LangField::Slug)
                error=field_error(LangField::Slug)
            />
        }
    });
    let description = manages(LangField::Description).then(|| {
        view! {
            <Textarea
                label="Description"
                value=field_value(LangField::Description)
                on_input=on_field_input(LangField::Description)
                error=field_error(LangField::Description)
                rows=4
            />
        }
    });

    view! {
        <fieldset class="multilang__block">
            <legend>{heading}</legend>
            {title}
            {slug}
            {description}
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use contracts::shared::multilang::MultiLangEditor;

    #[test]
    fn test_language_name_falls_back_to_code() {
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("xx"), "xx");
    }

    #[test]
    fn test_free_text_code_outside_named_list() {
        assert!(!LANGUAGE_NAMES.iter().any(|(code, _)| *code == "pt"));
        let mut editor = MultiLangEditor::new("vi", &[LangField::Title]);
        assert!(editor.add_language("pt"));
        assert_eq!(editor.languages(), ["vi", "pt"]);
        assert_eq!(language_name("pt"), "pt");
    }
}
