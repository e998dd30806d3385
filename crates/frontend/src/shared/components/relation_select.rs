//! Pickers for references to other records (genres, movies, servers,
//! franchises) and for fixed option lists.

use contracts::shared::api::ListQuery;
use contracts::shared::localized::DEFAULT_LANGUAGE;
use contracts::shared::relation::{RelationRef, RelationSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ui::field_error;
use crate::shared::api_client::{use_api, ApiClient, ApiError};

/// Where the choices of a picker come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    Static(&'static [(&'static str, &'static str)]),
    Movies,
    Servers,
    Genres,
    Franchises,
}

impl OptionSource {
    fn endpoint(self) -> Option<&'static str> {
        match self {
            OptionSource::Static(_) => None,
            OptionSource::Movies => Some("/master/movies"),
            OptionSource::Servers => Some("/master/servers"),
            OptionSource::Genres => Some("/genre/admin/all"),
            OptionSource::Franchises => Some("/master/franchises"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
}

pub async fn load_options(client: &ApiClient, source: OptionSource) -> Result<Vec<SelectOption>, ApiError> {
    let Some(endpoint) = source.endpoint() else {
        return Ok(static_options(source));
    };
    let page = client
        .list::<RelationSummary>(endpoint, &ListQuery::default())
        .await?;
    Ok(page
        .items
        .into_iter()
        .map(|summary| {
            let id = summary.id.clone();
            SelectOption {
                id,
                label: RelationRef::Object(summary).label(DEFAULT_LANGUAGE),
            }
        })
        .collect())
}

fn static_options(source: OptionSource) -> Vec<SelectOption> {
    match source {
        OptionSource::Static(pairs) => pairs
            .iter()
            .map(|(id, label)| SelectOption {
                id: id.to_string(),
                label: label.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Options whose label or id contains `needle`, case-insensitively.
pub fn filter_options(options: &[SelectOption], needle: &str) -> Vec<SelectOption> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle) || o.id.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Load the choices of `source` once into a signal.
pub fn use_options(source: OptionSource) -> RwSignal<Vec<SelectOption>> {
    let options = RwSignal::new(static_options(source));
    if source.endpoint().is_some() {
        let client = use_api();
        spawn_local(async move {
            match load_options(&client, source).await {
                Ok(loaded) => {
                    let _ = options.try_set(loaded);
                }
                Err(e) => log::error!("failed to load options for {:?}: {}", source, e),
            }
        });
    }
    options
}

/// Single-choice picker. An empty value means "none".
#[component]
pub fn SingleSelect(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    source: OptionSource,
    /// Label of the empty choice
    #[prop(optional)]
    empty_label: Option<&'static str>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let options = use_options(source);
    let empty_label = empty_label.unwrap_or("None");
    let (needle, set_needle) = signal(String::new());
    let searchable = source.endpoint().is_some();

    // keep the current choice visible even when the filter hides it
    let shown = move || {
        let current = value.get();
        options.with(|all| {
            let mut shown = filter_options(all, &needle.get());
            if !current.is_empty() && !shown.iter().any(|o| o.id == current) {
                if let Some(selected) = all.iter().find(|o| o.id == current) {
                    shown.insert(0, selected.clone());
                }
            }
            shown
        })
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {searchable.then(|| view! {
                <input
                    type="text"
                    class="form__input form__input--filter"
                    placeholder="Filter..."
                    prop:value=move || needle.get()
                    on:input=move |ev| set_needle.set(event_target_value(&ev))
                />
            })}
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>{empty_label}</option>
                {move || shown().into_iter().map(|o| {
                    let id = o.id.clone();
                    view! {
                        <option value=o.id selected=move || value.get() == id>{o.label}</option>
                    }
                }).collect_view()}
            </select>
            {field_error(error)}
        </div>
    }
}

/// Multi-choice picker rendered as a filterable checkbox list.
#[component]
pub fn MultiSelect(
    #[prop(into)]
    label: String,
    #[prop(into)]
    values: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    source: OptionSource,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let options = use_options(source);
    let (needle, set_needle) = signal(String::new());

    let toggle = move |id: String, on: bool| {
        let mut next = values.get_untracked();
        if on {
            if !next.contains(&id) {
                next.push(id);
            }
        } else {
            next.retain(|v| *v != id);
        }
        on_change.run(next);
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                <span class="form__hint">
                    {move || format!(" ({} selected)", values.with(Vec::len))}
                </span>
            </label>
            <input
                type="text"
                class="form__input form__input--filter"
                placeholder="Filter..."
                prop:value=move || needle.get()
                on:input=move |ev| set_needle.set(event_target_value(&ev))
            />
            <div class="multi-select">
                {move || {
                    let shown = options.with(|all| filter_options(all, &needle.get()));
                    shown.into_iter().map(|o| {
                        let id = o.id.clone();
                        let checked_id = o.id.clone();
                        view! {
                            <label class="multi-select__option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || values.with(|v| v.contains(&checked_id))
                                    on:change=move |ev| toggle(id.clone(), event_target_checked(&ev))
                                />
                                {o.label}
                            </label>
                        }
                    }).collect_view()
                }}
            </div>
            {field_error(error)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption { id: "g1".into(), label: "Hành Động".into() },
            SelectOption { id: "g2".into(), label: "Comedy".into() },
        ]
    }

    #[test]
    fn test_filter_options() {
        assert_eq!(filter_options(&options(), "").len(), 2);
        assert_eq!(filter_options(&options(), "COMEDY")[0].id, "g2");
        assert_eq!(filter_options(&options(), "g1")[0].label, "Hành Động");
        assert!(filter_options(&options(), "drama").is_empty());
    }

    #[test]
    fn test_static_options() {
        const ROLES: &[(&str, &str)] = &[("user", "User"), ("admin", "Admin")];
        let opts = static_options(OptionSource::Static(ROLES));
        assert_eq!(opts.len(), 2);
        assert_eq!(opts[1].id, "admin");
        assert!(static_options(OptionSource::Movies).is_empty());
    }
}
