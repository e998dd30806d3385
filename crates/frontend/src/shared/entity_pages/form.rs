use contracts::shared::form::EntityForm;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::{MessageBar, MessageBarIntent, Spinner};

use super::{list_path, route_id};
use crate::shared::api_client::{use_api, ApiError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::notice::alert;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::resource::{EntitySchema, EntityService};

/// Create form when the route has no `:id`, edit form otherwise.
///
/// Validation runs locally and blocks submission. A failed save leaves the
/// draft untouched so the user can retry.
pub fn entity_form<S: EntitySchema>() -> impl IntoView {
    let service = EntityService::<S>::new(use_api());
    let navigate = use_navigate();
    let id = route_id();
    let form = RwSignal::new(S::Form::blank());
    let errors = RwSignal::new(ValidationErrors::new());
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let load = {
        let service = service.clone();
        let navigate = navigate.clone();
        move |id: String| {
            let service = service.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match service.fetch(&id).await {
                    Ok(entity) => {
                        form.try_set(S::Form::from_entity(&entity));
                    }
                    Err(ApiError::NotFound) => {
                        log::warn!("{} {} not found", S::SINGULAR, id);
                        alert(&format!("The {} no longer exists.", S::SINGULAR));
                        navigate(&list_path::<S>(), Default::default());
                    }
                    Err(ApiError::Unauthenticated) => {}
                    Err(e) => {
                        log::error!("failed to load {} {}: {}", S::SINGULAR, id, e);
                        alert(&format!("Failed to load {}: {}", S::SINGULAR, e));
                    }
                }
                loading.try_set(false);
            });
        }
    };

    Effect::new(move |_| {
        let id = id.get();
        errors.set(ValidationErrors::new());
        if id.is_empty() {
            form.set(S::Form::blank());
        } else {
            loading.set(true);
            load(id);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let editing_id = Some(id.get_untracked()).filter(|id| !id.is_empty());
        let request = match form.with_untracked(|f| f.submit(editing_id.as_deref())) {
            Ok(request) => request,
            Err(invalid) => {
                log::debug!("{} form has {} invalid field(s)", S::SINGULAR, invalid.len());
                errors.set(invalid);
                return;
            }
        };
        errors.set(ValidationErrors::new());
        saving.set(true);

        let service = service.clone();
        let navigate = navigate.clone();
        let is_update = request.is_update();
        spawn_local(async move {
            match service.submit(request).await {
                Ok(()) => {
                    log::info!(
                        "{} {}",
                        if is_update { "updated" } else { "created" },
                        S::SINGULAR
                    );
                    navigate(&list_path::<S>(), Default::default());
                }
                Err(e) => {
                    log::error!("failed to save {}: {}", S::SINGULAR, e);
                    if e != ApiError::Unauthenticated {
                        alert(&format!("Failed to save {}: {}", S::SINGULAR, e));
                    }
                }
            }
            saving.try_set(false);
        });
    };

    let title = Signal::derive(move || {
        if id.get().is_empty() {
            format!("New {}", S::SINGULAR)
        } else {
            format!("Edit {}", S::SINGULAR)
        }
    });

    view! {
        <PageFrame route=S::ROUTE category=PAGE_CAT_FORM>
            <PageHeader title=title>
                <A href={list_path::<S>()} attr:class="button button--secondary">
                    "Cancel"
                </A>
            </PageHeader>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="form-loading"><Spinner /></div> }
            >
                <form class="entity-form" on:submit=on_submit.clone() novalidate=true>
                    {move || (!errors.with(ValidationErrors::is_empty)).then(|| view! {
                        <MessageBar intent=MessageBarIntent::Warning>
                            <span>
                                {move || format!(
                                    "{} field(s) need attention before saving.",
                                    errors.with(ValidationErrors::len)
                                )}
                            </span>
                        </MessageBar>
                    })}

                    {S::form_fields(form, errors.into())}

                    <div class="entity-form__actions">
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Show>
        </PageFrame>
    }
}
