use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::shared::list_state::Debouncer;

/// Search box that reports its value once typing pauses for `debounce_ms`.
/// Clearing the box reports immediately.
#[component]
pub fn SearchInput(
    /// Committed search text
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    debounce_ms: u32,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debouncer = StoredValue::new(Debouncer::default());

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let Some(ticket) = debouncer.try_update_value(|d| d.schedule()) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            let current = debouncer
                .try_with_value(|d| d.is_current(ticket))
                .unwrap_or(false);
            if current {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        debouncer.update_value(|d| {
            d.schedule();
        });
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
