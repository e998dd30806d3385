use leptos::prelude::*;

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    }
}

/// Plain `type="button"` button. Variants: "primary" (default), "secondary",
/// "ghost", "danger"; `size="sm"` for the compact form.
#[component]
pub fn Button(
    #[prop(optional)]
    variant: &'static str,
    #[prop(optional)]
    size: &'static str,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "button {}{}",
        variant_class(variant),
        if size == "sm" { " button--small" } else { "" }
    );

    view! {
        <button
            type="button"
            class=class
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_class() {
        assert_eq!(variant_class(""), "button--primary");
        assert_eq!(variant_class("danger"), "button--danger");
        assert_eq!(variant_class("unknown"), "button--primary");
    }
}
