use leptos::prelude::*;

/// Shell-wide UI state shared through context.
#[derive(Clone, Copy, Debug)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub expanded_groups: RwSignal<Vec<&'static str>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            expanded_groups: RwSignal::new(vec!["overview", "catalog", "streaming", "administration"]),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn is_expanded(&self, group: &str) -> bool {
        self.expanded_groups.with(|groups| groups.contains(&group))
    }

    pub fn toggle_group(&self, group: &'static str) {
        self.expanded_groups.update(|groups| {
            if let Some(pos) = groups.iter().position(|g| *g == group) {
                groups.remove(pos);
            } else {
                groups.push(group);
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_layout() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
