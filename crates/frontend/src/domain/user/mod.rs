pub mod ui;

use contracts::domain::user::{User, UserForm};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use crate::shared::components::relation_select::OptionSource;
use crate::shared::list_state::PagingMode;
use crate::shared::resource::{
    flag_matches, timestamp_cell, CellValue, Column, EntitySchema, Endpoints, FilterDef,
    UpdateMethod, ACTIVE_OPTIONS,
};

pub const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("user", "User"),
    ("moderator", "Moderator"),
    ("admin", "Admin"),
];

pub struct UserSchema;

fn yes_no(value: Option<bool>) -> CellValue {
    CellValue::text(match value {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "-",
    })
}

impl EntitySchema for UserSchema {
    type Item = User;
    type Form = UserForm;

    const ROUTE: &'static str = "users";
    const TITLE: &'static str = "Users";
    const SINGULAR: &'static str = "user";
    const PAGING: PagingMode = PagingMode::Server;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/master/users",
            detail: "/master/users",
            create: "/master/users",
            update: "/master/users",
            update_method: UpdateMethod::Patch,
            delete: "/master/users",
        }
    }

    fn item_id(item: &User) -> String {
        item.id.clone()
    }

    fn display_name(item: &User) -> String {
        item.display().to_string()
    }

    fn matches_search(item: &User, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        item.email.to_lowercase().contains(&needle)
            || item.display().to_lowercase().contains(&needle)
    }

    fn matches_filter(item: &User, key: &str, value: &str) -> bool {
        match key {
            "role" => item.role == value,
            "isActive" => flag_matches(item.is_active.unwrap_or(true), value),
            _ => true,
        }
    }

    fn columns() -> Vec<Column<User>> {
        vec![
            Column {
                header: "Avatar",
                render: |u| CellValue::Image(u.avatar.clone()),
            },
            Column {
                header: "Name",
                render: |u| CellValue::text(u.display()),
            },
            Column {
                header: "Email",
                render: |u| CellValue::text(u.email.clone()),
            },
            Column {
                header: "Role",
                render: |u| CellValue::optional(Some(u.role.as_str())),
            },
            Column {
                header: "Status",
                render: |u| CellValue::active(u.is_active.unwrap_or(true)),
            },
        ]
    }

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef {
                key: "role",
                label: "Role",
                source: OptionSource::Static(ROLE_OPTIONS),
            },
            FilterDef {
                key: "isActive",
                label: "Status",
                source: OptionSource::Static(ACTIVE_OPTIONS),
            },
        ]
    }

    fn detail_rows(u: &User) -> Vec<(&'static str, CellValue)> {
        vec![
            ("ID", CellValue::text(u.id.clone())),
            ("Avatar", CellValue::Image(u.avatar.clone())),
            ("Cover", CellValue::Image(u.cover.clone())),
            ("Email", CellValue::text(u.email.clone())),
            ("Username", CellValue::optional(u.username.as_deref())),
            ("Display name", CellValue::optional(u.display_name.as_deref())),
            ("First name", CellValue::optional(u.first_name.as_deref())),
            ("Last name", CellValue::optional(u.last_name.as_deref())),
            ("Role", CellValue::optional(Some(u.role.as_str()))),
            ("Status", CellValue::active(u.is_active.unwrap_or(true))),
            ("Verified", yes_no(u.is_verified)),
            ("Last login", timestamp_cell(u.last_login.as_ref())),
            ("Created", timestamp_cell(u.created_at.as_ref())),
            ("Updated", timestamp_cell(u.updated_at.as_ref())),
        ]
    }

    fn form_fields(form: RwSignal<UserForm>, errors: Signal<ValidationErrors>) -> AnyView {
        ui::user_fields(form, errors).into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_active_flag_counts_as_active() {
        let user: User = serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "email": "mod@example.com",
            "role": "moderator"
        }))
        .unwrap();
        assert!(UserSchema::matches_filter(&user, "isActive", "true"));
        assert!(UserSchema::matches_filter(&user, "role", "moderator"));
        assert!(!UserSchema::matches_filter(&user, "role", "admin"));
        assert_eq!(UserSchema::display_name(&user), "mod@example.com");
    }

    #[test]
    fn test_role_options_cover_every_role() {
        use contracts::domain::user::UserRole;
        for role in UserRole::ALL {
            assert!(ROLE_OPTIONS.iter().any(|(value, _)| *value == role.as_str()));
        }
    }
}
