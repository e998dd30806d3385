use crate::shared::form::EntityForm;
use crate::shared::validation::{
    check_email, check_min_len, check_url, non_empty, require_text, ValidationErrors,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Moderator,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::User, UserRole::Moderator, UserRole::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Moderator => "moderator",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    /// Kept as text so unknown roles still render.
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Display name, then username, then e-mail.
    pub fn display(&self) -> &str {
        [&self.display_name, &self.username]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|v| !v.trim().is_empty())
            .unwrap_or(self.email.as_str())
    }
}

/// Random avatar image for the "generate" button.
pub fn random_avatar_url(seed: &str) -> String {
    format!("https://api.dicebear.com/9.x/avataaars/svg?seed={seed}")
}

/// Random cover image for the "generate" button.
pub fn random_cover_url(seed: &str) -> String {
    format!("https://api.dicebear.com/9.x/identicon/svg?seed={seed}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateDto {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub is_active: bool,
}

/// The password is only present when the admin chose to change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateDto {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: UserRole,
    pub avatar: Option<String>,
    pub cover: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    /// Set for drafts seeded from an existing user.
    pub editing: bool,
    pub email: String,
    pub password: String,
    /// Edit mode only: whether the password is being replaced.
    pub change_password: bool,
    pub role: UserRole,
    pub avatar: String,
    pub cover: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub is_active: bool,
}

impl UserForm {
    fn sends_password(&self) -> bool {
        !self.editing || self.change_password
    }

    /// Toggle password replacement; turning it off discards the typed value.
    pub fn set_change_password(&mut self, on: bool) {
        self.change_password = on;
        if !on {
            self.password.clear();
        }
    }

    pub fn generate_images(&mut self, seed: &str) {
        self.avatar = random_avatar_url(seed);
        self.cover = random_cover_url(seed);
    }
}

impl EntityForm for UserForm {
    type Entity = User;
    type Create = UserCreateDto;
    type Update = UserUpdateDto;

    fn blank() -> Self {
        Self {
            editing: false,
            email: String::new(),
            password: String::new(),
            change_password: false,
            role: UserRole::User,
            avatar: String::new(),
            cover: String::new(),
            username: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            display_name: String::new(),
            is_active: true,
        }
    }

    fn from_entity(user: &User) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            editing: true,
            email: user.email.clone(),
            password: String::new(),
            change_password: false,
            role: UserRole::parse(&user.role).unwrap_or_default(),
            avatar: text(&user.avatar),
            cover: text(&user.cover),
            username: text(&user.username),
            first_name: text(&user.first_name),
            last_name: text(&user.last_name),
            display_name: text(&user.display_name),
            is_active: user.is_active.unwrap_or(true),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "email", &self.email, "Email is required");
        check_email(&mut errors, "email", &self.email, "Invalid email address");
        if self.sends_password() {
            require_text(&mut errors, "password", &self.password, "Password is required");
            check_min_len(
                &mut errors,
                "password",
                &self.password,
                MIN_PASSWORD_LEN,
                "Password must be at least 6 characters",
            );
        }
        check_url(&mut errors, "avatar", &self.avatar, false, "Invalid avatar URL");
        check_url(&mut errors, "cover", &self.cover, false, "Invalid cover URL");
        errors.into_result()
    }

    fn to_create(&self) -> UserCreateDto {
        UserCreateDto {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
            avatar: non_empty(&self.avatar),
            cover: non_empty(&self.cover),
            username: non_empty(&self.username),
            first_name: non_empty(&self.first_name),
            last_name: non_empty(&self.last_name),
            display_name: non_empty(&self.display_name),
            is_active: self.is_active,
        }
    }

    fn to_update(&self) -> UserUpdateDto {
        UserUpdateDto {
            email: self.email.trim().to_string(),
            password: self.sends_password().then(|| self.password.clone()),
            role: self.role,
            avatar: non_empty(&self.avatar),
            cover: non_empty(&self.cover),
            username: non_empty(&self.username),
            first_name: non_empty(&self.first_name),
            last_name: non_empty(&self.last_name),
            display_name: non_empty(&self.display_name),
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> User {
        serde_json::from_str(
            r#"{"_id": "u1", "email": "mod@example.com", "role": "moderator", "username": "mod", "isActive": true}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_create_requires_password() {
        let mut form = UserForm::blank();
        form.email = "new@example.com".into();
        assert!(form.validate().unwrap_err().has("password"));

        form.password = "12345".into();
        assert!(form.validate().unwrap_err().has("password"));

        form.password = "123456".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_update_omits_password_unless_changing() {
        let mut form = UserForm::from_entity(&existing());
        assert_eq!(form.role, UserRole::Moderator);
        assert!(form.validate().is_ok());
        let json = serde_json::to_value(form.to_update()).unwrap();
        assert!(json.get("password").is_none());

        form.set_change_password(true);
        assert!(form.validate().unwrap_err().has("password"));
        form.password = "s3cret!".into();
        let json = serde_json::to_value(form.to_update()).unwrap();
        assert_eq!(json["password"], "s3cret!");

        form.set_change_password(false);
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_invalid_email() {
        let mut form = UserForm::from_entity(&existing());
        form.email = "mod.example.com".into();
        assert_eq!(form.validate().unwrap_err().get("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_generated_images_are_valid_urls() {
        let mut form = UserForm::from_entity(&existing());
        form.generate_images("k3j9x");
        assert!(form.avatar.contains("seed=k3j9x"));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_display_fallback() {
        let mut user = existing();
        assert_eq!(user.display(), "mod");
        user.username = None;
        assert_eq!(user.display(), "mod@example.com");
    }
}
