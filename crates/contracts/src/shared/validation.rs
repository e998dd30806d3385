//! Field-scoped validation shared by every entity form.

use super::localized::LocalizedText;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;
use validator::ValidateEmail;

/// Validation failures keyed by field name. Only the first message per field
/// is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) need attention", .0.len())]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub fn require_text(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

/// A required translatable field needs at least one non-blank language.
pub fn require_localized(
    errors: &mut ValidationErrors,
    field: &str,
    value: &LocalizedText,
    message: &str,
) {
    if !value.has_value() {
        errors.add(field, message);
    }
}

pub fn check_min_len(errors: &mut ValidationErrors, field: &str, value: &str, min: usize, message: &str) {
    if value.chars().count() < min {
        errors.add(field, message);
    }
}

/// URL fields must parse as absolute URLs; optional ones may be empty.
pub fn check_url(errors: &mut ValidationErrors, field: &str, value: &str, required: bool, message: &str) {
    let value = value.trim();
    if value.is_empty() {
        if required {
            errors.add(field, message);
        }
        return;
    }
    if url::Url::parse(value).is_err() {
        errors.add(field, message);
    }
}

pub fn check_email(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) {
    if !value.trim().validate_email() {
        errors.add(field, message);
    }
}

/// Parse a numeric input. An empty string means "unset", never zero.
pub fn parse_optional_number<T: FromStr>(
    errors: &mut ValidationErrors,
    field: &str,
    raw: &str,
    message: &str,
) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<T>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.add(field, message);
            None
        }
    }
}

/// Same coercion as [`parse_optional_number`] for building DTOs after
/// validation has passed.
pub fn optional_number<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        raw.parse().ok()
    }
}

/// Empty inputs become `None`.
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("slug", "first");
        errors.add("slug", "second");
        assert_eq!(errors.get("slug"), Some("first"));
        assert_eq!(errors.len(), 1);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_require_localized() {
        let mut errors = ValidationErrors::new();
        require_localized(&mut errors, "title", &LocalizedText::new(), "required");
        require_localized(
            &mut errors,
            "slug",
            &LocalizedText::from_pairs([("vi", "  ")]),
            "required",
        );
        require_localized(
            &mut errors,
            "description",
            &LocalizedText::from_pairs([("en", "ok")]),
            "required",
        );
        assert!(errors.has("title"));
        assert!(errors.has("slug"));
        assert!(!errors.has("description"));
    }

    #[test]
    fn test_check_url() {
        let mut errors = ValidationErrors::new();
        check_url(&mut errors, "optional_empty", "", false, "bad");
        check_url(&mut errors, "required_empty", "", true, "bad");
        check_url(&mut errors, "garbage", "not a url", false, "bad");
        check_url(&mut errors, "good", "https://cdn.example.com/a.m3u8", true, "bad");
        assert!(!errors.has("optional_empty"));
        assert!(errors.has("required_empty"));
        assert!(errors.has("garbage"));
        assert!(!errors.has("good"));
    }

    #[test]
    fn test_check_email() {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, "ok", "admin@example.com", "bad");
        check_email(&mut errors, "bad", "admin.example.com", "bad");
        assert!(!errors.has("ok"));
        assert!(errors.has("bad"));
    }

    #[test]
    fn test_empty_number_is_unset() {
        let mut errors = ValidationErrors::new();
        assert_eq!(parse_optional_number::<u32>(&mut errors, "year", "", "bad"), None);
        assert_eq!(parse_optional_number::<u32>(&mut errors, "year", " 2024 ", "bad"), Some(2024));
        assert!(errors.is_empty());
        assert_eq!(parse_optional_number::<u32>(&mut errors, "year", "abc", "bad"), None);
        assert!(errors.has("year"));
        assert_eq!(optional_number::<u32>(""), None);
    }
}
