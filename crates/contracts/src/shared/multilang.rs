//! Editing state for parallel translatable fields (title, slug, description)
//! across a dynamic set of language codes.

use super::localized::{LocalizedText, DEFAULT_LANGUAGE};
use super::slug::slugify;
use std::collections::BTreeMap;
use thiserror::Error;

/// Translatable fields an editor can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LangField {
    Title,
    Slug,
    Description,
}

impl LangField {
    pub fn key(self) -> &'static str {
        match self {
            LangField::Title => "title",
            LangField::Slug => "slug",
            LangField::Description => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Cannot remove the last remaining language")]
    LastLanguage,
    #[error("Cannot remove the default language ({0})")]
    DefaultLanguage(String),
    #[error("Language {0} is not in use")]
    Unknown(String),
}

/// Active language codes of one form session, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageSet(Vec<String>);

impl LanguageSet {
    fn with_first(code: &str) -> Self {
        Self(vec![code.to_string()])
    }

    fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn as_slice(&self) -> &[String] {
        &self.0
    }

    fn push(&mut self, code: &str) -> bool {
        if code.is_empty() || self.contains(code) {
            return false;
        }
        self.0.push(code.to_string());
        true
    }

    fn remove(&mut self, code: &str) {
        self.0.retain(|c| c != code);
    }
}

/// Blank or missing default codes fall back to [`DEFAULT_LANGUAGE`].
fn default_code(code: &str) -> &str {
    let code = code.trim();
    if code.is_empty() {
        DEFAULT_LANGUAGE
    } else {
        code
    }
}

/// Manages N parallel [`LocalizedText`] fields over one ordered set of
/// language codes.
///
/// Invariants: the language set is never empty, the default language is always
/// a member, and every managed field only holds keys of active languages.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLangEditor {
    languages: LanguageSet,
    default_language: String,
    fields: BTreeMap<LangField, LocalizedText>,
}

impl MultiLangEditor {
    /// Blank editor with `default_language` as its only language.
    pub fn new(default_language: &str, managed: &[LangField]) -> Self {
        let default_language = default_code(default_language);
        Self {
            languages: LanguageSet::with_first(default_language),
            default_language: default_language.to_string(),
            fields: managed.iter().map(|f| (*f, LocalizedText::new())).collect(),
        }
    }

    /// Blank editor with extra languages enabled after the default one.
    pub fn with_languages(default_language: &str, extra: &[&str], managed: &[LangField]) -> Self {
        let mut editor = Self::new(default_language, managed);
        for code in extra {
            editor.add_language(code);
        }
        editor
    }

    /// Editor seeded from an existing entity. The language set is the default
    /// language followed by every code present in the seeded fields, in the
    /// order the fields are given and, within a field, in its key order.
    pub fn from_existing(default_language: &str, seeded: Vec<(LangField, LocalizedText)>) -> Self {
        let default_language = default_code(default_language);
        let mut languages = LanguageSet::with_first(default_language);
        for (_, text) in &seeded {
            for code in text.codes() {
                languages.push(code);
            }
        }
        Self {
            languages,
            default_language: default_language.to_string(),
            fields: seeded.into_iter().collect(),
        }
    }

    pub fn languages(&self) -> &[String] {
        self.languages.as_slice()
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn manages(&self, field: LangField) -> bool {
        self.fields.contains_key(&field)
    }

    /// Current text of a field, including blank entries.
    pub fn field(&self, field: LangField) -> Option<&LocalizedText> {
        self.fields.get(&field)
    }

    /// Value of one field in one language, empty when unset.
    pub fn value(&self, code: &str, field: LangField) -> &str {
        self.fields
            .get(&field)
            .and_then(|text| text.get(code))
            .unwrap_or("")
    }

    /// Whether a remove request for `code` would be accepted.
    pub fn can_remove(&self, code: &str) -> bool {
        self.languages.len() > 1 && code != self.default_language && self.languages.contains(code)
    }

    /// Add a language at the end of the set. Empty or duplicate codes are
    /// ignored; returns whether the set changed.
    pub fn add_language(&mut self, code: &str) -> bool {
        self.languages.push(code.trim())
    }

    /// Remove a language and its values from every managed field. Refused,
    /// with no state change, for the last language or the default language.
    pub fn remove_language(&mut self, code: &str) -> Result<(), LanguageError> {
        if self.languages.len() <= 1 {
            return Err(LanguageError::LastLanguage);
        }
        if code == self.default_language {
            return Err(LanguageError::DefaultLanguage(code.to_string()));
        }
        if !self.languages.contains(code) {
            return Err(LanguageError::Unknown(code.to_string()));
        }
        self.languages.remove(code);
        for text in self.fields.values_mut() {
            text.remove(code);
        }
        Ok(())
    }

    /// Set `field[code] = value`. Editing the default language's title also
    /// regenerates that language's slug; other languages never touch slugs.
    /// Values for inactive languages or unmanaged fields are ignored.
    pub fn set_field_value(&mut self, code: &str, field: LangField, value: &str) {
        if !self.languages.contains(code) {
            return;
        }
        let Some(text) = self.fields.get_mut(&field) else {
            return;
        };
        text.set(code, value);

        if field == LangField::Title && code == self.default_language {
            if let Some(slug) = self.fields.get_mut(&LangField::Slug) {
                slug.set(code, slugify(value));
            }
        }
    }

    /// Move the removal protection (and auto-slug) to another active language.
    /// Field data is left untouched.
    pub fn change_default_language(&mut self, code: &str) -> Result<(), LanguageError> {
        if !self.languages.contains(code) {
            return Err(LanguageError::Unknown(code.to_string()));
        }
        self.default_language = code.to_string();
        Ok(())
    }

    /// Field text ready for submission: blank entries removed.
    pub fn submitted(&self, field: LangField) -> LocalizedText {
        self.fields
            .get(&field)
            .map(LocalizedText::pruned)
            .unwrap_or_default()
    }
}

/// Form drafts that embed a [`MultiLangEditor`].
pub trait Multilingual {
    fn editor(&self) -> &MultiLangEditor;
    fn editor_mut(&mut self) -> &mut MultiLangEditor;
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [LangField; 3] = [LangField::Title, LangField::Slug, LangField::Description];

    fn filled() -> MultiLangEditor {
        let mut editor = MultiLangEditor::with_languages("vi", &["en", "fr"], &ALL);
        for code in ["vi", "en", "fr"] {
            editor.set_field_value(code, LangField::Description, &format!("desc {code}"));
            editor.set_field_value(code, LangField::Slug, &format!("slug-{code}"));
        }
        editor.set_field_value("en", LangField::Title, "Action");
        editor.set_field_value("fr", LangField::Title, "Action FR");
        editor
    }

    #[test]
    fn test_add_language_appends_and_ignores_duplicates() {
        let mut editor = MultiLangEditor::new("vi", &ALL);
        assert!(editor.add_language("en"));
        assert!(!editor.add_language("en"));
        assert!(!editor.add_language(""));
        assert!(!editor.add_language("   "));
        assert!(editor.add_language("ja"));
        assert_eq!(editor.languages(), ["vi", "en", "ja"]);
    }

    #[test]
    fn test_remove_last_language_rejected() {
        let mut editor = MultiLangEditor::new("vi", &ALL);
        editor.set_field_value("vi", LangField::Title, "Phim");
        let before = editor.clone();

        assert_eq!(editor.remove_language("vi"), Err(LanguageError::LastLanguage));
        assert_eq!(editor, before);
    }

    #[test]
    fn test_remove_default_language_rejected() {
        let mut editor = filled();
        let before = editor.clone();

        assert_eq!(
            editor.remove_language("vi"),
            Err(LanguageError::DefaultLanguage("vi".into()))
        );
        assert_eq!(editor, before);
    }

    #[test]
    fn test_remove_language_cascades_to_every_field() {
        let mut editor = filled();
        editor.remove_language("en").unwrap();

        assert_eq!(editor.languages(), ["vi", "fr"]);
        for field in ALL {
            let text = editor.field(field).unwrap();
            assert!(!text.contains("en"), "{field:?} still has en");
        }
        assert_eq!(editor.value("fr", LangField::Title), "Action FR");
        assert_eq!(editor.value("fr", LangField::Slug), "slug-fr");
        assert_eq!(editor.value("vi", LangField::Description), "desc vi");
        assert_eq!(editor.value("fr", LangField::Description), "desc fr");
    }

    #[test]
    fn test_remove_unknown_language() {
        let mut editor = filled();
        assert_eq!(
            editor.remove_language("de"),
            Err(LanguageError::Unknown("de".into()))
        );
        assert_eq!(editor.languages().len(), 3);
    }

    #[test]
    fn test_default_title_regenerates_default_slug_only() {
        let mut editor = filled();
        editor.set_field_value("vi", LangField::Title, "Hành Động");

        assert_eq!(editor.value("vi", LangField::Slug), "hanh-dong");
        assert_eq!(editor.value("en", LangField::Slug), "slug-en");
        assert_eq!(editor.value("fr", LangField::Slug), "slug-fr");
    }

    #[test]
    fn test_non_default_title_never_touches_slug() {
        let mut editor = filled();
        editor.set_field_value("en", LangField::Title, "Adventure Time");

        assert_eq!(editor.value("en", LangField::Slug), "slug-en");
        assert_eq!(editor.value("vi", LangField::Slug), "slug-vi");
    }

    #[test]
    fn test_change_default_moves_protection_without_touching_data() {
        let mut editor = filled();
        let fields_before = editor.fields.clone();

        editor.change_default_language("en").unwrap();
        assert_eq!(editor.fields, fields_before);
        assert_eq!(editor.default_language(), "en");
        assert!(editor.remove_language("vi").is_ok());
        assert!(matches!(
            editor.remove_language("en"),
            Err(LanguageError::DefaultLanguage(_))
        ));

        editor.set_field_value("en", LangField::Title, "New Title");
        assert_eq!(editor.value("en", LangField::Slug), "new-title");
    }

    #[test]
    fn test_change_default_to_inactive_language_rejected() {
        let mut editor = filled();
        assert!(editor.change_default_language("de").is_err());
        assert_eq!(editor.default_language(), "vi");
    }

    #[test]
    fn test_from_existing_collects_languages() {
        let title = LocalizedText::from_pairs([("en", "Action"), ("vi", "Hành động")]);
        let slug = LocalizedText::from_pairs([("vi", "hanh-dong"), ("ko", "aksyeon")]);
        let editor = MultiLangEditor::from_existing(
            "vi",
            vec![(LangField::Title, title), (LangField::Slug, slug)],
        );
        assert_eq!(editor.languages(), ["vi", "en", "ko"]);
        assert!(!editor.manages(LangField::Description));
    }

    #[test]
    fn test_from_existing_keeps_entity_key_order() {
        let title: LocalizedText =
            serde_json::from_str(r#"{"vi":"Phim","ja":"映画","de":"Film"}"#).unwrap();
        let editor = MultiLangEditor::from_existing("vi", vec![(LangField::Title, title)]);
        assert_eq!(editor.languages(), ["vi", "ja", "de"]);
    }

    #[test]
    fn test_blank_default_language_falls_back() {
        let editor = MultiLangEditor::new("  ", &ALL);
        assert_eq!(editor.languages(), ["vi"]);
        assert_eq!(editor.default_language(), "vi");

        let seeded = MultiLangEditor::from_existing("", vec![]);
        assert_eq!(seeded.languages(), ["vi"]);
    }

    #[test]
    fn test_any_code_can_be_added() {
        let mut editor = MultiLangEditor::new("vi", &ALL);
        assert!(editor.add_language(" pt "));
        assert!(editor.add_language("de"));
        editor.set_field_value("pt", LangField::Title, "Filme");
        assert_eq!(editor.languages(), ["vi", "pt", "de"]);
        assert_eq!(editor.value("pt", LangField::Title), "Filme");
    }

    #[test]
    fn test_unmanaged_field_and_inactive_language_ignored() {
        let mut editor = MultiLangEditor::new("vi", &[LangField::Title, LangField::Slug]);
        editor.set_field_value("vi", LangField::Description, "ignored");
        editor.set_field_value("en", LangField::Title, "ignored");
        assert!(editor.field(LangField::Description).is_none());
        assert_eq!(editor.value("en", LangField::Title), "");
    }

    #[test]
    fn test_submitted_prunes_blank_values() {
        let mut editor = MultiLangEditor::with_languages("vi", &["en"], &ALL);
        editor.set_field_value("vi", LangField::Title, "Phim");
        editor.set_field_value("en", LangField::Title, "");
        let title = editor.submitted(LangField::Title);
        assert_eq!(title.codes().collect::<Vec<_>>(), vec!["vi"]);
    }
}
