use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Language new drafts start with.
pub const DEFAULT_LANGUAGE: &str = "vi";

/// Languages tried, in order, when the preferred language has no value.
pub const FALLBACK_LANGUAGES: [&str; 2] = ["vi", "en"];

/// Text for one translatable field, keyed by language code ("vi", "en", ...).
///
/// Entries keep the order they were added in, and decoding keeps the key
/// order of the JSON object. The backend occasionally sends `null` for a
/// language; such keys are dropped on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText(Vec<(String, String)>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut text = Self::new();
        for (k, v) in pairs {
            text.set(k, v);
        }
        text
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == code)
            .map(|(_, v)| v.as_str())
    }

    /// Overwrite an existing language in place, or append a new one.
    pub fn set(&mut self, code: impl Into<String>, value: impl Into<String>) {
        let code = code.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == code) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((code, value)),
        }
    }

    pub fn remove(&mut self, code: &str) -> Option<String> {
        let index = self.0.iter().position(|(k, _)| k == code)?;
        Some(self.0.remove(index).1)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|(k, _)| k == code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when at least one language carries non-blank text.
    pub fn has_value(&self) -> bool {
        self.0.iter().any(|(_, v)| !v.trim().is_empty())
    }

    /// Copy without blank entries; this is what gets submitted.
    pub fn pruned(&self) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(_, v)| !v.trim().is_empty())
                .cloned()
                .collect(),
        )
    }

    /// Text to show for this field: preferred language, then `vi`, then `en`,
    /// then any non-blank value.
    pub fn display(&self, preferred: &str) -> Option<&str> {
        std::iter::once(preferred)
            .chain(FALLBACK_LANGUAGES)
            .filter_map(|code| self.get(code))
            .find(|v| !v.trim().is_empty())
            .or_else(|| self.0.iter().map(|(_, v)| v.as_str()).find(|v| !v.trim().is_empty()))
    }

    /// Case-insensitive substring match against every language.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.0.iter().any(|(_, v)| v.to_lowercase().contains(&needle))
    }
}

impl Serialize for LocalizedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, value) in &self.0 {
            map.serialize_entry(code, value)?;
        }
        map.end()
    }
}

struct LocalizedTextVisitor;

impl<'de> Visitor<'de> for LocalizedTextVisitor {
    type Value = LocalizedText;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of language code to text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut text = LocalizedText::new();
        while let Some((code, value)) = access.next_entry::<String, Option<String>>()? {
            if let Some(value) = value {
                text.set(code, value);
            }
        }
        Ok(text)
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LocalizedTextVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_languages_are_dropped() {
        let text: LocalizedText =
            serde_json::from_str(r#"{"vi":"Hành Động","en":null}"#).unwrap();
        assert_eq!(text.len(), 1);
        assert_eq!(text.get("vi"), Some("Hành Động"));
        assert!(!text.contains("en"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let text = LocalizedText::from_pairs([("vi", "Phim"), ("en", "Movie")]);
        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(json, serde_json::json!({"en": "Movie", "vi": "Phim"}));
    }

    #[test]
    fn test_decoding_keeps_key_order() {
        let text: LocalizedText =
            serde_json::from_str(r#"{"vi":"Phim","ja":"映画","de":"Film","en":"Movie"}"#).unwrap();
        assert_eq!(text.codes().collect::<Vec<_>>(), vec!["vi", "ja", "de", "en"]);
        assert_eq!(
            serde_json::to_string(&text).unwrap(),
            r#"{"vi":"Phim","ja":"映画","de":"Film","en":"Movie"}"#
        );
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut text = LocalizedText::from_pairs([("vi", "Phim"), ("en", "Movie")]);
        text.set("vi", "Phim mới");
        text.set("fr", "Film");
        assert_eq!(text.codes().collect::<Vec<_>>(), vec!["vi", "en", "fr"]);
        assert_eq!(text.get("vi"), Some("Phim mới"));
        assert_eq!(text.remove("en"), Some("Movie".to_string()));
        assert_eq!(text.codes().collect::<Vec<_>>(), vec!["vi", "fr"]);
    }

    #[test]
    fn test_display_fallback_order() {
        let text = LocalizedText::from_pairs([("en", "Action"), ("vi", "Hành động")]);
        assert_eq!(text.display("fr"), Some("Hành động"));
        assert_eq!(text.display("en"), Some("Action"));

        let only_ja = LocalizedText::from_pairs([("ja", "アクション"), ("vi", " ")]);
        assert_eq!(only_ja.display("vi"), Some("アクション"));
        assert_eq!(LocalizedText::new().display("vi"), None);
    }

    #[test]
    fn test_pruned_drops_blank_values() {
        let text = LocalizedText::from_pairs([("vi", "Phim"), ("en", ""), ("fr", "  ")]);
        let pruned = text.pruned();
        assert_eq!(pruned.codes().collect::<Vec<_>>(), vec!["vi"]);
        assert!(text.has_value());
        assert!(!LocalizedText::from_pairs([("vi", "")]).has_value());
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let text = LocalizedText::from_pairs([("en", "Spider Man")]);
        assert!(text.matches("spider"));
        assert!(!text.matches("batman"));
    }
}
