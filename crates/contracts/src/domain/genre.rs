use crate::shared::form::EntityForm;
use crate::shared::localized::{LocalizedText, DEFAULT_LANGUAGE};
use crate::shared::multilang::{LangField, MultiLangEditor, Multilingual};
use crate::shared::validation::{require_localized, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Read model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub slug: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default = "super::default_lang")]
    pub default_lang: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Genre {
    pub fn display_title(&self) -> String {
        self.title
            .display(&self.default_lang)
            .map(str::to_string)
            .unwrap_or_else(|| self.id.clone())
    }
}

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCreateDto {
    pub title: LocalizedText,
    pub slug: LocalizedText,
    pub default_lang: String,
    pub description: LocalizedText,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// ============================================================================
// Form draft
// ============================================================================

const MANAGED: [LangField; 3] = [LangField::Title, LangField::Slug, LangField::Description];

#[derive(Debug, Clone, PartialEq)]
pub struct GenreForm {
    pub editor: MultiLangEditor,
    pub is_active: bool,
}

impl Multilingual for GenreForm {
    fn editor(&self) -> &MultiLangEditor {
        &self.editor
    }

    fn editor_mut(&mut self) -> &mut MultiLangEditor {
        &mut self.editor
    }
}

impl EntityForm for GenreForm {
    type Entity = Genre;
    type Create = GenreCreateDto;
    type Update = GenreUpdateDto;

    fn blank() -> Self {
        Self {
            editor: MultiLangEditor::with_languages(DEFAULT_LANGUAGE, &["en"], &MANAGED),
            is_active: true,
        }
    }

    fn from_entity(genre: &Genre) -> Self {
        Self {
            editor: MultiLangEditor::from_existing(
                &genre.default_lang,
                vec![
                    (LangField::Title, genre.title.clone()),
                    (LangField::Slug, genre.slug.clone()),
                    (LangField::Description, genre.description.clone()),
                ],
            ),
            is_active: genre.is_active,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_localized(
            &mut errors,
            "title",
            &self.editor.submitted(LangField::Title),
            "At least one language is required for the title",
        );
        require_localized(
            &mut errors,
            "slug",
            &self.editor.submitted(LangField::Slug),
            "At least one language is required for the slug",
        );
        errors.into_result()
    }

    fn to_create(&self) -> GenreCreateDto {
        GenreCreateDto {
            title: self.editor.submitted(LangField::Title),
            slug: self.editor.submitted(LangField::Slug),
            default_lang: self.editor.default_language().to_string(),
            description: self.editor.submitted(LangField::Description),
            is_active: self.is_active,
        }
    }

    fn to_update(&self) -> GenreUpdateDto {
        let GenreCreateDto {
            title,
            slug,
            default_lang,
            description,
            is_active,
        } = self.to_create();
        GenreUpdateDto {
            title: Some(title),
            slug: Some(slug),
            default_lang: Some(default_lang),
            description: Some(description),
            is_active: Some(is_active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::SubmitRequest;

    #[test]
    fn test_blank_slug_blocks_until_title_autofills_it() {
        let mut form = GenreForm::blank();
        form.editor_mut()
            .set_field_value("vi", LangField::Title, "Hành Động");
        form.editor_mut().set_field_value("vi", LangField::Slug, "");

        let errors = form.submit(None).unwrap_err();
        assert!(errors.has("slug"));
        assert!(!errors.has("title"));

        form.editor_mut()
            .set_field_value("vi", LangField::Title, "Hành Động");
        assert_eq!(form.editor.value("vi", LangField::Slug), "hanh-dong");

        match form.submit(None).unwrap() {
            SubmitRequest::Create(dto) => {
                assert_eq!(dto.title.get("vi"), Some("Hành Động"));
                assert_eq!(dto.slug.get("vi"), Some("hanh-dong"));
                assert!(!dto.title.contains("en"));
                assert_eq!(dto.default_lang, "vi");
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_mode_attaches_id_and_omits_server_fields() {
        let raw = r#"{
            "_id": "66a1",
            "title": {"vi": "Hài", "en": "Comedy"},
            "slug": {"vi": "hai", "en": "comedy"},
            "description": {},
            "defaultLang": "vi",
            "isActive": false,
            "createdAt": "2024-05-01T08:00:00.000Z",
            "updatedAt": "2024-05-02T08:00:00.000Z",
            "__v": 0
        }"#;
        let genre: Genre = serde_json::from_str(raw).unwrap();
        let form = GenreForm::from_entity(&genre);
        assert_eq!(form.editor.languages(), ["vi", "en"]);

        let request = form.submit(Some(&genre.id)).unwrap();
        let SubmitRequest::Update { id, patch } = request else {
            panic!("expected update");
        };
        assert_eq!(id, "66a1");
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["isActive"], false);
        assert!(json.get("createdAt").is_none());
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_missing_title_reported() {
        let form = GenreForm::blank();
        let errors = form.validate().unwrap_err();
        assert!(errors.has("title"));
        assert!(errors.has("slug"));
    }
}
