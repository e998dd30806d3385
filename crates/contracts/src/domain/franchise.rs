use crate::shared::form::EntityForm;
use crate::shared::localized::{LocalizedText, DEFAULT_LANGUAGE};
use crate::shared::multilang::{LangField, MultiLangEditor, Multilingual};
use crate::shared::relation::{relation_ids, RelationRef};
use crate::shared::validation::{require_localized, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A group of related movies. Franchises carry no default language on the
/// wire; the editor's default only drives auto-slugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Franchise {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub slug: LocalizedText,
    #[serde(default)]
    pub movies: Vec<RelationRef>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Franchise {
    pub fn display_title(&self) -> String {
        self.title
            .display(DEFAULT_LANGUAGE)
            .map(str::to_string)
            .unwrap_or_else(|| self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseCreateDto {
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub slug: LocalizedText,
    pub movies: Vec<String>,
    pub is_published: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

const MANAGED: [LangField; 3] = [LangField::Title, LangField::Slug, LangField::Description];

#[derive(Debug, Clone, PartialEq)]
pub struct FranchiseForm {
    pub editor: MultiLangEditor,
    pub movies: Vec<String>,
    pub is_published: bool,
}

impl Multilingual for FranchiseForm {
    fn editor(&self) -> &MultiLangEditor {
        &self.editor
    }

    fn editor_mut(&mut self) -> &mut MultiLangEditor {
        &mut self.editor
    }
}

impl EntityForm for FranchiseForm {
    type Entity = Franchise;
    type Create = FranchiseCreateDto;
    type Update = FranchiseUpdateDto;

    fn blank() -> Self {
        Self {
            editor: MultiLangEditor::new(DEFAULT_LANGUAGE, &MANAGED),
            movies: Vec::new(),
            is_published: false,
        }
    }

    fn from_entity(franchise: &Franchise) -> Self {
        Self {
            editor: MultiLangEditor::from_existing(
                DEFAULT_LANGUAGE,
                vec![
                    (LangField::Title, franchise.title.clone()),
                    (LangField::Slug, franchise.slug.clone()),
                    (LangField::Description, franchise.description.clone()),
                ],
            ),
            movies: relation_ids(&franchise.movies),
            is_published: franchise.is_published,
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

    fn to_create(&self) -> FranchiseCreateDto {
        FranchiseCreateDto {
            title: self.editor.submitted(LangField::Title),
            description: self.editor.submitted(LangField::Description),
            slug: self.editor.submitted(LangField::Slug),
            movies: self.movies.clone(),
            is_published: self.is_published,
        }
    }

    fn to_update(&self) -> FranchiseUpdateDto {
        let dto = self.to_create();
        FranchiseUpdateDto {
            title: Some(dto.title),
            description: Some(dto.description),
            slug: Some(dto.slug),
            movies: Some(dto.movies),
            is_published: Some(dto.is_published),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_movies_become_ids() {
        let raw = r#"{
            "_id": "f1",
            "title": {"vi": "Lật Mặt", "en": "Face Off"},
            "slug": {"vi": "lat-mat"},
            "movies": [{"_id": "m1", "title": {"vi": "Lật Mặt 6"}, "slug": {"vi": "lat-mat-6"}}, "m2"],
            "isPublished": true
        }"#;
        let franchise: Franchise = serde_json::from_str(raw).unwrap();
        let form = FranchiseForm::from_entity(&franchise);
        assert_eq!(form.movies, vec!["m1", "m2"]);
        assert_eq!(form.editor.languages(), ["vi", "en"]);

        let dto = form.to_create();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["movies"], serde_json::json!(["m1", "m2"]));
        assert_eq!(json["isPublished"], true);
    }

    #[test]
    fn test_removing_language_drops_it_from_submission() {
        let mut form = FranchiseForm::blank();
        form.editor.add_language("en");
        form.editor.set_field_value("vi", LangField::Title, "Lật Mặt");
        form.editor.set_field_value("en", LangField::Title, "Face Off");
        form.editor.set_field_value("en", LangField::Slug, "face-off");
        form.editor.remove_language("en").unwrap();

        let dto = form.to_create();
        assert_eq!(dto.title.codes().collect::<Vec<_>>(), vec!["vi"]);
        assert_eq!(dto.slug.codes().collect::<Vec<_>>(), vec!["vi"]);
        assert!(form.validate().is_ok());
    }
}
