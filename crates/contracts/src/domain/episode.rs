use crate::shared::form::EntityForm;
use crate::shared::localized::{LocalizedText, DEFAULT_LANGUAGE};
use crate::shared::multilang::{LangField, MultiLangEditor, Multilingual};
use crate::shared::relation::RelationRef;
use crate::shared::validation::{
    check_url, non_empty, parse_optional_number, require_localized, require_text,
    ValidationErrors,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Episode durations arrive as either a number or a numeric string of seconds.
fn de_seconds<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// `1461` -> `"24:21"`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    #[serde(rename = "_id")]
    pub id: String,
    pub movie_id: RelationRef,
    pub server_id: RelationRef,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub slug: LocalizedText,
    #[serde(default = "super::default_lang")]
    pub default_lang: String,
    #[serde(default)]
    pub episode_or_label: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default, deserialize_with = "de_seconds")]
    pub duration: Option<u32>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Episode {
    pub fn display_title(&self) -> String {
        self.title
            .display(&self.default_lang)
            .map(str::to_string)
            .unwrap_or_else(|| self.episode_or_label.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeCreateDto {
    pub movie_id: String,
    pub server_id: String,
    pub title: LocalizedText,
    pub slug: LocalizedText,
    pub default_lang: String,
    pub episode_or_label: String,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeUpdateDto {
    pub movie_id: String,
    pub server_id: String,
    pub title: LocalizedText,
    pub slug: LocalizedText,
    pub default_lang: String,
    pub episode_or_label: String,
    pub video_url: String,
    pub duration: Option<String>,
    pub thumbnail: Option<String>,
    pub is_published: bool,
}

const MANAGED: [LangField; 2] = [LangField::Title, LangField::Slug];

#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeForm {
    pub editor: MultiLangEditor,
    pub movie_id: String,
    pub server_id: String,
    pub episode_or_label: String,
    pub video_url: String,
    /// Seconds, as typed.
    pub duration: String,
    pub thumbnail: String,
    pub is_published: bool,
}

impl Multilingual for EpisodeForm {
    fn editor(&self) -> &MultiLangEditor {
        &self.editor
    }

    fn editor_mut(&mut self) -> &mut MultiLangEditor {
        &mut self.editor
    }
}

impl EntityForm for EpisodeForm {
    type Entity = Episode;
    type Create = EpisodeCreateDto;
    type Update = EpisodeUpdateDto;

    fn blank() -> Self {
        Self {
            editor: MultiLangEditor::new(DEFAULT_LANGUAGE, &MANAGED),
            movie_id: String::new(),
            server_id: String::new(),
            episode_or_label: String::new(),
            video_url: String::new(),
            duration: String::new(),
            thumbnail: String::new(),
            is_published: false,
        }
    }

    fn from_entity(episode: &Episode) -> Self {
        Self {
            editor: MultiLangEditor::from_existing(
                &episode.default_lang,
                vec![
                    (LangField::Title, episode.title.clone()),
                    (LangField::Slug, episode.slug.clone()),
                ],
            ),
            movie_id: episode.movie_id.id().to_string(),
            server_id: episode.server_id.id().to_string(),
            episode_or_label: episode.episode_or_label.clone(),
            video_url: episode.video_url.clone(),
            duration: episode.duration.map(|d| d.to_string()).unwrap_or_default(),
            thumbnail: episode.thumbnail.clone().unwrap_or_default(),
            is_published: episode.is_published,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "movieId", &self.movie_id, "Please choose a movie");
        require_text(&mut errors, "serverId", &self.server_id, "Please choose a server");
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
        require_text(
            &mut errors,
            "episodeOrLabel",
            &self.episode_or_label,
            "Episode number or label is required",
        );
        check_url(&mut errors, "videoUrl", &self.video_url, true, "A valid video URL is required");
        check_url(&mut errors, "thumbnail", &self.thumbnail, false, "Invalid thumbnail URL");
        parse_optional_number::<u32>(
            &mut errors,
            "duration",
            &self.duration,
            "Duration must be a number of seconds",
        );
        errors.into_result()
    }

    fn to_create(&self) -> EpisodeCreateDto {
        EpisodeCreateDto {
            movie_id: self.movie_id.clone(),
            server_id: self.server_id.clone(),
            title: self.editor.submitted(LangField::Title),
            slug: self.editor.submitted(LangField::Slug),
            default_lang: self.editor.default_language().to_string(),
            episode_or_label: self.episode_or_label.trim().to_string(),
            video_url: self.video_url.trim().to_string(),
            duration: non_empty(&self.duration),
            thumbnail: non_empty(&self.thumbnail),
            is_published: self.is_published,
        }
    }

    fn to_update(&self) -> EpisodeUpdateDto {
        let dto = self.to_create();
        EpisodeUpdateDto {
            movie_id: dto.movie_id,
            server_id: dto.server_id,
            title: dto.title,
            slug: dto.slug,
            default_lang: dto.default_lang,
            episode_or_label: dto.episode_or_label,
            video_url: dto.video_url,
            duration: dto.duration,
            thumbnail: dto.thumbnail,
            is_published: dto.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1461), "24:21");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn test_duration_accepts_number_or_string() {
        let base = r#""_id": "e1", "movieId": "m1", "serverId": {"_id": "s1", "name": "Vietsub #1"}"#;
        let numeric: Episode = serde_json::from_str(&format!("{{{base}, \"duration\": 1461}}")).unwrap();
        let text: Episode = serde_json::from_str(&format!("{{{base}, \"duration\": \"1461\"}}")).unwrap();
        let missing: Episode = serde_json::from_str(&format!("{{{base}}}")).unwrap();
        assert_eq!(numeric.duration, Some(1461));
        assert_eq!(text.duration, Some(1461));
        assert_eq!(missing.duration, None);
        assert_eq!(text.server_id.label("vi"), "Vietsub #1");
    }

    #[test]
    fn test_required_relations_and_video_url() {
        let mut form = EpisodeForm::blank();
        form.editor.set_field_value("vi", LangField::Title, "Tập 1");
        form.episode_or_label = "1".into();
        form.video_url = "not-a-url".into();

        let errors = form.validate().unwrap_err();
        assert!(errors.has("movieId"));
        assert!(errors.has("serverId"));
        assert!(errors.has("videoUrl"));
        assert!(!errors.has("slug"));

        form.movie_id = "m1".into();
        form.server_id = "s1".into();
        form.video_url = "https://stream.example.com/ep1.m3u8".into();
        assert!(form.validate().is_ok());
        assert_eq!(form.to_create().slug.get("vi"), Some("tap-1"));
    }

}
