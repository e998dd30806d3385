use crate::shared::form::EntityForm;
use crate::shared::localized::{LocalizedText, DEFAULT_LANGUAGE};
use crate::shared::multilang::{LangField, MultiLangEditor, Multilingual};
use crate::shared::relation::{relation_ids, RelationRef};
use crate::shared::validation::{
    check_url, non_empty, optional_number, parse_optional_number, require_localized,
    require_text, ValidationErrors,
};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovieType {
    #[default]
    Movie,
    Series,
    Episode,
}

impl MovieType {
    pub const ALL: [MovieType; 3] = [MovieType::Movie, MovieType::Series, MovieType::Episode];

    pub fn as_str(self) -> &'static str {
        match self {
            MovieType::Movie => "MOVIE",
            MovieType::Series => "SERIES",
            MovieType::Episode => "EPISODE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MovieType::Movie => "Movie",
            MovieType::Series => "Series",
            MovieType::Episode => "Episode",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieFlagType {
    #[default]
    Banner,
    Trending,
    Hot,
    New,
    Recommended,
}

impl MovieFlagType {
    pub const ALL: [MovieFlagType; 5] = [
        MovieFlagType::Banner,
        MovieFlagType::Trending,
        MovieFlagType::Hot,
        MovieFlagType::New,
        MovieFlagType::Recommended,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MovieFlagType::Banner => "banner",
            MovieFlagType::Trending => "trending",
            MovieFlagType::Hot => "hot",
            MovieFlagType::New => "new",
            MovieFlagType::Recommended => "recommended",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagSource {
    #[default]
    Admin,
    System,
}

impl FlagSource {
    pub fn as_str(self) -> &'static str {
        match self {
            FlagSource::Admin => "admin",
            FlagSource::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(FlagSource::Admin),
            "system" => Some(FlagSource::System),
            _ => None,
        }
    }
}

// ============================================================================
// Read model
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlagMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieFlag {
    #[serde(default)]
    pub metadata: FlagMetadata,
    #[serde(rename = "type")]
    pub kind: MovieFlagType,
    #[serde(default)]
    pub source: FlagSource,
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub franchise_id: Option<RelationRef>,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub slug: LocalizedText,
    #[serde(default = "super::default_lang")]
    pub default_lang: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(rename = "type", default)]
    pub movie_type: MovieType,
    #[serde(default)]
    pub current_episode: Option<u32>,
    #[serde(default)]
    pub total_episodes: Option<u32>,
    #[serde(default)]
    pub genres: Vec<RelationRef>,
    #[serde(default)]
    pub cast: Vec<RelationRef>,
    #[serde(default)]
    pub director: Option<RelationRef>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub flags: Vec<MovieFlag>,

    // Computed by the server, shown read-only.
    #[serde(default)]
    pub rating_avg: f64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub daily_views: u64,
    #[serde(default)]
    pub weekly_views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub last_trending_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Movie {
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
pub struct MovieFlagDto {
    #[serde(rename = "type")]
    pub kind: MovieFlagType,
    pub source: FlagSource,
    pub metadata: FlagMetadata,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCreateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub franchise_id: Option<String>,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub slug: LocalizedText,
    pub default_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    #[serde(rename = "type")]
    pub movie_type: MovieType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_episode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_episodes: Option<u32>,
    pub genres: Vec<String>,
    pub cast: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub is_published: bool,
    pub flags: Vec<MovieFlagDto>,
}

/// Full set of editable fields. Unset optional values go out as `null` so a
/// cleared franchise, director or number is removed on the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieUpdateDto {
    pub franchise_id: Option<String>,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub slug: LocalizedText,
    pub default_lang: String,
    pub poster: Option<String>,
    pub thumbnail: Option<String>,
    pub banner: Option<String>,
    pub backdrop: Option<String>,
    pub trailer_url: Option<String>,
    #[serde(rename = "type")]
    pub movie_type: MovieType,
    pub current_episode: Option<u32>,
    pub total_episodes: Option<u32>,
    pub genres: Vec<String>,
    pub cast: Vec<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub country: Option<String>,
    pub is_published: bool,
    pub flags: Vec<MovieFlagDto>,
}

// ============================================================================
// Form draft
// ============================================================================

/// Format used by `datetime-local` inputs.
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn parse_datetime_input(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, INPUT_FORMAT)
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
}

pub fn format_datetime_input(dt: &DateTime<Utc>) -> String {
    dt.format(INPUT_FORMAT).to_string()
}

/// One editable flag row. Numbers and dates stay raw until submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagDraft {
    pub kind: MovieFlagType,
    pub source: FlagSource,
    pub score: String,
    pub priority: String,
    pub reason: String,
    pub start_at: String,
    pub end_at: String,
}

impl FlagDraft {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            kind: MovieFlagType::default(),
            source: FlagSource::default(),
            score: String::new(),
            priority: String::new(),
            reason: String::new(),
            start_at: format_datetime_input(&now),
            end_at: String::new(),
        }
    }

    fn from_flag(flag: &MovieFlag) -> Self {
        let fmt = |v: Option<String>| v.unwrap_or_default();
        Self {
            kind: flag.kind,
            source: flag.source,
            score: fmt(flag.metadata.score.map(|s| s.to_string())),
            priority: fmt(flag.metadata.priority.map(|p| p.to_string())),
            reason: fmt(flag.metadata.reason.clone()),
            start_at: fmt(flag.start_at.as_ref().map(format_datetime_input)),
            end_at: fmt(flag.end_at.as_ref().map(format_datetime_input)),
        }
    }

    fn validate(&self, index: usize, errors: &mut ValidationErrors) {
        let key = |name: &str| format!("flags.{index}.{name}");
        if self.start_at.trim().is_empty() {
            errors.add(key("startAt"), "Start time is required");
        } else if parse_datetime_input(&self.start_at).is_none() {
            errors.add(key("startAt"), "Start time is not a valid date");
        }
        if !self.end_at.trim().is_empty() && parse_datetime_input(&self.end_at).is_none() {
            errors.add(key("endAt"), "End time is not a valid date");
        }
        parse_optional_number::<f64>(errors, &key("score"), &self.score, "Score must be a number");
        parse_optional_number::<i32>(
            errors,
            &key("priority"),
            &self.priority,
            "Priority must be a whole number",
        );
    }

    fn to_dto(&self) -> Option<MovieFlagDto> {
        Some(MovieFlagDto {
            kind: self.kind,
            source: self.source,
            metadata: FlagMetadata {
                score: optional_number(&self.score),
                reason: non_empty(&self.reason),
                priority: optional_number(&self.priority),
            },
            start_at: parse_datetime_input(&self.start_at)?,
            end_at: parse_datetime_input(&self.end_at),
        })
    }
}

const MANAGED: [LangField; 3] = [LangField::Title, LangField::Slug, LangField::Description];

#[derive(Debug, Clone, PartialEq)]
pub struct MovieForm {
    pub editor: MultiLangEditor,
    /// Empty means "no franchise".
    pub franchise_id: String,
    pub poster: String,
    pub thumbnail: String,
    pub banner: String,
    pub backdrop: String,
    pub trailer_url: String,
    pub movie_type: MovieType,
    pub current_episode: String,
    pub total_episodes: String,
    pub genres: Vec<String>,
    pub cast: Vec<String>,
    pub director: String,
    pub year: String,
    pub country: String,
    pub is_published: bool,
    pub flags: Vec<FlagDraft>,
}

impl MovieForm {
    pub fn add_flag(&mut self, now: DateTime<Utc>) {
        self.flags.push(FlagDraft::starting_at(now));
    }

    pub fn remove_flag(&mut self, index: usize) {
        if index < self.flags.len() {
            self.flags.remove(index);
        }
    }

    fn flag_dtos(&self) -> Vec<MovieFlagDto> {
        self.flags.iter().filter_map(FlagDraft::to_dto).collect()
    }
}

impl Multilingual for MovieForm {
    fn editor(&self) -> &MultiLangEditor {
        &self.editor
    }

    fn editor_mut(&mut self) -> &mut MultiLangEditor {
        &mut self.editor
    }
}

impl EntityForm for MovieForm {
    type Entity = Movie;
    type Create = MovieCreateDto;
    type Update = MovieUpdateDto;

    fn blank() -> Self {
        Self {
            editor: MultiLangEditor::new(DEFAULT_LANGUAGE, &MANAGED),
            franchise_id: String::new(),
            poster: String::new(),
            thumbnail: String::new(),
            banner: String::new(),
            backdrop: String::new(),
            trailer_url: String::new(),
            movie_type: MovieType::Movie,
            current_episode: String::new(),
            total_episodes: String::new(),
            genres: Vec::new(),
            cast: Vec::new(),
            director: String::new(),
            year: String::new(),
            country: String::new(),
            is_published: false,
            flags: Vec::new(),
        }
    }

    fn from_entity(movie: &Movie) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let number = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
        Self {
            editor: MultiLangEditor::from_existing(
                &movie.default_lang,
                vec![
                    (LangField::Title, movie.title.clone()),
                    (LangField::Slug, movie.slug.clone()),
                    (LangField::Description, movie.description.clone()),
                ],
            ),
            franchise_id: movie
                .franchise_id
                .as_ref()
                .map(|f| f.id().to_string())
                .unwrap_or_default(),
            poster: text(&movie.poster),
            thumbnail: text(&movie.thumbnail),
            banner: text(&movie.banner),
            backdrop: text(&movie.backdrop),
            trailer_url: text(&movie.trailer_url),
            movie_type: movie.movie_type,
            current_episode: number(movie.current_episode),
            total_episodes: number(movie.total_episodes),
            genres: relation_ids(&movie.genres),
            cast: relation_ids(&movie.cast),
            director: movie
                .director
                .as_ref()
                .map(|d| d.id().to_string())
                .unwrap_or_default(),
            year: movie.year.map(|y| y.to_string()).unwrap_or_default(),
            country: text(&movie.country),
            is_published: movie.is_published,
            flags: movie.flags.iter().map(FlagDraft::from_flag).collect(),
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
        require_text(
            &mut errors,
            "defaultLang",
            self.editor.default_language(),
            "Default language is required",
        );
        for (field, value) in [
            ("poster", &self.poster),
            ("thumbnail", &self.thumbnail),
            ("banner", &self.banner),
            ("backdrop", &self.backdrop),
            ("trailerUrl", &self.trailer_url),
        ] {
            check_url(&mut errors, field, value, false, "Invalid URL");
        }
        parse_optional_number::<u32>(
            &mut errors,
            "currentEpisode",
            &self.current_episode,
            "Current episode must be a whole number",
        );
        parse_optional_number::<u32>(
            &mut errors,
            "totalEpisodes",
            &self.total_episodes,
            "Total episodes must be a whole number",
        );
        parse_optional_number::<i32>(&mut errors, "year", &self.year, "Year must be a number");
        for (index, flag) in self.flags.iter().enumerate() {
            flag.validate(index, &mut errors);
        }
        errors.into_result()
    }

    fn to_create(&self) -> MovieCreateDto {
        MovieCreateDto {
            franchise_id: non_empty(&self.franchise_id),
            title: self.editor.submitted(LangField::Title),
            description: self.editor.submitted(LangField::Description),
            slug: self.editor.submitted(LangField::Slug),
            default_lang: self.editor.default_language().to_string(),
            poster: non_empty(&self.poster),
            thumbnail: non_empty(&self.thumbnail),
            banner: non_empty(&self.banner),
            backdrop: non_empty(&self.backdrop),
            trailer_url: non_empty(&self.trailer_url),
            movie_type: self.movie_type,
            current_episode: optional_number(&self.current_episode),
            total_episodes: optional_number(&self.total_episodes),
            genres: self.genres.clone(),
            cast: self.cast.clone(),
            director: non_empty(&self.director),
            year: optional_number(&self.year),
            country: non_empty(&self.country),
            is_published: self.is_published,
            flags: self.flag_dtos(),
        }
    }

    fn to_update(&self) -> MovieUpdateDto {
        let dto = self.to_create();
        MovieUpdateDto {
            franchise_id: dto.franchise_id,
            title: dto.title,
            description: dto.description,
            slug: dto.slug,
            default_lang: dto.default_lang,
            poster: dto.poster,
            thumbnail: dto.thumbnail,
            banner: dto.banner,
            backdrop: dto.backdrop,
            trailer_url: dto.trailer_url,
            movie_type: dto.movie_type,
            current_episode: dto.current_episode,
            total_episodes: dto.total_episodes,
            genres: dto.genres,
            cast: dto.cast,
            director: dto.director,
            year: dto.year,
            country: dto.country,
            is_published: dto.is_published,
            flags: dto.flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::SubmitRequest;

    const MOVIE_JSON: &str = r#"{
        "_id": "m1",
        "franchiseId": {"_id": "f1", "title": {"vi": "Lật Mặt"}},
        "title": {"vi": "Lật Mặt 7", "en": "Face Off 7"},
        "description": {"vi": "Một điều ước"},
        "slug": {"vi": "lat-mat-7"},
        "defaultLang": "vi",
        "poster": "https://img.example.com/p.jpg",
        "type": "MOVIE",
        "genres": [{"_id": "g1", "title": {"vi": "Gia đình"}}],
        "cast": [{"_id": "p1", "name": "Thanh Hiền"}],
        "director": {"_id": "p2", "name": "Lý Hải"},
        "year": 2024,
        "isPublished": true,
        "flags": [{
            "type": "trending",
            "source": "system",
            "metadata": {"score": 9.5},
            "startAt": "2024-05-01T08:00:00.000Z",
            "endAt": null,
            "createdAt": "2024-05-01T08:00:00.000Z",
            "updatedAt": "2024-05-01T08:00:00.000Z"
        }],
        "ratingAvg": 4.6,
        "views": 120000,
        "dailyViews": 800,
        "likes": 3000,
        "lastTrendingUpdate": "2024-05-03T00:00:00.000Z"
    }"#;

    #[test]
    fn test_update_strips_read_only_statistics() {
        let movie: Movie = serde_json::from_str(MOVIE_JSON).unwrap();
        assert_eq!(movie.views, 120000);

        let form = MovieForm::from_entity(&movie);
        assert_eq!(form.franchise_id, "f1");
        assert_eq!(form.genres, vec!["g1"]);
        assert_eq!(form.director, "p2");
        assert_eq!(form.year, "2024");
        assert_eq!(form.flags[0].start_at, "2024-05-01T08:00");

        let SubmitRequest::Update { id, patch } = form.submit(Some("m1")).unwrap() else {
            panic!("expected update");
        };
        assert_eq!(id, "m1");
        let json = serde_json::to_value(&patch).unwrap();
        for key in [
            "ratingAvg",
            "views",
            "dailyViews",
            "likes",
            "lastTrendingUpdate",
            "createdAt",
            "_id",
        ] {
            assert!(json.get(key).is_none(), "{key} leaked into the patch");
        }
        assert_eq!(json["flags"][0]["type"], "trending");
        assert!(json["flags"][0].get("createdAt").is_none());
        assert_eq!(json["type"], "MOVIE");
    }

    #[test]
    fn test_cleared_franchise_is_sent_as_null_on_update() {
        let movie: Movie = serde_json::from_str(MOVIE_JSON).unwrap();
        let mut form = MovieForm::from_entity(&movie);
        form.franchise_id.clear();
        form.year.clear();

        let json = serde_json::to_value(form.to_update()).unwrap();
        assert!(json["franchiseId"].is_null());
        assert!(json["year"].is_null());

        let create = serde_json::to_value(form.to_create()).unwrap();
        assert!(create.get("franchiseId").is_none());
        assert!(create.get("year").is_none());
    }

    #[test]
    fn test_empty_numbers_are_unset_not_zero() {
        let mut form = MovieForm::blank();
        form.editor.set_field_value("vi", LangField::Title, "Bố Già");
        form.movie_type = MovieType::Series;
        form.total_episodes = "12".into();

        let dto = form.to_create();
        assert_eq!(dto.current_episode, None);
        assert_eq!(dto.total_episodes, Some(12));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_field_scoped_errors() {
        let mut form = MovieForm::blank();
        form.editor.set_field_value("vi", LangField::Title, "Mai");
        form.trailer_url = "youtube".into();
        form.year = "two thousand".into();
        form.add_flag(Utc::now());
        form.flags[0].start_at.clear();

        let errors = form.validate().unwrap_err();
        assert!(errors.has("trailerUrl"));
        assert!(errors.has("year"));
        assert!(errors.has("flags.0.startAt"));
        assert!(!errors.has("title"));
        assert!(!errors.has("poster"));
    }

    #[test]
    fn test_datetime_input_round_trip() {
        let dt = parse_datetime_input("2024-06-01T20:30").unwrap();
        assert_eq!(format_datetime_input(&dt), "2024-06-01T20:30");
        assert!(parse_datetime_input("yesterday").is_none());
    }
}
