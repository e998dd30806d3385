pub mod episode;
pub mod franchise;
pub mod genre;
pub mod movie;
pub mod server;
pub mod stats;
pub mod user;

/// Serde default for entities missing `defaultLang`.
pub(crate) fn default_lang() -> String {
    crate::shared::localized::DEFAULT_LANGUAGE.to_string()
}
