//! URL-safe slugs derived from display text.
//!
//! A slug is either empty or matches `^[a-z0-9]+(-[a-z0-9]+)*$`.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Convert arbitrary display text into a slug.
///
/// Accents are removed through canonical decomposition, `đ`/`Đ` become `d`,
/// anything outside `[a-z0-9]` is dropped and runs of whitespace turn into a
/// single hyphen. Hyphens already present act as word separators, so feeding a
/// slug back in returns it unchanged.
pub fn slugify(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .map(|ch| match ch {
            'đ' | 'Đ' => 'd',
            '-' => ' ',
            ch if ch.is_whitespace() => ' ',
            ch => ch,
        })
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == ' ')
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_slug(value: &str) -> bool {
        !value.is_empty()
            && value.split('-').all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
            })
    }

    #[test]
    fn test_vietnamese_place_name() {
        assert_eq!(slugify("Đà Nẵng 2024!"), "da-nang-2024");
    }

    #[test]
    fn test_genre_title() {
        assert_eq!(slugify("Hành Động"), "hanh-dong");
        assert_eq!(slugify("Tâm Lý - Tình Cảm"), "tam-ly-tinh-cam");
    }

    #[test]
    fn test_whitespace_and_punctuation() {
        assert_eq!(slugify("  The   Matrix:\tReloaded  "), "the-matrix-reloaded");
        assert_eq!(slugify("Café Crème"), "cafe-creme");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_hyphen_and_tab_separate_words() {
        assert_eq!(slugify("Spider-Man"), "spider-man");
        assert_eq!(slugify("The\tMatrix"), "the-matrix");
        assert_eq!(slugify("Line\nBreak"), "line-break");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "Đà Nẵng 2024!",
            "  --Spider-Man: No Way Home--  ",
            "Ngôi Nhà Hạnh Phúc (Phần 2)",
            "日本語 only",
            "already-a-slug",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input: {input}");
            assert!(once.is_empty() || is_valid_slug(&once), "shape: {once}");
        }
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("hanh-dong"));
        assert!(is_valid_slug("2024"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-lead"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug("Upper"));
    }
}
