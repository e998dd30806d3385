use super::localized::LocalizedText;
use serde::{Deserialize, Serialize};

/// Minimal shape of a populated reference (movie, server, genre, person).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub slug: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A reference the backend sends either as a bare id or populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationRef {
    Id(String),
    Object(RelationSummary),
}

impl RelationRef {
    pub fn id(&self) -> &str {
        match self {
            RelationRef::Id(id) => id,
            RelationRef::Object(summary) => &summary.id,
        }
    }

    /// Human label: name, localized title, then the id.
    pub fn label(&self, language: &str) -> String {
        match self {
            RelationRef::Id(id) => id.clone(),
            RelationRef::Object(summary) => summary
                .name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .or_else(|| summary.title.display(language).map(str::to_string))
                .unwrap_or_else(|| summary.id.clone()),
        }
    }
}

pub fn relation_ids(refs: &[RelationRef]) -> Vec<String> {
    refs.iter().map(|r| r.id().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_and_populated_refs() {
        let refs: Vec<RelationRef> = serde_json::from_str(
            r#"["g1", {"_id": "g2", "title": {"vi": "Hài"}}, {"_id": "p1", "name": "Trấn Thành"}]"#,
        )
        .unwrap();
        assert_eq!(relation_ids(&refs), vec!["g1", "g2", "p1"]);
        assert_eq!(refs[0].label("vi"), "g1");
        assert_eq!(refs[1].label("en"), "Hài");
        assert_eq!(refs[2].label("vi"), "Trấn Thành");
    }
}
