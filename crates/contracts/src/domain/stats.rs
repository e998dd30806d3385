use serde::{Deserialize, Serialize};

/// Catalog totals shown on the dashboard home page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_movies: u64,
    #[serde(default)]
    pub published_movies: u64,
    #[serde(default)]
    pub unpublished_movies: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub average_rating: f64,
}

impl DashboardStats {
    /// Average rating with one decimal, as shown on the card.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalMovies": 12, "averageRating": 4.26}"#).unwrap();
        assert_eq!(stats.total_movies, 12);
        assert_eq!(stats.total_views, 0);
        assert_eq!(stats.rating_label(), "4.3");
    }
}
