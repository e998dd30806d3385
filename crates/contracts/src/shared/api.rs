use super::pagination::Pagination;
use serde::{Deserialize, Serialize};

/// Envelope wrapping every API response.
///
/// `success: false` is a failure regardless of the HTTP status; `pagination`
/// is only present on server-paginated list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    /// Payload of a successful response, or the server's message.
    pub fn into_data(self) -> Result<T, String> {
        if !self.success {
            return Err(self
                .message
                .unwrap_or_else(|| "Request was rejected".to_string()));
        }
        self.data
            .ok_or_else(|| self.message.unwrap_or_else(|| "Response carried no data".to_string()))
    }
}

/// One page of a collection plus the pagination block, if the server sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

/// Query parameters of list endpoints. Resource-specific filters are passed
/// alongside as extra pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(flatten)]
    pub filters: std::collections::BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_with_pagination() {
        let raw = r#"{
            "success": true,
            "data": [1, 2, 3],
            "pagination": {"total": 45, "page": 2, "limit": 20, "totalPages": 3}
        }"#;
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(raw).unwrap();
        let pagination = resp.pagination.unwrap();
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(resp.into_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rejected_envelope_is_failure() {
        let raw = r#"{"success": false, "message": "Slug already exists"}"#;
        let resp: ApiResponse<u32> = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_data().unwrap_err(), "Slug already exists");
    }

    #[test]
    fn test_missing_data_is_failure() {
        let resp: ApiResponse<u32> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.into_data().is_err());
    }
}
