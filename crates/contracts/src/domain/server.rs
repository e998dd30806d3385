use crate::shared::form::EntityForm;
use crate::shared::validation::{check_url, non_empty, require_text, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A video source endpoint episodes are served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCreateDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerUpdateDto {
    pub name: String,
    pub base_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerForm {
    pub name: String,
    pub base_url: String,
    pub is_active: bool,
}

impl EntityForm for ServerForm {
    type Entity = Server;
    type Create = ServerCreateDto;
    type Update = ServerUpdateDto;

    fn blank() -> Self {
        Self {
            name: String::new(),
            base_url: String::new(),
            is_active: true,
        }
    }

    fn from_entity(server: &Server) -> Self {
        Self {
            name: server.name.clone(),
            base_url: server.base_url.clone().unwrap_or_default(),
            is_active: server.is_active,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "name", &self.name, "Server name is required");
        check_url(&mut errors, "baseUrl", &self.base_url, false, "Invalid URL");
        errors.into_result()
    }

    fn to_create(&self) -> ServerCreateDto {
        ServerCreateDto {
            name: self.name.trim().to_string(),
            base_url: non_empty(&self.base_url),
            is_active: self.is_active,
        }
    }

    fn to_update(&self) -> ServerUpdateDto {
        ServerUpdateDto {
            name: self.name.trim().to_string(),
            base_url: non_empty(&self.base_url),
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_base_url() {
        let mut form = ServerForm::blank();
        form.name = "  Vietsub #1 ".into();
        assert!(form.validate().is_ok());

        let json = serde_json::to_value(form.to_create()).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Vietsub #1", "isActive": true}));

        form.base_url = "ftp//broken".into();
        assert!(form.validate().unwrap_err().has("baseUrl"));
    }

    #[test]
    fn test_name_required() {
        let form = ServerForm::blank();
        assert_eq!(
            form.validate().unwrap_err().get("name"),
            Some("Server name is required")
        );
    }
}
