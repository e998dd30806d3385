use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Signed-in account as returned by `/auth/login` and `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.username.as_deref())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(self.email.as_str())
    }
}

/// Token and profile persisted between page loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub access_token: String,
    pub user: UserProfile,
}

impl From<LoginResponse> for StoredSession {
    fn from(resp: LoginResponse) -> Self {
        Self {
            access_token: resp.access_token,
            user: resp.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let raw = r#"{
            "accessToken": "eyJhbGciOi",
            "user": {"_id": "u1", "email": "admin@example.com", "role": "admin", "displayName": "Admin"}
        }"#;
        let resp: LoginResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.user.is_admin());
        assert_eq!(resp.user.label(), "Admin");

        let stored = StoredSession::from(resp);
        let json = serde_json::to_string(&stored).unwrap();
        let back: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn test_non_admin_roles() {
        let profile = UserProfile {
            id: "u2".into(),
            email: "mod@example.com".into(),
            role: "moderator".into(),
            username: None,
            display_name: None,
            avatar: None,
        };
        assert!(!profile.is_admin());
        assert_eq!(profile.label(), "mod@example.com");
    }
}
