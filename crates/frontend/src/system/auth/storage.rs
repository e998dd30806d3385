use contracts::system::auth::StoredSession;
use web_sys::window;

/// Single namespaced key holding token and profile.
const SESSION_KEY: &str = "catalog-admin.auth";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the signed-in session
pub fn save_session(session: &StoredSession) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(raw) => {
            if storage.set_item(SESSION_KEY, &raw).is_err() {
                log::warn!("could not persist session");
            }
        }
        Err(e) => log::error!("could not encode session: {e}"),
    }
}

/// Read the persisted session; unreadable entries are discarded.
pub fn load_session() -> Option<StoredSession> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    match decode_session(&raw) {
        Some(session) => Some(session),
        None => {
            log::warn!("discarding unreadable stored session");
            clear_session();
            None
        }
    }
}

/// Remove the persisted session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

fn decode_session(raw: &str) -> Option<StoredSession> {
    serde_json::from_str::<StoredSession>(raw)
        .ok()
        .filter(|s| !s.access_token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_session() {
        let raw = r#"{"accessToken":"t0k","user":{"_id":"u1","email":"a@b.co","role":"admin"}}"#;
        let session = decode_session(raw).unwrap();
        assert_eq!(session.access_token, "t0k");
        assert!(decode_session(r#"{"accessToken":"","user":{"_id":"u1","email":"a@b.co"}}"#).is_none());
        assert!(decode_session("not json").is_none());
    }
}
