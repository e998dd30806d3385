use contracts::system::auth::{StoredSession, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_client::{ApiClient, ApiError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Explicit session object. Created once at start-up from persisted storage
/// and handed to the API client; only `sign_in`/`sign_out` change it.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: RwSignal<AuthState>,
}

impl Session {
    pub fn restore() -> Self {
        let state = storage::load_session()
            .map(|stored| AuthState {
                access_token: Some(stored.access_token),
                user: Some(stored.user),
            })
            .unwrap_or_default();
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Bearer token for outgoing requests, read without tracking.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.access_token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .with(|s| s.user.as_ref().map(UserProfile::is_admin).unwrap_or(false))
    }

    pub fn sign_in(&self, stored: StoredSession) {
        storage::save_session(&stored);
        self.state.set(AuthState {
            access_token: Some(stored.access_token),
            user: Some(stored.user),
        });
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.state.set(AuthState::default());
    }

    fn refresh_profile(&self, user: UserProfile) {
        let Some(access_token) = self.token() else {
            return;
        };
        self.sign_in(StoredSession { access_token, user });
    }
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided")
}

/// Validate a restored token against `/auth/me`. An unauthenticated answer
/// clears the session; network failures keep it for the next request.
pub fn validate_restored_session(client: ApiClient) {
    let session = client.session();
    if session.token().is_none() {
        return;
    }
    spawn_local(async move {
        match api::current_user(&client).await {
            Ok(user) => session.refresh_profile(user),
            Err(ApiError::Unauthenticated) => {
                log::info!("stored session expired");
                session.sign_out();
            }
            Err(e) => log::warn!("could not validate stored session: {e}"),
        }
    });
}

/// Sign in with e-mail and password
pub async fn do_login(client: &ApiClient, email: String, password: String) -> Result<(), ApiError> {
    let response = api::login(client, email, password).await?;
    client.session().sign_in(response.into());
    Ok(())
}

/// Best-effort server logout, then forget the local session
pub async fn do_logout(client: &ApiClient) {
    if let Err(e) = api::logout(client).await {
        log::warn!("logout request failed: {e}");
    }
    client.session().sign_out();
}
