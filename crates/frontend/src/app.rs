use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::api_client::ApiClient;
use crate::system::auth::context::{validate_restored_session, Session};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // The session is created once and injected into the API client.
    let session = Session::restore();
    let client = ApiClient::new(&config, session);

    provide_context(config);
    provide_context(session);
    provide_context(client.clone());
    provide_context(AppGlobalContext::new());

    validate_restored_session(client);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
