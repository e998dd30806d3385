use crate::dashboard::ui::DashboardPage;
use crate::domain::episode::ui::{EpisodeDetails, EpisodeFormPage, EpisodeList};
use crate::domain::franchise::ui::{FranchiseDetails, FranchiseFormPage, FranchiseList};
use crate::domain::genre::ui::{GenreDetails, GenreFormPage, GenreList};
use crate::domain::movie::ui::{MovieDetails, MovieFormPage, MovieList};
use crate::domain::server::ui::{ServerDetails, ServerFormPage, ServerList};
use crate::domain::user::ui::{UserDetails, UserFormPage, UserList};
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h2>"Page not found"</h2>
            <a href="/">"Back to the dashboard"</a>
        </div>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell>
            <RequireAdmin>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DashboardPage />

                    <Route path=path!("/movies") view=MovieList />
                    <Route path=path!("/movies/create") view=MovieFormPage />
                    <Route path=path!("/movies/edit/:id") view=MovieFormPage />
                    <Route path=path!("/movies/:id") view=MovieDetails />

                    <Route path=path!("/franchises") view=FranchiseList />
                    <Route path=path!("/franchises/create") view=FranchiseFormPage />
                    <Route path=path!("/franchises/edit/:id") view=FranchiseFormPage />
                    <Route path=path!("/franchises/:id") view=FranchiseDetails />

                    <Route path=path!("/genres") view=GenreList />
                    <Route path=path!("/genres/create") view=GenreFormPage />
                    <Route path=path!("/genres/edit/:id") view=GenreFormPage />
                    <Route path=path!("/genres/:id") view=GenreDetails />

                    <Route path=path!("/episodes") view=EpisodeList />
                    <Route path=path!("/episodes/create") view=EpisodeFormPage />
                    <Route path=path!("/episodes/edit/:id") view=EpisodeFormPage />
                    <Route path=path!("/episodes/:id") view=EpisodeDetails />

                    <Route path=path!("/servers") view=ServerList />
                    <Route path=path!("/servers/create") view=ServerFormPage />
                    <Route path=path!("/servers/edit/:id") view=ServerFormPage />
                    <Route path=path!("/servers/:id") view=ServerDetails />

                    <Route path=path!("/users") view=UserList />
                    <Route path=path!("/users/create") view=UserFormPage />
                    <Route path=path!("/users/edit/:id") view=UserFormPage />
                    <Route path=path!("/users/:id") view=UserDetails />
                </Routes>
            </RequireAdmin>
        </Shell>
    }
}

/// Signed-out visitors get the login page whatever the URL; signing in
/// swaps in the shell on the same route.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Router>
            <Show
                when=move || session.is_authenticated()
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Router>
    }
}
