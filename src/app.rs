//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::http::BrowserTransport;
use crate::net::types::User;
use crate::pages::{project_info::ProjectInfoPage, projects::ProjectsPage};
use crate::routes::{AppRoute, PROJECT_ID_PARAM, PROJECTS_SEGMENT, ROOT_SEGMENT, ROUTE_TABLE, View};
use crate::state::store::AdminStore;

fn api_config() -> ApiConfig {
    #[cfg(feature = "csr")]
    {
        ApiConfig::from_window()
    }
    #[cfg(not(feature = "csr"))]
    {
        ApiConfig::from_location("http:", "localhost")
    }
}

/// Page component for a routed view.
fn page_for(view: View) -> AnyView {
    match view {
        View::Projects => view! { <ProjectsPage/> }.into_any(),
        View::ProjectInfo => view! { <ProjectInfoPage/> }.into_any(),
    }
}

/// Fallback: redirect paths the route table still accepts (e.g. with a
/// trailing slash) to their canonical form.
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    move || match AppRoute::resolve(&location.pathname.get()) {
        Some(route) => view! { <Redirect path=route.path()/> }.into_any(),
        None => view! { <p class="not-found">"Page not found."</p> }.into_any(),
    }
}

/// Root application component.
///
/// Creates the session's `AdminStore`, provides it and the API client to all
/// pages, and mounts one route per `View` using the segment constants the
/// route table is spelled from. The store lives as long as this component;
/// `user` seeds the auth cell when the host page already knows who is
/// signed in.
#[component]
pub fn App(#[prop(optional)] user: Option<User>) -> impl IntoView {
    provide_meta_context();

    let store = AdminStore::new();
    if let Some(user) = user {
        store.set_current_user(user);
    }
    store.provide();
    provide_context(ApiClient::new(api_config(), BrowserTransport));
    for (pattern, view) in ROUTE_TABLE {
        log::debug!("app: route {pattern} -> {view:?}");
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-client.css"/>
        <Title text="Project Admin"/>

        <Router>
            <Routes fallback=NotFound>
                <Route path=StaticSegment(ROOT_SEGMENT) view=|| page_for(View::Projects)/>
                <Route
                    path=(StaticSegment(PROJECTS_SEGMENT), ParamSegment(PROJECT_ID_PARAM))
                    view=|| page_for(View::ProjectInfo)
                />
            </Routes>
        </Router>
    }
}
