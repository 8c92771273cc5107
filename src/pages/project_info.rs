//! Project detail page (`/projects/:id`).

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::project_form::ProjectForm;
use crate::net::api::ApiClient;
use crate::net::http::BrowserTransport;
use crate::net::types::{Project, ProjectDraft};
use crate::pages::{SIGN_IN_REQUIRED, describe_action_error};
use crate::routes::{AppRoute, PROJECT_ID_PARAM};
use crate::state::auth::AuthState;
use crate::state::store::AdminStore;

/// Shown when the route parameter is not a UUID.
pub const INVALID_PROJECT_ID: &str = "Not a valid project id.";

/// Normalise a route parameter to a canonical UUID string.
pub fn parse_project_id(raw: &str) -> Option<String> {
    uuid::Uuid::parse_str(raw.trim()).ok().map(|id| id.to_string())
}

/// Shows one project and lets the user edit it.
#[component]
pub fn ProjectInfoPage() -> impl IntoView {
    let store = expect_context::<AdminStore>();
    let client = expect_context::<ApiClient<BrowserTransport>>();
    let current = store.current_project;
    let auth = store.auth;
    let params = use_params_map();

    let project_id = Memo::new(move |_| params.read().get(PROJECT_ID_PARAM).as_deref().and_then(parse_project_id));
    let show_edit = RwSignal::new(false);
    let edit_pending = RwSignal::new(false);
    let action_error = RwSignal::new(None::<String>);

    let load_client = client.clone();
    Effect::new(move || {
        let Some(id) = project_id.get() else {
            current.update(|s| {
                s.cancel();
                s.project = None;
                s.error = Some(INVALID_PROJECT_ID.to_owned());
            });
            return;
        };
        let Some(token) = auth.with(AuthState::token) else {
            return;
        };
        let client = load_client.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = store.refresh_project(&client, &token, &id).await {
                log::warn!("project page: load of {id} failed: {err}");
            }
        });
    });

    // Only show the current-project cell once it holds the routed project.
    let shown_project = move || {
        let id = project_id.get()?;
        current.with(|s| s.project.clone().filter(|p| p.id == id))
    };

    let on_edit_submit = Callback::new({
        let client = client.clone();
        move |draft: ProjectDraft| {
            let (Some(token), Some(id)) = (store.token(), project_id.get_untracked()) else {
                action_error.set(Some(SIGN_IN_REQUIRED.to_owned()));
                return;
            };
            let client = client.clone();
            edit_pending.set(true);
            leptos::task::spawn_local(async move {
                match store.edit_project(&client, &token, &id, &draft).await {
                    Ok(refresh) => {
                        show_edit.set(false);
                        action_error.set(None);
                        if let Err(err) = store.refresh(&client, &token, refresh).await {
                            log::warn!("project page: refresh after edit of {id} failed: {err}");
                        }
                    }
                    Err(err) => action_error.set(Some(describe_action_error("edit", &err))),
                }
                edit_pending.set(false);
            });
        }
    });
    let on_edit_cancel = Callback::new(move |()| show_edit.set(false));

    view! {
        <div class="project-page">
            <header class="project-page__header toolbar">
                <a class="btn toolbar__back" href=AppRoute::Projects.path()>"← Projects"</a>
                <span class="toolbar__title">
                    {move || shown_project().map(|p| p.short_name).unwrap_or_default()}
                </span>
                <span class="toolbar__spacer"></span>
                <Show when=move || shown_project().is_some_and(|p| !p.is_deleted())>
                    <button class="btn toolbar__edit" on:click=move |_| show_edit.set(true)>
                        "Edit"
                    </button>
                </Show>
            </header>

            <Show when=move || auth.with(|a| a.token().is_none())>
                <p class="project-page__error">{SIGN_IN_REQUIRED}</p>
            </Show>
            <Show when=move || action_error.get().is_some()>
                <p class="project-page__error">{move || action_error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || current.with(|s| s.error.is_some())>
                <p class="project-page__error">{move || current.with(|s| s.error.clone()).unwrap_or_default()}</p>
            </Show>

            {move || match shown_project() {
                Some(project) => view! { <ProjectDetails project=project/> }.into_any(),
                None if current.with(|s| s.loading) => view! { <p>"Loading project..."</p> }.into_any(),
                None => ().into_any(),
            }}

            <Show when=move || show_edit.get()>
                {move || {
                    shown_project()
                        .map(|project| {
                            view! {
                                <ProjectForm
                                    title="Edit Project"
                                    submit_label="Save"
                                    initial=project.draft()
                                    on_submit=on_edit_submit
                                    on_cancel=on_edit_cancel
                                    pending=edit_pending
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}

/// Read-only field listing for a project.
#[component]
fn ProjectDetails(project: Project) -> impl IntoView {
    let audit = |value: Option<String>| value.unwrap_or_else(|| "n/a".to_owned());
    let deleted = project.is_deleted();

    view! {
        <dl class="project-details" class:project-details--deleted=deleted>
            <dt>"Id"</dt>
            <dd>{project.id}</dd>
            <dt>"Short code"</dt>
            <dd>{project.short_code}</dd>
            <dt>"Short name"</dt>
            <dd>{project.short_name}</dd>
            <dt>"Long name"</dt>
            <dd>{project.long_name}</dd>
            <dt>"Description"</dt>
            <dd>{project.description}</dd>
            <dt>"Created"</dt>
            <dd>{audit(project.created_at)} " by " {audit(project.created_by)}</dd>
            <dt>"Changed"</dt>
            <dd>{audit(project.changed_at)} " by " {audit(project.changed_by)}</dd>
            <dt>"Deleted"</dt>
            <dd>{audit(project.deleted_at)} " by " {audit(project.deleted_by)}</dd>
        </dl>
    }
}
