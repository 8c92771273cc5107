//! Project overview page (`/`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the project list whenever a token becomes available. Create and
//! delete run the write first and only then refresh the list.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::project_form::ProjectForm;
use crate::net::api::ApiClient;
use crate::net::http::BrowserTransport;
use crate::net::types::{ListOptions, ProjectDraft};
use crate::pages::{SIGN_IN_REQUIRED, describe_action_error};
use crate::state::auth::AuthState;
use crate::state::store::AdminStore;

/// Project list with create and delete actions.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let store = expect_context::<AdminStore>();
    let client = expect_context::<ApiClient<BrowserTransport>>();
    let projects = store.projects;
    let auth = store.auth;

    let show_create = RwSignal::new(false);
    let create_pending = RwSignal::new(false);
    let delete_project_id = RwSignal::new(None::<String>);
    let action_error = RwSignal::new(None::<String>);

    let load_client = client.clone();
    Effect::new(move || {
        let Some(token) = auth.with(AuthState::token) else {
            return;
        };
        let client = load_client.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = store.refresh_projects(&client, &token, ListOptions::default()).await {
                log::warn!("projects page: list refresh failed: {err}");
            }
        });
    });

    let on_create_submit = Callback::new({
        let client = client.clone();
        move |draft: ProjectDraft| {
            let Some(token) = store.token() else {
                action_error.set(Some(SIGN_IN_REQUIRED.to_owned()));
                return;
            };
            let client = client.clone();
            create_pending.set(true);
            leptos::task::spawn_local(async move {
                match store.create_project(&client, &token, &draft).await {
                    Ok(refresh) => {
                        show_create.set(false);
                        action_error.set(None);
                        if let Err(err) = store.refresh(&client, &token, refresh).await {
                            log::warn!("projects page: refresh after create failed: {err}");
                        }
                    }
                    Err(err) => action_error.set(Some(describe_action_error("create", &err))),
                }
                create_pending.set(false);
            });
        }
    });

    let on_delete_confirm = Callback::new({
        let client = client.clone();
        move |id: String| {
            delete_project_id.set(None);
            let Some(token) = store.token() else {
                action_error.set(Some(SIGN_IN_REQUIRED.to_owned()));
                return;
            };
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match store.delete_project(&client, &token, &id).await {
                    Ok(refresh) => {
                        action_error.set(None);
                        if let Err(err) = store.refresh(&client, &token, refresh).await {
                            log::warn!("projects page: refresh after delete failed: {err}");
                        }
                    }
                    Err(err) => action_error.set(Some(describe_action_error("delete", &err))),
                }
            });
        }
    });

    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_project_id.set(None));
    let on_delete_request = Callback::new(move |id: String| delete_project_id.set(Some(id)));

    view! {
        <Show
            when=move || auth.with(|a| a.token().is_some())
            fallback=move || view! { <div class="projects-page"><p>{SIGN_IN_REQUIRED}</p></div> }
        >
            <div class="projects-page">
                <header class="projects-page__header toolbar">
                    <span class="toolbar__title">"Projects"</span>
                    <span class="toolbar__spacer"></span>
                    <button class="btn toolbar__new-project" on:click=move |_| show_create.set(true)>
                        "+ New Project"
                    </button>
                </header>

                <Show when=move || action_error.get().is_some()>
                    <p class="projects-page__error">{move || action_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || projects.with(|s| s.error.is_some())>
                    <p class="projects-page__error">{move || projects.with(|s| s.error.clone()).unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !projects.with(|s| s.loading && s.items.is_empty())
                    fallback=move || view! { <p>"Loading projects..."</p> }
                >
                    <div class="projects-page__cards">
                        {move || {
                            projects
                                .get()
                                .items
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project on_delete=on_delete_request/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <Show when=move || show_create.get()>
                    <ProjectForm
                        title="Create Project"
                        submit_label="Create"
                        on_submit=on_create_submit
                        on_cancel=on_create_cancel
                        pending=create_pending
                    />
                </Show>
                <Show when=move || delete_project_id.get().is_some()>
                    <DeleteProjectDialog
                        project_id=delete_project_id
                        on_confirm=on_delete_confirm
                        on_cancel=on_delete_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}

/// Confirmation dialog for deleting a project.
#[component]
fn DeleteProjectDialog(
    project_id: RwSignal<Option<String>>,
    on_confirm: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm = move |_| {
        if let Some(id) = project_id.get_untracked() {
            on_confirm.run(id);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Project"</h2>
                <p>"The project will be marked as deleted."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=confirm>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
