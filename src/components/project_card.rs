//! Card for one project in the overview list.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::routes::AppRoute;

/// A clickable card linking to the project's detail route.
#[component]
pub fn ProjectCard(project: Project, #[prop(optional)] on_delete: Option<Callback<String>>) -> impl IntoView {
    let href = AppRoute::ProjectInfo { id: project.id.clone() }.path();
    let deleted = project.is_deleted();
    let on_delete_click = Callback::new({
        let id = project.id.clone();
        move |()| {
            if let Some(on_delete) = on_delete.as_ref() {
                on_delete.run(id.clone());
            }
        }
    });

    view! {
        <a class="project-card" class:project-card--deleted=deleted href=href>
            <span class="project-card__code">{project.short_code}</span>
            <span class="project-card__name">{project.short_name}</span>
            <span class="project-card__long-name">{project.long_name}</span>
            <Show when=move || !deleted>
                <button
                    class="project-card__delete"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_delete_click.run(());
                    }
                    title="Delete project"
                    aria-label="Delete project"
                >
                    "✕"
                </button>
            </Show>
        </a>
    }
}
