//! Dialog form for creating or editing a project.
//!
//! DESIGN
//! ======
//! Input is validated locally with the same rule the API enforces (every
//! field required) so obviously bad drafts never leave the browser.

#[cfg(test)]
#[path = "project_form_test.rs"]
mod project_form_test;

use leptos::prelude::*;

use crate::net::types::ProjectDraft;

const ALL_FIELDS_REQUIRED: &str = "Fill in short code, short name, long name and description.";

/// Trim every field and require all four to be non-empty.
///
/// # Errors
///
/// Returns a user-facing message when any field is blank.
pub fn validate_draft_input(
    short_code: &str,
    short_name: &str,
    long_name: &str,
    description: &str,
) -> Result<ProjectDraft, &'static str> {
    let fields = [short_code.trim(), short_name.trim(), long_name.trim(), description.trim()];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ALL_FIELDS_REQUIRED);
    }
    let [short_code, short_name, long_name, description] = fields;
    Ok(ProjectDraft::new(short_code, short_name, long_name, description))
}

/// Modal form with the four writable project fields.
#[component]
pub fn ProjectForm(
    title: &'static str,
    submit_label: &'static str,
    #[prop(optional)] initial: ProjectDraft,
    on_submit: Callback<ProjectDraft>,
    on_cancel: Callback<()>,
    #[prop(optional)] pending: Option<RwSignal<bool>>,
) -> impl IntoView {
    let short_code = RwSignal::new(initial.short_code);
    let short_name = RwSignal::new(initial.short_name);
    let long_name = RwSignal::new(initial.long_name);
    let description = RwSignal::new(initial.description);
    let error = RwSignal::new(None::<&'static str>);

    let submit = Callback::new(move |()| {
        match validate_draft_input(&short_code.get(), &short_name.get(), &long_name.get(), &description.get()) {
            Ok(draft) => {
                error.set(None);
                on_submit.run(draft);
            }
            Err(message) => error.set(Some(message)),
        }
    });
    let is_pending = move || pending.is_some_and(|p| p.get());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--project" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    "Short code"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || short_code.get()
                        on:input=move |ev| short_code.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Short name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || short_name.get()
                        on:input=move |ev| short_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Long name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || long_name.get()
                        on:input=move |ev| long_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=is_pending
                        on:click=move |_| submit.run(())
                    >
                        {submit_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
