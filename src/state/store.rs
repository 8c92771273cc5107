//! Session-scoped store tying the API client to the reactive state cells.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` builds one `AdminStore` per UI session and provides it (and each
//! of its signals) through context. Pages call the workflows below and render
//! from the signals.
//!
//! DESIGN
//! ======
//! Mutations are two explicit steps. `create_project`, `edit_project` and
//! `delete_project` perform the write and return the `Refresh` it calls for;
//! `refresh` performs that follow-up. The `*_and_refresh` helpers chain both.
//! A failed write never triggers its refresh.
//!
//! ERROR HANDLING
//! ==============
//! Refresh failures are written to the cell's `error` field and returned.
//! Write failures are only returned; the caller decides how to surface them.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use super::auth::AuthState;
use super::projects::{CurrentProjectState, ProjectsState};
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::Transport;
use crate::net::types::{ListOptions, Project, ProjectDraft, User};

/// Follow-up read a mutation calls for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refresh {
    /// Refetch the whole project list.
    ProjectList,
    /// Refetch one project into the current-project cell.
    Project(String),
}

/// The three state cells of an admin UI session.
#[derive(Clone, Copy)]
pub struct AdminStore {
    pub projects: RwSignal<ProjectsState>,
    pub current_project: RwSignal<CurrentProjectState>,
    pub auth: RwSignal<AuthState>,
}

impl Default for AdminStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminStore {
    pub fn new() -> Self {
        Self {
            projects: RwSignal::new(ProjectsState::default()),
            current_project: RwSignal::new(CurrentProjectState::default()),
            auth: RwSignal::new(AuthState::default()),
        }
    }

    /// Provide the store and each of its cells to descendant components.
    pub fn provide(self) {
        provide_context(self);
        provide_context(self.projects);
        provide_context(self.current_project);
        provide_context(self.auth);
    }

    /// Replace the current user. No network call.
    pub fn set_current_user(&self, user: User) {
        log::debug!("store: current user set to {}", user.id);
        self.auth.set(AuthState { user: Some(user) });
    }

    /// Bearer token of the current user, read without tracking.
    pub fn token(&self) -> Option<String> {
        self.auth.with_untracked(AuthState::token)
    }

    /// Drop every in-flight refresh; their responses will be ignored.
    pub fn cancel_refreshes(&self) {
        self.projects.update(ProjectsState::cancel);
        self.current_project.update(CurrentProjectState::cancel);
    }

    /// End the session: cancel refreshes and reset every cell.
    pub fn clear_session(&self) {
        self.cancel_refreshes();
        self.projects.update(|s| {
            s.items.clear();
            s.error = None;
        });
        self.current_project.update(|s| {
            s.project = None;
            s.error = None;
        });
        self.auth.set(AuthState::default());
    }

    // =============================================================
    // Reads
    // =============================================================

    /// Refetch the project list into `projects`.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` of a failed fetch; it is also recorded in the
    /// cell unless the refresh was superseded.
    pub async fn refresh_projects<T: Transport>(
        &self,
        client: &ApiClient<T>,
        token: &str,
        options: ListOptions,
    ) -> Result<(), ApiError> {
        let mut seq = 0;
        self.projects.update(|s| seq = s.begin_refresh());

        let result = client.list_projects(token, options).await;
        let recorded = result.as_ref().map_err(ToString::to_string).cloned();
        let mut applied = false;
        self.projects.maybe_update(|s| {
            applied = s.finish_refresh(seq, recorded);
            applied
        });
        if !applied {
            log::warn!("store: dropped stale project list response");
        }
        result.map(|_| ())
    }

    /// Refetch one project into `current_project`.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` of a failed fetch; it is also recorded in the
    /// cell unless the refresh was superseded.
    pub async fn refresh_project<T: Transport>(
        &self,
        client: &ApiClient<T>,
        token: &str,
        uuid: &str,
    ) -> Result<(), ApiError> {
        let mut seq = 0;
        self.current_project.update(|s| seq = s.begin_refresh());

        let result = client.get_project(token, uuid).await;
        let recorded = result.as_ref().map_err(ToString::to_string).cloned();
        let mut applied = false;
        self.current_project.maybe_update(|s| {
            applied = s.finish_refresh(seq, recorded);
            applied
        });
        if !applied {
            log::warn!("store: dropped stale response for project {uuid}");
        }
        result.map(|_| ())
    }

    /// Perform the follow-up read of a mutation.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` of the underlying refresh.
    pub async fn refresh<T: Transport>(
        &self,
        client: &ApiClient<T>,
        token: &str,
        refresh: Refresh,
    ) -> Result<(), ApiError> {
        match refresh {
            Refresh::ProjectList => self.refresh_projects(client, token, ListOptions::default()).await,
            Refresh::Project(uuid) => self.refresh_project(client, token, &uuid).await,
        }
    }

    // =============================================================
    // Writes
    // =============================================================

    /// Create a project. The created project is not written into any cell;
    /// the returned `Refresh::ProjectList` reloads the list instead.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` of the failed request.
    pub async fn create_project<T: Transport>(
        &self,
        client: &ApiClient<T>,
        token: &str,
        draft: &ProjectDraft,
    ) -> Result<Refresh, ApiError> {
        let created: Project = client.create_project(token, draft).await?;
        log::debug!("store: created project {}", created.id);
        Ok(Refresh::ProjectList)
    }

    /// Edit a project; calls for a reload of that project.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` of the failed request.
    pub async fn edit_project<T: Transport>(
        &self,
        client: &ApiClient<T>,
        token: &str,
        uuid: &str,
        draft: &ProjectDraft,
    ) -> Result<Refresh, ApiError> {
        client.edit_project(token, uuid, draft).await?;
        log::debug!("store: edited project {uuid}");
        Ok(Refresh::Project(uuid.to_owned()))
    }

    /// Delete a project; calls for a reload of the list.
    ///
    /// # Errors
    ///
    /// Returns the `ApiError` of the failed request.
    pub async fn delete_project<T: Transport>(
        &self,
        client: &ApiClient<T>,
        token: &str,
        uuid: &str,
    ) -> Result<Refresh, ApiError> {
        client.delete_project(token, uuid).await?;
        log::debug!("store: deleted project {uuid}");
        Ok(Refresh::ProjectList)
    }

    /// `create_project` followed by its refresh.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError` of either step.
    pub async fn create_project_and_refresh<T: Transport>(
        &self,
        client: &ApiClient<T>,
        token: &str,
        draft: &ProjectDraft,
    ) -> Result<(), ApiError> {
        let refresh = self.create_project(client, token, draft).await?;
        self.refresh(client, token, refresh).await
    }

    /// `edit_project` followed by its refresh.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError` of either step.
    pub async fn edit_project_and_refresh<T: Transport>(
        &self,
        client: &ApiClient<T>,
        token: &str,
        uuid: &str,
        draft: &ProjectDraft,
    ) -> Result<(), ApiError> {
        let refresh = self.edit_project(client, token, uuid, draft).await?;
        self.refresh(client, token, refresh).await
    }

    /// `delete_project` followed by its refresh.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError` of either step.
    pub async fn delete_project_and_refresh<T: Transport>(
        &self,
        client: &ApiClient<T>,
        token: &str,
        uuid: &str,
    ) -> Result<(), ApiError> {
        let refresh = self.delete_project(client, token, uuid).await?;
        self.refresh(client, token, refresh).await
    }
}
