//! Project list and current-project state.
//!
//! DESIGN
//! ======
//! Every refresh takes a sequence number from its cell when it starts. A
//! response is applied only if its number is still the latest, so a slow
//! earlier refresh cannot overwrite a newer one, and `cancel` drops whatever
//! is in flight.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::Project;

/// Project list for the overview page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub error: Option<String>,
    request_seq: u64,
}

impl ProjectsState {
    /// Mark a refresh as started and return its sequence number.
    pub fn begin_refresh(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    /// Apply a refresh result. Returns `false` if `seq` is stale.
    ///
    /// On error the previous items are kept.
    pub fn finish_refresh(&mut self, seq: u64, result: Result<Vec<Project>, String>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Invalidate any in-flight refresh.
    pub fn cancel(&mut self) {
        self.request_seq += 1;
        self.loading = false;
    }
}

/// The project shown on the detail page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentProjectState {
    pub project: Option<Project>,
    pub loading: bool,
    pub error: Option<String>,
    request_seq: u64,
}

impl CurrentProjectState {
    /// Mark a refresh as started and return its sequence number.
    pub fn begin_refresh(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    /// Apply a refresh result. Returns `false` if `seq` is stale.
    pub fn finish_refresh(&mut self, seq: u64, result: Result<Project, String>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(project) => {
                self.project = Some(project);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    pub fn cancel(&mut self) {
        self.request_seq += 1;
        self.loading = false;
    }

    /// Id of the loaded project, if any.
    pub fn id(&self) -> Option<&str> {
        self.project.as_ref().map(|p| p.id.as_str())
    }
}
