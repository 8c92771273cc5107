//! Static route table for the admin UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` mounts one `<Route>` per `View`, spelling its paths from the segment
//! constants below, and redirects any other path `AppRoute::resolve` accepts
//! to its canonical form. Pages build links with `AppRoute::path`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Static segment of the project list route.
pub const ROOT_SEGMENT: &str = "";

/// Segment name shared by the router and `AppRoute`.
pub const PROJECTS_SEGMENT: &str = "projects";

/// Route parameter carrying the project UUID.
pub const PROJECT_ID_PARAM: &str = "id";

/// View identifier a route resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Project list with create/delete actions.
    Projects,
    /// Single project detail with edit form.
    ProjectInfo,
}

/// Path pattern to view mapping.
pub const ROUTE_TABLE: [(&str, View); 2] = [("/", View::Projects), ("/projects/:id", View::ProjectInfo)];

/// A concrete, resolved route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Projects,
    ProjectInfo { id: String },
}

impl AppRoute {
    /// Match a concrete path against the table. A trailing slash is accepted.
    pub fn resolve(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Projects),
            [PROJECTS_SEGMENT, id] => Some(Self::ProjectInfo { id: (*id).to_owned() }),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Projects => "/".to_owned(),
            Self::ProjectInfo { id } => format!("/{PROJECTS_SEGMENT}/{id}"),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Self::Projects => View::Projects,
            Self::ProjectInfo { .. } => View::ProjectInfo,
        }
    }
}
