//! REST calls against `/v1/projects`.
//!
//! Request construction is split into pure `*_request` builders so the exact
//! method, URL, header, and body of every call can be checked without a
//! browser. `ApiClient` pairs those builders with a `Transport`.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses become
//! `ApiError::Status` instead of being decoded as data.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{ApiRequest, Method, Transport};
use super::types::{ListOptions, Project, ProjectDraft};
use crate::config::ApiConfig;

const PROJECTS_PATH: &str = "v1/projects";

fn projects_endpoint(config: &ApiConfig) -> String {
    config.endpoint(PROJECTS_PATH)
}

fn project_endpoint(config: &ApiConfig, uuid: &str) -> String {
    config.endpoint(&format!("{PROJECTS_PATH}/{uuid}"))
}

fn draft_body(draft: &ProjectDraft) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(draft).map_err(|e| ApiError::Encode(e.to_string()))
}

/// `GET /v1/projects`.
///
/// `options.include_deleted` is not encoded: the server only reads it from a
/// GET body, which `fetch` refuses to send.
pub fn list_projects_request(config: &ApiConfig, token: &str, options: ListOptions) -> ApiRequest {
    if options.include_deleted {
        log::debug!("api: include_deleted requested but not sent");
    }
    ApiRequest::new(Method::Get, projects_endpoint(config), token)
}

/// `GET /v1/projects/{uuid}`.
pub fn get_project_request(config: &ApiConfig, token: &str, uuid: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, project_endpoint(config, uuid), token)
}

/// `POST /v1/projects` with the draft as JSON.
///
/// # Errors
///
/// Returns `ApiError::Encode` if the draft cannot be serialized.
pub fn create_project_request(config: &ApiConfig, token: &str, draft: &ProjectDraft) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::new(Method::Post, projects_endpoint(config), token).with_body(draft_body(draft)?))
}

/// `PUT /v1/projects/{uuid}` with the draft as JSON.
///
/// # Errors
///
/// Returns `ApiError::Encode` if the draft cannot be serialized.
pub fn edit_project_request(
    config: &ApiConfig,
    token: &str,
    uuid: &str,
    draft: &ProjectDraft,
) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::new(Method::Put, project_endpoint(config, uuid), token).with_body(draft_body(draft)?))
}

/// `DELETE /v1/projects/{uuid}`.
pub fn delete_project_request(config: &ApiConfig, token: &str, uuid: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, project_endpoint(config, uuid), token)
}

/// Project API client over a `Transport`.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    async fn execute<R: serde::de::DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        log::debug!("api: {} {url}", method.as_str());
        let resp = self.transport.send(request).await?;
        let resp = resp.error_for_status().inspect_err(|e| {
            log::warn!("api: {} {url} failed: {e}", method.as_str());
        })?;
        resp.json()
    }

    /// Fetch every project. A `null` body is treated as an empty list.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or a body
    /// that is not a project array.
    pub async fn list_projects(&self, token: &str, options: ListOptions) -> Result<Vec<Project>, ApiError> {
        let items: Option<Vec<Project>> = self.execute(list_projects_request(&self.config, token, options)).await?;
        Ok(items.unwrap_or_default())
    }

    /// Fetch one project by UUID.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or a body
    /// that is not a project.
    pub async fn get_project(&self, token: &str, uuid: &str) -> Result<Project, ApiError> {
        self.execute(get_project_request(&self.config, token, uuid)).await
    }

    /// Create a project and return the server's copy.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if encoding, transport, status, or decoding fails.
    pub async fn create_project(&self, token: &str, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.execute(create_project_request(&self.config, token, draft)?).await
    }

    /// Replace the writable fields of a project.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if encoding, transport, status, or decoding fails.
    pub async fn edit_project(&self, token: &str, uuid: &str, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.execute(edit_project_request(&self.config, token, uuid, draft)?).await
    }

    /// Soft-delete a project and return its final state.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-2xx status, or a body
    /// that is not a project.
    pub async fn delete_project(&self, token: &str, uuid: &str) -> Result<Project, ApiError> {
        self.execute(delete_project_request(&self.config, token, uuid)).await
    }
}
