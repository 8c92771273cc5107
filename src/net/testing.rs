//! Scripted transport shared by API and store tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::error::ApiError;
use super::http::{ApiRequest, ApiResponse, Transport};

type SendHook = Box<dyn FnOnce()>;

/// Records every request and replies from a queue of scripted responses.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    hooks: RefCell<VecDeque<Option<SendHook>>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub(crate) fn respond_json(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.respond_text(status, &body.to_string())
    }

    /// Queue a raw text response.
    pub(crate) fn respond_text(&self, status: u16, body: &str) -> &Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self.hooks.borrow_mut().push_back(None);
        self
    }

    /// Queue a transport failure.
    pub(crate) fn fail(&self, message: &str) -> &Self {
        self.responses.borrow_mut().push_back(Err(ApiError::Network(message.to_owned())));
        self.hooks.borrow_mut().push_back(None);
        self
    }

    /// Run `hook` while the most recently queued response is "in flight".
    pub(crate) fn during_last<F: FnOnce() + 'static>(&self, hook: F) -> &Self {
        if let Some(slot) = self.hooks.borrow_mut().back_mut() {
            *slot = Some(Box::new(hook));
        }
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        let hook = self.hooks.borrow_mut().pop_front().flatten();
        if let Some(hook) = hook {
            hook();
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}
