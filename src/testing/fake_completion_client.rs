use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{CompletionClient, CompletionRequest};

/// Scripted completion client that records what it was asked.
#[derive(Clone)]
pub struct FakeCompletionClient {
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    outcome: Result<String, String>,
}

impl FakeCompletionClient {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), outcome: Ok(reply.into()) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), outcome: Err(message.into()) }
    }

    pub fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request);
        self.outcome.clone().map_err(|message| AppError::upstream(message, None))
    }
}
