use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::client::Oracle;
use super::error::OracleError;
use super::types::OracleRequest;

#[derive(Debug, Clone)]
enum Behavior {
    Reply(String),
    Fail(String),
    Timeout(Duration),
}

/// Scripted [`Oracle`] that records what it was asked.
#[derive(Debug)]
pub struct MockOracle {
    behavior: Behavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<OracleRequest>>,
}

impl MockOracle {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Answers every call with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(text.into()))
    }

    /// Fails every call with [`OracleError::CallFailed`].
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Fail(reason.into()))
    }

    /// Fails every call with [`OracleError::Timeout`].
    pub fn timing_out(after: Duration) -> Self {
        Self::with_behavior(Behavior::Timeout(after))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<OracleRequest> {
        self.last_request.lock().clone()
    }
}

#[async_trait]
impl Oracle for MockOracle {
    async fn invoke(&self, request: &OracleRequest) -> Result<String, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(request.clone());

        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Fail(reason) => Err(OracleError::CallFailed {
                reason: reason.clone(),
            }),
            Behavior::Timeout(after) => Err(OracleError::Timeout { after: *after }),
        }
    }
}
