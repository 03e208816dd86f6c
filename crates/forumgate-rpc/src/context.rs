use std::future::Future;
use std::time::Duration;

use tokio_util::sync::{CancellationToken, DropGuard};
use tonic::metadata::MetadataValue;
use tonic::{Request, Status};

pub const REQUEST_ID_METADATA: &str = "x-request-id";
pub const USERNAME_METADATA: &str = "x-forum-username";

/// Per-request state carried into every backend call.
///
/// The context owns a cancellation token tied to the inbound HTTP request:
/// the dispatcher holds the guard from [`CallContext::cancel_on_drop`], so if
/// the client disconnects and the handler future is dropped, any call still
/// running under [`CallContext::run`] resolves with `Status::cancelled`.
#[derive(Debug, Clone)]
pub struct CallContext {
    request_id: String,
    username: Option<String>,
    timeout: Option<Duration>,
    cancel: CancellationToken,
}

impl CallContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            username: None,
            timeout: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Context with a fresh random request id.
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Guard that cancels this context when dropped.
    pub fn cancel_on_drop(&self) -> DropGuard {
        self.cancel.clone().drop_guard()
    }

    /// Wraps a message in a tonic request carrying this context's deadline
    /// and identity metadata.
    pub fn into_request<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        if let Some(timeout) = self.timeout {
            request.set_timeout(timeout);
        }
        if let Ok(value) = MetadataValue::try_from(self.request_id.as_str()) {
            request.metadata_mut().insert(REQUEST_ID_METADATA, value);
        }
        if let Some(username) = &self.username {
            match MetadataValue::try_from(username.as_str()) {
                Ok(value) => {
                    request.metadata_mut().insert(USERNAME_METADATA, value);
                }
                Err(_) => {
                    tracing::debug!(
                        request_id = %self.request_id,
                        "username is not valid metadata, skipping"
                    );
                }
            }
        }
        request
    }

    /// Drives a backend call under this context's cancellation and timeout.
    pub async fn run<T, F>(&self, call: F) -> Result<T, Status>
    where
        F: Future<Output = Result<T, Status>>,
    {
        let bounded = async {
            match self.timeout {
                Some(limit) => tokio::time::timeout(limit, call).await.unwrap_or_else(|_| {
                    Err(Status::deadline_exceeded(format!(
                        "backend call exceeded {}ms",
                        limit.as_millis()
                    )))
                }),
                None => call.await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Status::cancelled("request cancelled by caller")),
            result = bounded => result,
        }
    }
}
