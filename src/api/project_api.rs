use std::future::Future;

use super::error::ApiError;
use crate::status::StatusSnapshot;

/// Result of a single status poll.
///
/// Every failure (transport, non-200, malformed body) collapses into
/// `Unavailable`; the reason is kept only for logging.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Snapshot(StatusSnapshot),
    Unavailable(String),
}

impl PollOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, PollOutcome::Snapshot(_))
    }
}

impl From<Result<StatusSnapshot, ApiError>> for PollOutcome {
    fn from(result: Result<StatusSnapshot, ApiError>) -> Self {
        match result {
            Ok(snapshot) => PollOutcome::Snapshot(snapshot),
            Err(e) => PollOutcome::Unavailable(e.to_string()),
        }
    }
}

/// The two requests the client makes against the project server.
pub trait ProjectApi: Send + Sync {
    /// `GET /project/{id}/status`; `Ok` only for a 200 with a parseable body.
    fn fetch_status(&self, project: &str) -> impl Future<Output = Result<StatusSnapshot, ApiError>> + Send;

    /// `DELETE /project/{id}`; the response body is never inspected.
    fn delete_project(&self, project: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Issue one status poll and absorb any failure into `PollOutcome`.
    fn poll_status(&self, project: &str) -> impl Future<Output = PollOutcome> + Send {
        async move {
            let outcome = PollOutcome::from(self.fetch_status(project).await);
            if let PollOutcome::Unavailable(reason) = &outcome {
                tracing::debug!(project, %reason, "Status unavailable");
            }
            outcome
        }
    }
}

impl<T: ProjectApi> ProjectApi for std::sync::Arc<T> {
    fn fetch_status(&self, project: &str) -> impl Future<Output = Result<StatusSnapshot, ApiError>> + Send {
        (**self).fetch_status(project)
    }

    fn delete_project(&self, project: &str) -> impl Future<Output = Result<(), ApiError>> + Send {
        (**self).delete_project(project)
    }
}
