//! Two-step halt gesture: show the confirmation, then either cancel or
//! fire a single DELETE.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::{ApiError, ProjectApi};
use crate::ui::ConfirmationPanel;

pub struct TerminationController<A, P> {
    api: Arc<A>,
    panel: P,
}

impl<A, P> TerminationController<A, P>
where
    A: ProjectApi + 'static,
    P: ConfirmationPanel,
{
    pub fn new(api: Arc<A>, panel: P) -> Self {
        Self { api, panel }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn request_confirmation(&mut self) {
        self.panel.show();
    }

    pub fn cancel(&mut self) {
        self.panel.hide();
    }

    /// Issue the DELETE and hide the panel before the request has a chance
    /// to run. Callers may drop the handle; a transport failure is logged
    /// either way and the status poll is what eventually shows the result.
    ///
    /// Must be called from within a tokio runtime.
    pub fn confirm(&mut self, project: &str) -> JoinHandle<Result<(), ApiError>> {
        let api = Arc::clone(&self.api);
        let project = project.to_string();
        let handle = tokio::spawn(async move {
            let result = api.delete_project(&project).await;
            match &result {
                Ok(()) => tracing::info!(project = %project, "Halt requested"),
                Err(e) => tracing::warn!(project = %project, error = %e, "Halt request failed"),
            }
            result
        });
        self.panel.hide();
        handle
    }
}
