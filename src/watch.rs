//! Status-watch loop
//!
//! Polls a project's status forever, re-deriving and applying the UI binding
//! after every successful poll. A failed poll skips the UI update for that
//! tick but never stops the loop: the next tick is scheduled either way.

use std::time::Duration;

use crate::api::{PollOutcome, ProjectApi};
use crate::ui::{DecorationRules, StatusDisplay, UiBinding};

/// What a single tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Applied(UiBinding),
    Skipped(String),
}

pub struct StatusWatchLoop<A, D> {
    api: A,
    display: D,
    project: String,
    interval: Duration,
    rules: DecorationRules,
    polls: u64,
    scheduled: u64,
    // Only used to log transitions; never fed back into the binding.
    last_status: Option<String>,
}

impl<A: ProjectApi, D: StatusDisplay> StatusWatchLoop<A, D> {
    pub fn new(api: A, display: D, project: &str, interval: Duration, rules: DecorationRules) -> Self {
        Self {
            api,
            display,
            project: project.to_string(),
            interval,
            rules,
            polls: 0,
            scheduled: 0,
            last_status: None,
        }
    }

    /// Number of polls issued so far.
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Number of follow-up ticks scheduled so far.
    pub fn scheduled(&self) -> u64 {
        self.scheduled
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Poll once and apply the result. Never fails.
    pub async fn tick(&mut self) -> TickOutcome {
        self.polls += 1;
        match self.api.poll_status(&self.project).await {
            PollOutcome::Snapshot(snapshot) => {
                let binding = UiBinding::derive(&snapshot, &self.rules);
                if self.last_status.as_deref() != Some(snapshot.status.as_str()) {
                    tracing::info!(
                        project = %self.project,
                        from = self.last_status.as_deref().unwrap_or("unknown"),
                        to = %snapshot.status,
                        terminal = snapshot.state().is_terminal(),
                        "Status changed"
                    );
                    self.last_status = Some(snapshot.status.clone());
                }
                tracing::debug!(project = %self.project, status = %binding.status_text, "Applying status");
                self.display.apply(&binding);
                TickOutcome::Applied(binding)
            }
            PollOutcome::Unavailable(reason) => {
                tracing::debug!(project = %self.project, %reason, "Skipping tick");
                TickOutcome::Skipped(reason)
            }
        }
    }

    /// Run until the future is dropped.
    pub async fn run(&mut self) {
        tracing::info!(project = %self.project, interval_ms = self.interval.as_millis() as u64, "Watching status");
        loop {
            self.tick().await;
            self.scheduled += 1;
            tokio::time::sleep(self.interval).await;
        }
    }
}
