//! Boot-wait loop
//!
//! Polls until the status endpoint answers successfully, then reloads the
//! client exactly once. There is no retry limit; boot time is decided by the
//! server.

use std::time::Duration;

use crate::api::{PollOutcome, ProjectApi};
use crate::status::StatusSnapshot;
use crate::ui::Reload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Waiting,
    Booted,
}

/// Summary handed back once the project is reachable.
#[derive(Debug, Clone, PartialEq)]
pub struct BootReport {
    pub polls: u64,
    pub snapshot: StatusSnapshot,
}

pub struct BootWaitLoop<A, R> {
    api: A,
    reloader: R,
    project: String,
    interval: Duration,
    state: BootState,
    polls: u64,
}

impl<A: ProjectApi, R: Reload> BootWaitLoop<A, R> {
    pub fn new(api: A, reloader: R, project: &str, interval: Duration) -> Self {
        Self {
            api,
            reloader,
            project: project.to_string(),
            interval,
            state: BootState::Waiting,
            polls: 0,
        }
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }

    pub fn reloader(&self) -> &R {
        &self.reloader
    }

    /// Wait for boot, reload, and report. Calling again after boot returns
    /// immediately without reloading a second time.
    pub async fn run(&mut self) -> Option<BootReport> {
        if self.state == BootState::Booted {
            return None;
        }
        loop {
            self.polls += 1;
            match self.api.poll_status(&self.project).await {
                PollOutcome::Snapshot(snapshot) => {
                    self.state = BootState::Booted;
                    tracing::info!(project = %self.project, attempts = self.polls, status = %snapshot.status, "Project reachable, reloading");
                    self.reloader.reload();
                    return Some(BootReport {
                        polls: self.polls,
                        snapshot,
                    });
                }
                PollOutcome::Unavailable(reason) => {
                    tracing::debug!(project = %self.project, attempt = self.polls, %reason, "Not booted yet");
                    tokio::time::sleep(self.interval).await;
                }
            }
        }
    }
}
