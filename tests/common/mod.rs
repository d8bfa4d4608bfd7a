//! Shared fakes for the loop and controller tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::time::Instant;

use syme_watch::api::{ApiError, ProjectApi};
use syme_watch::status::StatusSnapshot;
use syme_watch::ui::{ConfirmationPanel, Reload, StatusDisplay, UiBinding};

/// One scripted answer from the status endpoint.
#[derive(Debug, Clone)]
pub enum Step {
    Ok(&'static str),
    Transport,
    Http(u16),
    Malformed,
}

/// How the fake answers DELETE.
#[derive(Debug, Clone, Copy)]
pub enum DeleteMode {
    Ok,
    Fail,
    Never,
}

pub struct ScriptedApi {
    steps: Mutex<VecDeque<Step>>,
    poll_times: Mutex<Vec<Instant>>,
    deletes: Mutex<Vec<String>>,
    delete_mode: DeleteMode,
}

impl ScriptedApi {
    pub fn new(steps: Vec<Step>) -> Self {
        Self::with_delete_mode(steps, DeleteMode::Ok)
    }

    pub fn with_delete_mode(steps: Vec<Step>, delete_mode: DeleteMode) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            poll_times: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
            delete_mode,
        }
    }

    pub fn poll_times(&self) -> Vec<Instant> {
        self.poll_times.lock().unwrap().clone()
    }

    pub fn poll_count(&self) -> usize {
        self.poll_times.lock().unwrap().len()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

impl ProjectApi for ScriptedApi {
    async fn fetch_status(&self, _project: &str) -> Result<StatusSnapshot, ApiError> {
        self.poll_times.lock().unwrap().push(Instant::now());
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Ok(status)) => Ok(StatusSnapshot::new(status)),
            Some(Step::Transport) => Err(ApiError::Transport("connection refused".into())),
            Some(Step::Http(code)) => Err(ApiError::Status(code)),
            Some(Step::Malformed) => Ok(StatusSnapshot::from_json("{\"status\": ")?),
            None => Err(ApiError::Transport("script exhausted".into())),
        }
    }

    async fn delete_project(&self, project: &str) -> Result<(), ApiError> {
        self.deletes.lock().unwrap().push(project.to_string());
        match self.delete_mode {
            DeleteMode::Ok => Ok(()),
            DeleteMode::Fail => Err(ApiError::Transport("connection reset".into())),
            DeleteMode::Never => std::future::pending().await,
        }
    }
}

/// Display that remembers every binding it was given.
#[derive(Default)]
pub struct RecordingDisplay {
    pub applied: Vec<UiBinding>,
}

impl StatusDisplay for RecordingDisplay {
    fn apply(&mut self, binding: &UiBinding) {
        self.applied.push(binding.clone());
    }
}

#[derive(Default)]
pub struct RecordingPanel {
    pub visible: bool,
    pub shows: usize,
    pub hides: usize,
}

impl ConfirmationPanel for RecordingPanel {
    fn show(&mut self) {
        self.shows += 1;
        self.visible = true;
    }

    fn hide(&mut self) {
        self.hides += 1;
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Default)]
pub struct CountingReloader {
    pub reloads: usize,
    pub at: Vec<Instant>,
}

impl Reload for CountingReloader {
    fn reload(&mut self) {
        self.reloads += 1;
        self.at.push(Instant::now());
    }
}
