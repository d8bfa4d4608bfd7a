use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::StatusCode;
use yansi::Paint;

use super::endpoints::{absolute_url, project_path, status_path};
use super::error::ApiError;
use super::project_api::ProjectApi;
use crate::status::StatusSnapshot;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if VERBOSE.load(Ordering::Relaxed) {
        eprintln!("{}", msg);
    }
}

fn log_request(method: &str, url: &str) {
    if !VERBOSE.load(Ordering::Relaxed) {
        return;
    }
    let parts = [
        Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
        format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()),
        format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)),
    ];
    log_output(format!("Request:\n{}", parts.join(" ")));
}

fn log_response(status: StatusCode, body: &str) {
    // Grayed out color (dimmed/dark gray)
    let response_str = Paint::new(format!("HTTP {}: {}", status.as_u16(), body)).rgb(100, 100, 100).to_string();
    log_output(format!("Response:\n{}", response_str));
}

/// reqwest-backed access to the project server.
#[derive(Clone, Debug)]
pub struct HttpProjectApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProjectApi {
    /// Build a client for `base_url`. A `request_timeout` of `None` keeps the
    /// transport default (no timeout), so a stalled request stalls the loop.
    pub fn new(base_url: &str, request_timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(format!("syme-watch/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: crate::config::sanitize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ProjectApi for HttpProjectApi {
    async fn fetch_status(&self, project: &str) -> Result<StatusSnapshot, ApiError> {
        let url = absolute_url(&self.base_url, &status_path(project)?);
        log_request("GET", &url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            log_output(format!("Response:\n{}", Paint::new(format!("Request failed: {}", e)).red()));
            ApiError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        log_response(status, &text);

        if status != StatusCode::OK {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(StatusSnapshot::from_json(&text)?)
    }

    async fn delete_project(&self, project: &str) -> Result<(), ApiError> {
        let url = absolute_url(&self.base_url, &project_path(project)?);
        log_request("DELETE", &url);

        let response = self.client.delete(&url).send().await?;
        log_response(response.status(), "");
        tracing::debug!(project, status = response.status().as_u16(), "Delete request answered");
        Ok(())
    }
}
