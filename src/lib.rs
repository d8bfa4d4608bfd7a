//! Client-side status watcher for remotely managed projects.
//!
//! Two loops share one polling primitive: [`boot::BootWaitLoop`] waits for a
//! project to come up and then reloads the client, and
//! [`watch::StatusWatchLoop`] reflects the project's lifecycle state on a
//! display for as long as it runs. [`termination::TerminationController`]
//! issues the halt request.

pub mod api;
pub mod boot;
pub mod config;
pub mod status;
pub mod termination;
pub mod ui;
pub mod watch;
