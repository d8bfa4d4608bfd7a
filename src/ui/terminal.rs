//! Terminal rendering of the watch surface

use comfy_table::{modifiers, presets, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use terminal_size::{terminal_size, Width};
use yansi::Paint;

use super::binding::UiBinding;
use super::surface::{ConfirmationPanel, Reload, StatusDisplay};
use crate::status::{format_status, StatusSnapshot};

fn paint_status(binding: &UiBinding) -> String {
    let label = format_status(&binding.status_text);
    match binding.status_class.as_str() {
        "running" => Paint::new(label).green().bold().to_string(),
        "booting" => Paint::new(label).yellow().to_string(),
        "halting" | "halted" => Paint::new(label).dim().to_string(),
        "failed" => Paint::new(label).red().bold().to_string(),
        _ => Paint::new(label).cyan().to_string(),
    }
}

/// One status line per change, prefixed with the local time.
pub struct TerminalDisplay {
    project: String,
    address: Option<String>,
    last: Option<UiBinding>,
}

impl TerminalDisplay {
    pub fn new(project: &str, address: Option<String>) -> Self {
        Self {
            project: project.to_string(),
            address,
            last: None,
        }
    }

    /// Render a binding as a single terminal line.
    pub fn render_line(&self, binding: &UiBinding) -> String {
        let mut parts = vec![
            Paint::new(chrono::Local::now().format("%H:%M:%S").to_string()).dim().to_string(),
            Paint::new(&self.project).bold().to_string(),
            paint_status(binding),
        ];
        if let Some(addr) = &self.address {
            if binding.address_struck {
                parts.push(Paint::new(addr).strike().dim().to_string());
            } else {
                parts.push(Paint::new(addr).underline().to_string());
            }
        }
        if binding.halt_control_visible {
            parts.push(Paint::new(format!("(halt: syme halt {})", self.project)).dim().to_string());
        }
        parts.join("  ")
    }
}

impl StatusDisplay for TerminalDisplay {
    fn apply(&mut self, binding: &UiBinding) {
        if self.last.as_ref() == Some(binding) {
            return;
        }
        println!("{}", self.render_line(binding));
        self.last = Some(binding.clone());
    }
}

/// Confirmation prompt printed before a halt.
pub struct TerminalPanel {
    project: String,
    visible: bool,
}

impl TerminalPanel {
    pub fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            visible: false,
        }
    }
}

impl ConfirmationPanel for TerminalPanel {
    fn show(&mut self) {
        if !self.visible {
            eprint!(
                "{} {} {} ",
                Paint::new("Halt project").yellow().bold(),
                Paint::new(&self.project).bold(),
                Paint::new("? This cannot be undone. [y/N]").yellow()
            );
        }
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Spinner shown while waiting for boot; "reloading" finishes it.
pub struct BootSpinner {
    bar: ProgressBar,
    reloaded: bool,
}

impl BootSpinner {
    pub fn new(project: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
            bar.set_style(style);
        }
        bar.set_message(format!("Waiting for {} to boot...", project));
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar, reloaded: false }
    }

    pub fn reloaded(&self) -> bool {
        self.reloaded
    }
}

impl Reload for BootSpinner {
    fn reload(&mut self) {
        self.bar.finish_with_message("Booted, reloading");
        self.reloaded = true;
    }
}

/// Print a one-shot snapshot as a Field/Value table.
pub fn print_status_table(project: &str, snapshot: &StatusSnapshot) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }

    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["project".to_string(), project.to_string()]);
    table.add_row(vec!["status".to_string(), format_status(&snapshot.status)]);
    for (k, v) in &snapshot.extra {
        let value = match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        table.add_row(vec![k.clone(), value]);
    }
    println!("\n{table}\n");
}
