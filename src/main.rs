use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use syme_watch::api::{set_verbose, HttpProjectApi, PollOutcome, ProjectApi};
use syme_watch::boot::BootWaitLoop;
use syme_watch::config::{self, Config};
use syme_watch::termination::TerminationController;
use syme_watch::ui::{print_status_table, BootSpinner, TerminalDisplay, TerminalPanel};
use syme_watch::watch::StatusWatchLoop;

// How long `halt` waits to hear back before leaving the request in flight
const HALT_REPORT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(
    name = "syme",
    author,
    version,
    about = "Watch and halt remotely managed projects",
    long_about = r#"syme: follow a project's lifecycle from the terminal.

Polls the project server's status endpoint at a fixed interval, shows the
current state, waits for a booting project to become reachable, and halts
a project on request.

Examples:
  syme wait-boot clojure-koans --address 10.0.0.4
  syme watch clojure-koans
  syme halt clojure-koans
"#,
    after_help = "Use `syme <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Project server root (overrides SYME_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Poll interval in milliseconds (overrides SYME_POLL_INTERVAL_MS)
    #[arg(long, global = true)]
    interval_ms: Option<u64>,
    /// Echo every request and response
    #[arg(long, global = true)]
    verbose: bool,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow a project's status until interrupted
    Watch {
        project: String,
        /// Address to display next to the status (struck through once halted)
        #[arg(long)]
        address: Option<String>,
    },
    /// Wait for a project to boot, then start watching it
    #[command(about = "Wait for a project to boot", long_about = "Poll until the project's status endpoint answers, then restart the session and watch its status. There is no retry limit.")]
    WaitBoot {
        project: String,
        #[arg(long)]
        address: Option<String>,
    },
    /// Halt a project
    #[command(about = "Halt a project", long_about = "Ask for confirmation, then send a single DELETE for the project. The outcome shows up in the project's status.")]
    Halt {
        project: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Show the current status once
    Status { project: String },
}

async fn watch(api: HttpProjectApi, cfg: &Config, project: &str, address: Option<String>) {
    let display = TerminalDisplay::new(project, address);
    let mut watcher = StatusWatchLoop::new(api, display, project, cfg.poll_interval, cfg.decoration.clone());
    tokio::select! {
        _ = watcher.run() => {}
        _ = tokio::signal::ctrl_c() => {}
    }
    tracing::info!(project, polls = watcher.polls(), "Stopped watching");
}

async fn wait_boot(api: HttpProjectApi, cfg: &Config, project: &str, address: Option<String>) {
    let mut spinner = BootSpinner::new(project);
    let booted = {
        let mut boot = BootWaitLoop::new(api.clone(), &mut spinner, project, cfg.poll_interval);
        tokio::select! {
            report = boot.run() => report.is_some(),
            _ = tokio::signal::ctrl_c() => false,
        }
    };
    if booted && spinner.reloaded() {
        // Start over from a fresh session, nothing carried across.
        let api = match HttpProjectApi::new(api.base_url(), cfg.request_timeout) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
                process::exit(1);
            }
        };
        watch(api, cfg, project, address).await;
    }
}

async fn halt(api: HttpProjectApi, project: &str, yes: bool) {
    let mut controller = TerminationController::new(Arc::new(api), TerminalPanel::new(project));
    if !yes {
        controller.request_confirmation();
        let mut answer = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        if let Err(e) = stdin.read_line(&mut answer).await {
            tracing::warn!(error = %e, "Failed to read confirmation");
        }
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            controller.cancel();
            println!("{}", yansi::Paint::new("Cancelled").yellow());
            return;
        }
    }

    let handle = controller.confirm(project);
    match tokio::time::timeout(HALT_REPORT_TIMEOUT, handle).await {
        Ok(Ok(Ok(()))) => {
            println!("{} {}", yansi::Paint::new("Halt requested for").green(), yansi::Paint::new(project).bold());
            println!("Follow progress with: syme watch {}", project);
        }
        Ok(Ok(Err(e))) => {
            eprintln!("{}: {}", yansi::Paint::new("Halt request failed").red(), e);
            process::exit(1);
        }
        Ok(Err(e)) => {
            tracing::error!(%e, "Halt task aborted");
            eprintln!("{}: {}", yansi::Paint::new("Halt request aborted").red(), e);
            process::exit(1);
        }
        Err(_) => {
            println!("{}", yansi::Paint::new("No response yet; the halt request may still be in flight").yellow());
        }
    }
}

async fn status(api: HttpProjectApi, project: &str) {
    match api.poll_status(project).await {
        PollOutcome::Snapshot(snapshot) => print_status_table(project, &snapshot),
        PollOutcome::Unavailable(reason) => {
            eprintln!("{} {}: {}", yansi::Paint::new("Status unavailable for").red(), project, reason);
            process::exit(1);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    set_verbose(cli.verbose);

    config::load_env_file(cli.env_file.as_deref());
    let cfg = match Config::from_env().with_overrides(cli.base_url.as_deref(), cli.interval_ms) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Invalid configuration").red(), e);
            process::exit(2);
        }
    };
    tracing::debug!(base_url = %cfg.base_url, interval_ms = cfg.poll_interval.as_millis() as u64, "Configuration loaded");

    let api = match HttpProjectApi::new(&cfg.base_url, cfg.request_timeout) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Watch { project, address } => watch(api, &cfg, &project, address).await,
        Commands::WaitBoot { project, address } => wait_boot(api, &cfg, &project, address).await,
        Commands::Halt { project, yes } => halt(api, &project, yes).await,
        Commands::Status { project } => status(api, &project).await,
    }
}
