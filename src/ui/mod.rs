// Presentation: pure binding derivation plus the adapters that apply it
pub mod binding;
pub mod surface;
pub mod terminal;

pub use binding::{DecorationRules, UiBinding};
pub use surface::{ConfirmationPanel, Reload, StatusDisplay};
pub use terminal::{print_status_table, BootSpinner, TerminalDisplay, TerminalPanel};
