use crate::config::{parse_state_list, DEFAULT_HALT_HIDDEN_STATES, DEFAULT_STRUCK_STATES};
use crate::status::StatusSnapshot;

/// Which statuses change which controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationRules {
    /// Statuses that hide the halt control.
    pub hide_halt_on: Vec<String>,
    /// Statuses that strike through the address display.
    pub strike_address_on: Vec<String>,
}

impl Default for DecorationRules {
    fn default() -> Self {
        Self::new(
            parse_state_list(DEFAULT_HALT_HIDDEN_STATES),
            parse_state_list(DEFAULT_STRUCK_STATES),
        )
    }
}

impl DecorationRules {
    pub fn new(hide_halt_on: Vec<String>, strike_address_on: Vec<String>) -> Self {
        Self {
            hide_halt_on,
            strike_address_on,
        }
    }

    pub fn hides_halt(&self, status: &str) -> bool {
        self.hide_halt_on.iter().any(|s| s == status)
    }

    pub fn strikes_address(&self, status: &str) -> bool {
        self.strike_address_on.iter().any(|s| s == status)
    }
}

/// Presentation directives for one status snapshot.
///
/// Always derived from scratch; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiBinding {
    pub status_text: String,
    /// Style class, equal to the raw status.
    pub status_class: String,
    pub halt_control_visible: bool,
    pub address_struck: bool,
}

impl UiBinding {
    pub fn derive(snapshot: &StatusSnapshot, rules: &DecorationRules) -> Self {
        let status = snapshot.status.as_str();
        Self {
            status_text: status.to_string(),
            status_class: status.to_string(),
            halt_control_visible: !rules.hides_halt(status),
            address_struck: rules.strikes_address(status),
        }
    }
}
