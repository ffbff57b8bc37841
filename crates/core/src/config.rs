//! Construction-time configuration for the façade.

use serde::{Deserialize, Serialize};

/// Settings threaded into [`GlState`](crate::state::GlState) when it is built.
///
/// The default follows the `validation` cargo feature, so a production
/// build without the feature skips every argument check unless the caller
/// turns it back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Check arguments before tracking or forwarding a call.
    pub validate: bool,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            validate: cfg!(feature = "validation"),
        }
    }
}

impl StateConfig {
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
