//! Configuration for aipanel sessions.
//!
//! Provides the [`PanelConfig`] struct for session-setup parameters and the
//! [`ConfigurationError`] taxonomy surfaced before any round runs. Users
//! construct the config manually; no file parsing dependencies are required.
//!
//! # Example
//!
//! ```rust
//! use aipanel::config::PanelConfig;
//!
//! // Use the defaults (moderator "Moderator", dolphin-llama3 on localhost)
//! let config = PanelConfig::default();
//! assert!(config.validate().is_ok());
//!
//! // Or specify everything
//! let config = PanelConfig {
//!     moderator_name: "Quang".to_string(),
//!     model: "llama3.1".to_string(),
//!     base_url: "http://localhost:11434".to_string(),
//!     name_pool: None,
//! };
//! ```

use std::error::Error;
use std::fmt;

/// Inclusive lower bound on panel size.
pub const MIN_PANELISTS: usize = 2;
/// Inclusive upper bound on panel size.
pub const MAX_PANELISTS: usize = 10;

/// Error types for session setup. All of these are fatal: they are surfaced
/// before any round runs and the session is never constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Panel size outside the `[MIN_PANELISTS, MAX_PANELISTS]` policy bound.
    PanelSizeOutOfRange(usize),
    /// The master name list for the allocator is empty.
    EmptyNamePool,
    /// The moderator display name is blank after trimming.
    BlankModeratorName,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::PanelSizeOutOfRange(got) => write!(
                f,
                "panel size {} outside allowed range [{}, {}]",
                got, MIN_PANELISTS, MAX_PANELISTS
            ),
            ConfigurationError::EmptyNamePool => write!(f, "name pool is empty"),
            ConfigurationError::BlankModeratorName => write!(f, "moderator name is blank"),
        }
    }
}

impl Error for ConfigurationError {}

/// Session-setup parameters supplied by the input surface.
///
/// This struct is intentionally minimal and users construct it however they
/// want. No TOML, YAML, or other config-file parsing dependencies are
/// introduced.
#[derive(Clone, Debug)]
pub struct PanelConfig {
    /// Display name of the human moderator, used as the speaker label of
    /// every moderator log entry.
    pub moderator_name: String,
    /// Model tag every panelist talks to by default.
    pub model: String,
    /// Base URL of the inference endpoint.
    pub base_url: String,
    /// Explicit display-name pool for panelists; `None` uses the built-in
    /// pool from [`default_name_pool`](crate::name_allocator::default_name_pool).
    pub name_pool: Option<Vec<String>>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            moderator_name: "Moderator".to_string(),
            model: "dolphin-llama3".to_string(),
            base_url: "http://localhost:11434".to_string(),
            name_pool: None,
        }
    }
}

impl PanelConfig {
    /// Build an [`OllamaClient`](crate::clients::ollama::OllamaClient) for
    /// the configured model and endpoint.
    pub fn client(&self) -> crate::clients::ollama::OllamaClient {
        crate::clients::ollama::OllamaClient::new_with_base_url(&self.model, &self.base_url)
    }

    /// Check the setup parameters before a session is built.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.moderator_name.trim().is_empty() {
            return Err(ConfigurationError::BlankModeratorName);
        }
        if let Some(pool) = &self.name_pool {
            if pool.is_empty() {
                return Err(ConfigurationError::EmptyNamePool);
            }
        }
        Ok(())
    }
}
