//! Session layer tying a [`Panel`] to its displayed transcript.
//!
//! A [`PanelSession`] owns the panel and the [`ConversationLog`] the display
//! surface renders. It accepts free-text moderator input, rejects blank
//! input without triggering a round, runs rounds one at a time, and keeps
//! the log in sync, including partial output when a round aborts, so the
//! caller can render partial results plus a failure notice.
//!
//! Sessions are built with [`PanelSession::builder`], which owns a
//! [`NameAllocator`] and hands unique display names to panelists added
//! without one.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aipanel::clients::ollama::{Model, OllamaClient};
//! use aipanel::panel_session::PanelSession;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(OllamaClient::new_with_model_enum(Model::DolphinLlama3));
//!
//! let mut session = PanelSession::builder("Quang")
//!     .add_panelist("You are a cheerful optimist.", client.clone())
//!     .add_panelist("You are a dry skeptic.", client)
//!     .build()?;
//!
//! if let Some(replies) = session.submit("What is the best season?").await? {
//!     for entry in replies {
//!         println!("{}: {}", entry.speaker, entry.text);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::agent::Agent;
use crate::client_wrapper::ClientWrapper;
use crate::config::ConfigurationError;
use crate::conversation_log::{ConversationLog, LogEntry};
use crate::name_allocator::NameAllocator;
use crate::panel::{Panel, RoundEntry, RoundError};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Moderator input was blank after trimming.
///
/// Never surfaced to the transcript: the session swallows it by policy and
/// simply does not run a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "moderator input is blank")
    }
}

impl Error for EmptyInputError {}

/// Trim moderator input, rejecting text that is blank after trimming.
fn validate_input(input: &str) -> Result<&str, EmptyInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(EmptyInputError)
    } else {
        Ok(trimmed)
    }
}

/// A running panel discussion: the panel plus its displayed transcript.
pub struct PanelSession {
    panel: Panel,
    log: ConversationLog,
}

impl PanelSession {
    /// Start building a session moderated under the given display name.
    pub fn builder(moderator_name: impl Into<String>) -> PanelSessionBuilder {
        PanelSessionBuilder {
            moderator_name: moderator_name.into(),
            name_pool: None,
            panelists: Vec::new(),
        }
    }

    /// Start building a session from setup parameters supplied by the input
    /// surface. Validation failures are fatal and surface before any round.
    pub fn builder_from_config(
        config: &crate::config::PanelConfig,
    ) -> Result<PanelSessionBuilder, ConfigurationError> {
        config.validate()?;
        let mut builder = PanelSession::builder(config.moderator_name.trim());
        if let Some(pool) = &config.name_pool {
            builder = builder.with_name_pool(pool.clone());
        }
        Ok(builder)
    }

    /// Wrap an already-constructed panel with an empty transcript.
    pub fn new(panel: Panel) -> Self {
        PanelSession {
            panel,
            log: ConversationLog::new(),
        }
    }

    /// Submit moderator input, running one full round if it is non-blank.
    ///
    /// Blank input (after trimming) is silently ignored: no round runs,
    /// nothing is appended, and `Ok(None)` is returned. Otherwise the
    /// moderator's entry and every panelist reply are appended to the log in
    /// order, and the panelist replies are returned.
    ///
    /// If the round aborts, the moderator entry and the partial replies are
    /// still appended, so the display can show partial results alongside a
    /// failure notice, and the [`RoundError`] is propagated.
    pub async fn submit(&mut self, input: &str) -> Result<Option<Vec<RoundEntry>>, RoundError> {
        let question = match validate_input(input) {
            Ok(question) => question,
            Err(_) => {
                log::debug!("ignoring blank moderator input");
                return Ok(None);
            }
        };

        self.log.push(self.panel.moderator_name(), question);

        match self.panel.round(question).await {
            Ok(entries) => {
                self.log
                    .append(entries.iter().cloned().map(LogEntry::from));
                Ok(Some(entries))
            }
            Err(err) => {
                self.log
                    .append(err.partial.iter().cloned().map(LogEntry::from));
                Err(err)
            }
        }
    }

    /// Empty the displayed transcript. Panelists keep their full memory of
    /// prior rounds; clearing the view is cosmetic, not a conversation reset.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// The displayed transcript.
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// The underlying panel.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Display label of the human moderator.
    pub fn moderator_name(&self) -> &str {
        self.panel.moderator_name()
    }
}

/// Builder for [`PanelSession`]. Setup errors surface at
/// [`build`](PanelSessionBuilder::build), before any round runs.
pub struct PanelSessionBuilder {
    moderator_name: String,
    name_pool: Option<Vec<String>>,
    panelists: Vec<(Option<String>, String, Arc<dyn ClientWrapper>)>,
}

impl PanelSessionBuilder {
    /// Replace the built-in display-name pool with an explicit one.
    pub fn with_name_pool(mut self, pool: Vec<String>) -> Self {
        self.name_pool = Some(pool);
        self
    }

    /// Add a panelist whose display name is drawn from the name pool.
    pub fn add_panelist(
        mut self,
        description: impl Into<String>,
        client: Arc<dyn ClientWrapper>,
    ) -> Self {
        self.panelists.push((None, description.into(), client));
        self
    }

    /// Add a panelist with an explicit display name.
    pub fn add_panelist_named(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        client: Arc<dyn ClientWrapper>,
    ) -> Self {
        self.panelists
            .push((Some(name.into()), description.into(), client));
        self
    }

    /// Construct the session, validating every setup parameter.
    ///
    /// Fails fatally on a blank moderator name, an empty explicit name pool,
    /// or a panel size outside policy bounds.
    pub fn build(self) -> Result<PanelSession, ConfigurationError> {
        if self.moderator_name.trim().is_empty() {
            return Err(ConfigurationError::BlankModeratorName);
        }

        let mut allocator = match self.name_pool {
            Some(pool) => NameAllocator::new(pool)?,
            None => NameAllocator::with_default_pool(),
        };

        let agents: Vec<Agent> = self
            .panelists
            .into_iter()
            .map(|(name, description, client)| {
                let name = name.unwrap_or_else(|| allocator.allocate());
                Agent::new(name, description, client)
            })
            .collect();

        let panel = Panel::new(self.moderator_name, agents)?;
        log::info!(
            "panel session ready: {} panelists, moderator '{}'",
            panel.len(),
            panel.moderator_name()
        );
        Ok(PanelSession::new(panel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(validate_input("   "), Err(EmptyInputError));
        assert_eq!(validate_input("\n\t"), Err(EmptyInputError));
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(validate_input("  hello  "), Ok("hello"));
    }
}
