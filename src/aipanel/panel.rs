//! Round-robin panel orchestration.
//!
//! A [`Panel`] owns the fixed, ordered collection of [`Agent`]s and runs one
//! full round at a time: the moderator's message is committed to every
//! panelist, then each panelist replies in turn order, each reply is
//! broadcast into every other panelist's private history with the correct
//! role attribution, and the ordered list of display events is returned.
//!
//! Turn order equals creation order and never changes; no panelist is
//! skipped or reinserted mid-round. Generation is strictly sequential:
//! panelist i's preview input is the previous panelist's formatted reply, so no two
//! inference calls ever run concurrently. `round` takes `&mut self`, which
//! also makes overlapping rounds on one panel unrepresentable.
//!
//! Each reply after the round's first is prefixed with the name of whoever
//! spoke immediately before it (`"Alice, ..."`). That conversational-address
//! convention depends on round-level ordering state, so it lives here rather
//! than in the agents.

use crate::agent::Agent;
use crate::client_wrapper::{InferenceError, Role};
use crate::config::{ConfigurationError, MAX_PANELISTS, MIN_PANELISTS};
use crate::conversation_log::LogEntry;
use std::error::Error;
use std::fmt;

/// One display event produced by a round: `(speaker label, text)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundEntry {
    pub speaker: String,
    pub text: String,
}

impl From<RoundEntry> for LogEntry {
    fn from(entry: RoundEntry) -> Self {
        LogEntry::new(entry.speaker, entry.text)
    }
}

/// A round aborted because one panelist's inference call failed.
///
/// Panelists before `agent_index` have already committed their replies (the
/// partial round stands); the failed panelist and everyone after it were not
/// advanced. Retrying is the caller's call: re-invoke the round, or just the
/// failed turn with the same pending input.
#[derive(Debug)]
pub struct RoundError {
    /// Display name of the panelist whose turn failed.
    pub agent_name: String,
    /// Zero-based turn index of the failed panelist.
    pub agent_index: usize,
    /// Display events produced before the failure, in turn order.
    pub partial: Vec<RoundEntry>,
    /// The underlying inference failure.
    pub source: InferenceError,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "round aborted at panelist '{}' (turn {}) after {} replies: {}",
            self.agent_name,
            self.agent_index,
            self.partial.len(),
            self.source
        )
    }
}

impl Error for RoundError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// The fixed ordered collection of panelists and the round orchestrator.
pub struct Panel {
    moderator_name: String,
    agents: Vec<Agent>,
}

impl Panel {
    /// Create a panel from a moderator label and panelists in turn order.
    ///
    /// Panel size is bounded to `[MIN_PANELISTS, MAX_PANELISTS]` by policy;
    /// anything outside that range is a fatal setup error.
    pub fn new(
        moderator_name: impl Into<String>,
        agents: Vec<Agent>,
    ) -> Result<Self, ConfigurationError> {
        if agents.len() < MIN_PANELISTS || agents.len() > MAX_PANELISTS {
            return Err(ConfigurationError::PanelSizeOutOfRange(agents.len()));
        }
        Ok(Panel {
            moderator_name: moderator_name.into(),
            agents,
        })
    }

    /// Display label used for the moderator's log entries.
    pub fn moderator_name(&self) -> &str {
        &self.moderator_name
    }

    /// Panelists in turn order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Number of panelists.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Run one full round of the panel discussion.
    ///
    /// The moderator's message is committed to every panelist as a user
    /// entry, then each panelist takes its turn: preview a reply to the
    /// pending input, prefix it with the previous speaker's name (except for
    /// the round's first speaker), commit it to the speaker as an assistant
    /// entry, and broadcast it to every other panelist as a user entry. The
    /// returned list holds one `(name, formatted)` event per panelist, in
    /// turn order.
    ///
    /// The moderator's own display event is not part of the returned list;
    /// the session layer emits it as the round's first log entry.
    ///
    /// On inference failure the round aborts at the failing panelist and the
    /// error carries whatever partial output was already produced.
    pub async fn round(&mut self, moderator_text: &str) -> Result<Vec<RoundEntry>, RoundError> {
        log::info!(
            "starting round with {} panelists, moderator '{}'",
            self.agents.len(),
            self.moderator_name
        );

        // Every panelist hears the moderator first, attributed to the human.
        for agent in self.agents.iter_mut() {
            agent.commit(moderator_text, Role::User);
        }

        let mut output: Vec<RoundEntry> = Vec::with_capacity(self.agents.len());
        let mut pending = moderator_text.to_string();
        let mut last_speaker: Option<String> = None;

        for turn in 0..self.agents.len() {
            let raw = match self.agents[turn].generate(&pending).await {
                Ok(raw) => raw,
                Err(source) => {
                    let agent_name = self.agents[turn].name().to_string();
                    log::error!(
                        "round aborted: panelist '{}' (turn {}) failed: {}",
                        agent_name,
                        turn,
                        source
                    );
                    return Err(RoundError {
                        agent_name,
                        agent_index: turn,
                        partial: output,
                        source,
                    });
                }
            };

            // Conversational address: reply to whoever spoke last.
            let formatted = match &last_speaker {
                Some(previous) => format!("{}, {}", previous, raw),
                None => raw,
            };

            // The speaker remembers its reply verbatim as spoken; everyone
            // else hears it as a user entry, keeping the two-role illusion.
            self.agents[turn].commit(&formatted, Role::Assistant);
            for (idx, other) in self.agents.iter_mut().enumerate() {
                if idx != turn {
                    other.commit(&formatted, Role::User);
                }
            }

            let speaker = self.agents[turn].name().to_string();
            log::debug!("panelist '{}' replied ({} chars)", speaker, formatted.len());

            output.push(RoundEntry {
                speaker: speaker.clone(),
                text: formatted.clone(),
            });
            last_speaker = Some(speaker);
            pending = formatted;
        }

        Ok(output)
    }
}
