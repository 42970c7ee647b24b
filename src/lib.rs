//! # aipanel
//!
//! aipanel is a Rust toolkit for orchestrating moderated panel discussions
//! between a human moderator and multiple LLM panelists.
//!
//! Each panelist is an independent [`Agent`] with a persona and a private,
//! append-only conversation history. A [`Panel`] runs one round at a time:
//! the moderator's question is committed to every panelist, then the
//! panelists reply in fixed turn order, each reply addressed to the previous
//! speaker and broadcast into every other panelist's memory. A
//! [`PanelSession`] wraps the panel together with the display-facing
//! [`ConversationLog`](conversation_log::ConversationLog).
//!
//! ## Core Concepts
//!
//! ### Agents: Panelists with Private Memory
//!
//! An [`Agent`] owns its display name, its persona, and everything it has
//! heard or said. Previewing a reply ([`Agent::generate`]) never mutates the
//! history; recording one ([`Agent::commit`]) is a separate, explicit step.
//! That split is what lets the orchestrator abort a round on inference
//! failure without leaving phantom responses behind.
//!
//! ### Panels: Round-Robin Turn-Taking
//!
//! The [`Panel`] holds panelists in fixed turn order and runs strictly
//! sequential rounds. Every reply is propagated to every other panelist as a
//! user-role entry, so each agent keeps a faithful transcript of the whole
//! table while the inference service only ever sees a two-role exchange.
//!
//! ### Sessions: Input, Transcript, and Setup
//!
//! [`PanelSession`] validates moderator input (blank input is ignored),
//! keeps the displayed transcript in sync round by round, and is built
//! through a builder that draws unique panelist names from a
//! [`NameAllocator`](name_allocator::NameAllocator).
//!
//! ### Provider Abstraction
//!
//! The inference call is behind the [`ClientWrapper`] trait: messages in,
//! one message out, may fail or be slow. The crate ships an
//! [`OllamaClient`](clients::ollama::OllamaClient) for locally hosted
//! models; anything that can answer a chat prompt can sit behind the trait.
//!
//! ## Getting Started
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aipanel::clients::ollama::{Model, OllamaClient};
//! use aipanel::PanelSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     aipanel::init_logger();
//!
//!     let client = Arc::new(OllamaClient::new_with_model_enum(Model::DolphinLlama3));
//!
//!     let mut session = PanelSession::builder("Quang")
//!         .add_panelist("You are a cheerful optimist on a talk-show panel.", client.clone())
//!         .add_panelist("You are a dry skeptic on a talk-show panel.", client)
//!         .build()?;
//!
//!     if let Some(replies) = session.submit("What is the best season?").await? {
//!         for entry in replies {
//!             println!("{}: {}", entry.speaker, entry.text);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialise the global [`env_logger`] subscriber exactly once.
///
/// The helper is intentionally lightweight so that applications embedding
/// aipanel can opt-in to simple `RUST_LOG` driven diagnostics without having
/// to choose a specific logging backend upfront.
///
/// ```rust
/// aipanel::init_logger();
/// log::info!("Logger is ready");
/// ```
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        env_logger::init();
    });
}

// Import the top-level `aipanel` module.
pub mod aipanel;

// Re-exporting key items for easier external access.
pub use crate::aipanel::agent;
pub use crate::aipanel::agent::Agent;
pub use crate::aipanel::client_wrapper;
pub use crate::aipanel::client_wrapper::{ClientWrapper, InferenceError, Message, Role};
pub use crate::aipanel::clients;
pub use crate::aipanel::config;
pub use crate::aipanel::config::{ConfigurationError, PanelConfig, MAX_PANELISTS, MIN_PANELISTS};
pub use crate::aipanel::conversation_log;
pub use crate::aipanel::conversation_log::{ConversationLog, LogEntry};
pub use crate::aipanel::name_allocator;
pub use crate::aipanel::name_allocator::NameAllocator;
pub use crate::aipanel::panel;
pub use crate::aipanel::panel::{Panel, RoundEntry, RoundError};
pub use crate::aipanel::panel_session;
pub use crate::aipanel::panel_session::{EmptyInputError, PanelSession, PanelSessionBuilder};
