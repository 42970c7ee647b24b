//! Panelist agents.
//!
//! This module provides the core [`Agent`] struct: one simulated panelist
//! with an immutable identity, a persona description, and a private ordered
//! conversation history that grows monotonically for the lifetime of the
//! session.
//!
//! The history is the agent's entire memory of the multi-party conversation.
//! Entry 0 is always the system persona entry; everything after it is either
//! something the agent said itself (committed as [`Role::Assistant`]) or
//! something it heard from the moderator or a fellow panelist (committed as
//! [`Role::User`]). The underlying inference service only ever sees a
//! two-role user/assistant exchange, yet each agent keeps a faithful
//! transcript of everything said around the table.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aipanel::agent::Agent;
//! use aipanel::client_wrapper::Role;
//! use aipanel::clients::ollama::{Model, OllamaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(OllamaClient::new_with_model_enum(Model::DolphinLlama3));
//! let mut agent = Agent::new("Alice", "You are a cheerful optimist.", client);
//!
//! // Preview a reply without touching the agent's memory...
//! let reply = agent.generate("What is the best season?").await?;
//! // ...then decide what the agent remembers.
//! agent.commit(&reply, Role::Assistant);
//! # Ok(())
//! # }
//! ```

use crate::client_wrapper::{ClientWrapper, InferenceError, Message, Role};
use std::sync::Arc;

/// One panelist: an identity, a persona, and a private conversation history.
pub struct Agent {
    /// Unique display name, immutable after creation.
    name: String,
    /// Persona text, immutable, used only to seed the history.
    description: String,
    /// The inference client this agent speaks through.
    client: Arc<dyn ClientWrapper>,
    /// Ordered, append-only conversation memory. `history[0]` is always the
    /// system persona entry.
    history: Vec<Message>,
}

impl Agent {
    /// Create a panelist with a display name and a persona description.
    ///
    /// The history is seeded with a single system entry built from the
    /// persona; that entry stays at index 0 for the agent's lifetime.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        client: Arc<dyn ClientWrapper>,
    ) -> Self {
        let description = description.into();
        let persona = Message::new(Role::System, description.clone());
        Agent {
            name: name.into(),
            description,
            client,
            history: vec![persona],
        }
    }

    /// The panelist's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The persona description this agent was created with.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The agent's private conversation history, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Preview this agent's reply to `input` without mutating its memory.
    ///
    /// Builds a transient prompt from the current history plus one ephemeral
    /// user entry holding `input`, and sends it to the inference client.
    /// Takes `&self`: a failed or discarded preview leaves no trace in the
    /// history, so callers that skip [`commit`](Agent::commit) after an error
    /// never end up with a phantom response.
    pub async fn generate(&self, input: &str) -> Result<String, InferenceError> {
        let mut prompt = self.history.clone();
        prompt.push(Message::new(Role::User, input));

        log::debug!(
            "agent '{}' generating via {} ({} prompt messages)",
            self.name,
            self.client.model_name(),
            prompt.len()
        );

        let reply = self.client.send_message(&prompt).await?;
        Ok(reply.content)
    }

    /// Append `(role, text)` to the agent's history.
    ///
    /// `Role::Assistant` records what this agent said; `Role::User` records
    /// what someone else said, attributed as if the user spoke it.
    pub fn commit(&mut self, text: &str, role: Role) {
        self.history.push(Message::new(role, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoClient;

    #[async_trait]
    impl ClientWrapper for EchoClient {
        async fn send_message(&self, messages: &[Message]) -> Result<Message, InferenceError> {
            let last = messages.last().map(|m| m.content.clone()).unwrap_or_default();
            Ok(Message::new(Role::Assistant, format!("echo: {}", last)))
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn history_is_seeded_with_the_persona() {
        let agent = Agent::new("Alice", "You are terse.", Arc::new(EchoClient));
        assert_eq!(agent.history().len(), 1);
        assert_eq!(agent.history()[0].role, Role::System);
        assert_eq!(agent.history()[0].content, "You are terse.");
    }

    #[tokio::test]
    async fn generate_does_not_mutate_history() {
        let agent = Agent::new("Alice", "You are terse.", Arc::new(EchoClient));
        let reply = agent.generate("hello").await.unwrap();
        assert_eq!(reply, "echo: hello");
        assert_eq!(agent.history().len(), 1);
    }

    #[tokio::test]
    async fn commit_appends_in_order() {
        let mut agent = Agent::new("Alice", "You are terse.", Arc::new(EchoClient));
        agent.commit("first", Role::User);
        agent.commit("second", Role::Assistant);

        assert_eq!(agent.history().len(), 3);
        assert_eq!(agent.history()[0].role, Role::System);
        assert_eq!(agent.history()[1].content, "first");
        assert_eq!(agent.history()[1].role, Role::User);
        assert_eq!(agent.history()[2].content, "second");
        assert_eq!(agent.history()[2].role, Role::Assistant);
    }
}
