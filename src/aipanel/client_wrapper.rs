use async_trait::async_trait;
use std::error::Error;
use std::fmt;
use std::time::Duration;

/// A ClientWrapper is a wrapper around a specific LLM inference service.
/// It provides a common interface to interact with the model.
/// It does not keep track of the conversation, for that we use an Agent
/// which keeps track of its own history and uses a ClientWrapper to talk
/// to the model.
// src/client_wrapper

/// Represents the possible roles for a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    System,
    // set by the developer to steer the model's responses
    User,
    // a message sent by a human user (or attributed to one)
    Assistant, // content generated by the model as a response to a user message
}

impl Role {
    /// Wire-format name of the role as chat APIs expect it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Represents a generic message to be sent to an LLM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The role associated with the message.
    pub role: Role,
    /// The actual content of the message.
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Message {
            role,
            content: content.into(),
        }
    }
}

/// Error types for inference calls.
///
/// Every failure mode of the upstream model surfaces as one of these
/// variants; the round orchestrator aborts the current round at the failing
/// agent and reports this error to the caller. Retrying is the caller's
/// responsibility.
#[derive(Debug)]
pub enum InferenceError {
    /// The call did not complete within the configured bound.
    Timeout(Duration),
    /// Network or model failure reported by the upstream service.
    Upstream(String),
    /// The upstream response could not be interpreted as a chat reply.
    MalformedResponse(String),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceError::Timeout(limit) => {
                write!(f, "inference call exceeded {}s", limit.as_secs())
            }
            InferenceError::Upstream(msg) => write!(f, "upstream inference failure: {}", msg),
            InferenceError::MalformedResponse(msg) => {
                write!(f, "malformed inference response: {}", msg)
            }
        }
    }
}

impl Error for InferenceError {}

/// Trait defining the interface to interact with an LLM inference service.
///
/// The messages passed to [`send_message`](ClientWrapper::send_message) are
/// exactly an agent's private history plus one ephemeral trailing user entry;
/// implementations must not retain them.
#[async_trait]
pub trait ClientWrapper: Send + Sync {
    /// Send the conversation to the model and get a single reply back.
    /// - `messages`: the full ordered prompt to send in the request.
    async fn send_message(&self, messages: &[Message]) -> Result<Message, InferenceError>;

    /// Name of the underlying model, for logging and diagnostics.
    fn model_name(&self) -> &str;
}
