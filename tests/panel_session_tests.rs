use aipanel::client_wrapper::{ClientWrapper, InferenceError, Message, Role};
use aipanel::config::ConfigurationError;
use aipanel::PanelSession;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

// Mock client that replies with a fixed text regardless of the prompt.
struct FixedClient {
    reply: String,
}

impl FixedClient {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
        })
    }
}

#[async_trait]
impl ClientWrapper for FixedClient {
    async fn send_message(&self, _messages: &[Message]) -> Result<Message, InferenceError> {
        Ok(Message::new(Role::Assistant, self.reply.clone()))
    }

    fn model_name(&self) -> &str {
        "fixed-mock"
    }
}

// Mock client that always fails.
struct FailingClient;

#[async_trait]
impl ClientWrapper for FailingClient {
    async fn send_message(&self, _messages: &[Message]) -> Result<Message, InferenceError> {
        Err(InferenceError::Upstream("model unavailable".to_string()))
    }

    fn model_name(&self) -> &str {
        "failing-mock"
    }
}

fn alice_bob_session(reply1: &str, reply2: &str) -> PanelSession {
    PanelSession::builder("Quang")
        .add_panelist_named("Alice", "You are Alice.", FixedClient::new(reply1))
        .add_panelist_named("Bob", "You are Bob.", FixedClient::new(reply2))
        .build()
        .unwrap()
}

#[tokio::test]
async fn end_to_end_two_panelist_round() {
    let mut session = alice_bob_session("autumn, no question", "I prefer summer");

    let replies = session
        .submit("What is the best season?")
        .await
        .unwrap()
        .expect("round should run");

    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].speaker, "Alice");
    assert_eq!(replies[0].text, "autumn, no question");
    assert_eq!(replies[1].speaker, "Bob");
    assert_eq!(replies[1].text, "Alice, I prefer summer");

    // The transcript shows the moderator first, then both panelists.
    let log = session.log();
    assert_eq!(log.len(), 3);
    assert_eq!(log.entries()[0].speaker, "Quang");
    assert_eq!(log.entries()[0].text, "What is the best season?");
    assert_eq!(log.entries()[1].speaker, "Alice");
    assert_eq!(log.entries()[2].speaker, "Bob");
}

#[tokio::test]
async fn blank_input_runs_no_round() {
    let mut session = alice_bob_session("a", "b");

    let skipped = session.submit("   \n\t").await.unwrap();
    assert!(skipped.is_none());
    assert!(session.log().is_empty());
    for agent in session.panel().agents() {
        assert_eq!(agent.history().len(), 1); // persona only
    }
}

#[tokio::test]
async fn input_is_trimmed_before_the_round() {
    let mut session = alice_bob_session("a", "b");
    session.submit("  hello  ").await.unwrap();

    assert_eq!(session.log().entries()[0].text, "hello");
    assert_eq!(session.panel().agents()[0].history()[1].content, "hello");
}

#[tokio::test]
async fn clearing_the_log_does_not_reset_panelist_memory() {
    let mut session = alice_bob_session("a", "b");

    session.submit("round one").await.unwrap();
    let lengths_before: Vec<usize> = session
        .panel()
        .agents()
        .iter()
        .map(|a| a.history().len())
        .collect();

    session.clear_log();
    assert!(session.log().is_empty());

    // Histories are untouched by the clear and keep growing afterwards.
    let lengths_after_clear: Vec<usize> = session
        .panel()
        .agents()
        .iter()
        .map(|a| a.history().len())
        .collect();
    assert_eq!(lengths_before, lengths_after_clear);

    session.submit("round two").await.unwrap();
    for (agent, before) in session.panel().agents().iter().zip(lengths_before) {
        assert!(agent.history().len() > before);
    }
}

#[tokio::test]
async fn failed_round_leaves_partial_transcript() {
    let mut session = PanelSession::builder("Quang")
        .add_panelist_named("Alice", "You are Alice.", FixedClient::new("fine"))
        .add_panelist_named("Bob", "You are Bob.", Arc::new(FailingClient))
        .build()
        .unwrap();

    let err = session.submit("q").await.unwrap_err();
    assert_eq!(err.agent_name, "Bob");
    assert_eq!(err.partial.len(), 1);

    // Moderator entry plus Alice's partial reply are displayed; the caller
    // renders the failure notice from the error.
    assert_eq!(session.log().len(), 2);
    assert_eq!(session.log().entries()[1].speaker, "Alice");
}

#[test]
fn builder_allocates_unique_names_from_the_pool() {
    let session = PanelSession::builder("Quang")
        .with_name_pool(vec!["Ada".to_string(), "Grace".to_string(), "Edsger".to_string()])
        .add_panelist("persona one", FixedClient::new("a"))
        .add_panelist("persona two", FixedClient::new("b"))
        .add_panelist("persona three", FixedClient::new("c"))
        .build()
        .unwrap();

    let names: HashSet<&str> = session.panel().agents().iter().map(|a| a.name()).collect();
    assert_eq!(names.len(), 3);
    for name in &names {
        assert!(["Ada", "Grace", "Edsger"].contains(name));
    }
}

#[test]
fn builder_rejects_bad_setup() {
    let too_small = PanelSession::builder("Quang")
        .add_panelist("persona", FixedClient::new("a"))
        .build();
    assert!(matches!(
        too_small,
        Err(ConfigurationError::PanelSizeOutOfRange(1))
    ));

    let blank_moderator = PanelSession::builder("  ")
        .add_panelist("one", FixedClient::new("a"))
        .add_panelist("two", FixedClient::new("b"))
        .build();
    assert!(matches!(
        blank_moderator,
        Err(ConfigurationError::BlankModeratorName)
    ));

    let empty_pool = PanelSession::builder("Quang")
        .with_name_pool(Vec::new())
        .add_panelist("one", FixedClient::new("a"))
        .add_panelist("two", FixedClient::new("b"))
        .build();
    assert!(matches!(empty_pool, Err(ConfigurationError::EmptyNamePool)));
}

#[test]
fn builder_from_config_applies_setup_parameters() {
    let config = aipanel::PanelConfig {
        moderator_name: "Quang".to_string(),
        name_pool: Some(vec!["Ada".to_string(), "Grace".to_string()]),
        ..aipanel::PanelConfig::default()
    };

    let session = PanelSession::builder_from_config(&config)
        .unwrap()
        .add_panelist("one", FixedClient::new("a"))
        .add_panelist("two", FixedClient::new("b"))
        .build()
        .unwrap();

    assert_eq!(session.moderator_name(), "Quang");
    let names: HashSet<&str> = session.panel().agents().iter().map(|a| a.name()).collect();
    assert_eq!(names, ["Ada", "Grace"].iter().copied().collect());

    // The configured endpoint yields a ready client for real panelists.
    let config = aipanel::PanelConfig::default();
    assert_eq!(config.client().model_name(), "dolphin-llama3");
}

#[tokio::test]
async fn panelists_accumulate_cross_visibility_over_rounds() {
    let mut session = alice_bob_session("alpha", "beta");
    session.submit("first").await.unwrap();
    session.submit("second").await.unwrap();

    // Per round each agent gains: moderator entry + own reply + peer's reply.
    for agent in session.panel().agents() {
        assert_eq!(agent.history().len(), 1 + 2 * 3);
        assert_eq!(agent.history()[0].role, Role::System);
    }

    // Bob's history contains Alice's replies as user entries.
    let bob = &session.panel().agents()[1];
    assert!(bob
        .history()
        .iter()
        .any(|m| m.role == Role::User && m.content == "alpha"));
}
