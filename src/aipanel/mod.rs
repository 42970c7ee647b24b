// src/aipanel/mod.rs

pub mod agent;
pub mod client_wrapper;
pub mod clients;
pub mod config;
pub mod conversation_log;
pub mod name_allocator;
pub mod panel;
pub mod panel_session;

// Let's explicitly export the session types so we don't have to access them
// via aipanel::panel_session::PanelSession and instead as aipanel::PanelSession
pub use panel::Panel;
pub use panel_session::PanelSession;
