/// State management module
///
/// This module handles all survey state, including:
/// - Shared data structures (data.rs)
/// - The session state machine and response log (session.rs)
/// - Form drafts and their defaults (forms.rs)

pub mod data;
pub mod forms;
pub mod session;

pub use session::{Session, Stage};
