//! UI components.
//!
//! - `MessageCard`: a chat message with a click-to-expand body
//! - `ui`: shared primitives (Avatar, Surface)

pub mod message_card;
pub mod ui;

pub use message_card::MessageCard;
