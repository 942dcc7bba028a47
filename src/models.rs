//! Data records displayed by the UI.

use serde::{Deserialize, Serialize};

/// A single chat message: who said it and what they said.
///
/// Messages are plain values. The UI never mutates one after it is built;
/// two messages with the same author and body are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub author: String,
    pub body: String,
}

impl Message {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_compare_by_value() {
        let a = Message::new("sarah", "hello there");
        let b = Message {
            author: "sarah".to_string(),
            body: "hello there".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(a, Message::new("sarah", "something else"));
    }
}
