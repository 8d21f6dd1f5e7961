//! Payload types for the meeting room and its chat side-channel.

use serde::{Deserialize, Serialize};

/// Join credentials issued by the backend for one room.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeetingGrant {
    pub room: String,
    pub token: String,
    /// Overrides the configured meeting server when present.
    pub server_url: Option<String>,
}

/// One chat message carried over the meeting data channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub body: String,
    pub sent_at_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_round_trips() {
        let message = ChatMessage {
            sender: "grace".to_string(),
            body: "Can you hear me?".to_string(),
            sent_at_ms: 1_700_000_000_000,
        };

        let json = serde_json::to_string(&message).expect("Failed to serialize");
        let parsed: ChatMessage = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(parsed, message);
    }
}
