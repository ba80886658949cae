use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub content: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            is_bot: false,
            timestamp,
        }
    }

    pub fn bot(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            is_bot: true,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    #[default]
    Active,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub conversation_id: String,
    pub user_id: String,
    messages: Vec<ChatMessage>,
    pub last_activity: DateTime<Utc>,
    #[serde(default)]
    pub status: ConversationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    messages_changed: bool,
}

impl Document for Conversation {
    const COLLECTION: &'static str = "conversations";

    fn id(&self) -> &str {
        &self.conversation_id
    }
}

impl Conversation {
    /// Stored field holding the message list.
    pub const MESSAGES_FIELD: &'static str = "messages";

    /// Fields merged into the stored document when messages are appended in
    /// place. An append always counts as activity.
    pub fn activity_update(now: DateTime<Utc>) -> Result<Map<String, Value>, serde_json::Error> {
        let mut set = Map::new();
        set.insert("lastActivity".to_string(), serde_json::to_value(now)?);
        Ok(set)
    }

    pub fn new(conversation_id: impl Into<String>, user_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            user_id: user_id.into(),
            messages: Vec::new(),
            last_activity: now,
            status: ConversationStatus::Active,
            created_at: now,
            messages_changed: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.messages_changed = true;
    }

    /// Must run before every write. `last_activity` only moves when messages
    /// were appended since the previous save.
    pub fn prepare_save(&mut self, now: DateTime<Utc>) {
        if self.messages_changed {
            self.last_activity = now;
            self.messages_changed = false;
        }
    }

    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            conversation_id: self.conversation_id.clone(),
            user_id: self.user_id.clone(),
            message_count: self.messages.len(),
            last_message: self.messages.last().map(|m| preview(&m.content)),
            last_activity: self.last_activity,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub conversation_id: String,
    pub user_id: String,
    pub message_count: usize,
    pub last_message: Option<String>,
    pub last_activity: DateTime<Utc>,
    pub status: ConversationStatus,
}

const PREVIEW_CHARS: usize = 80;

fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `conv_<millis>_<9 base-36 chars>`
pub fn generate_conversation_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("conv_{}_{}", now.timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn last_activity_moves_only_when_messages_change() {
        let t0 = Utc::now();
        let mut conv = Conversation::new("conv_1", "anonymous", t0);

        conv.prepare_save(t0 + Duration::seconds(5));
        assert_eq!(conv.last_activity, t0);

        conv.push_message(ChatMessage::user("hello", t0));
        let t1 = t0 + Duration::seconds(10);
        conv.prepare_save(t1);
        assert_eq!(conv.last_activity, t1);

        conv.prepare_save(t1 + Duration::seconds(10));
        assert_eq!(conv.last_activity, t1);
    }

    #[test]
    fn activity_update_targets_stored_field_names() {
        let t0 = Utc::now();
        let conv = Conversation::new("conv_1", "anonymous", t0);
        let stored = serde_json::to_value(&conv).unwrap();
        assert!(stored.get(Conversation::MESSAGES_FIELD).is_some_and(Value::is_array));

        let t1 = t0 + Duration::seconds(3);
        let set = Conversation::activity_update(t1).unwrap();
        for key in set.keys() {
            assert!(stored.get(key).is_some(), "{key}");
        }

        let mut merged = stored.as_object().cloned().unwrap();
        merged.extend(set);
        let reloaded: Conversation = serde_json::from_value(Value::Object(merged)).unwrap();
        assert_eq!(reloaded.last_activity, t1);
        assert_eq!(reloaded.created_at, t0);
    }

    #[test]
    fn reloaded_conversation_is_clean() {
        let t0 = Utc::now();
        let mut conv = Conversation::new("conv_1", "anonymous", t0);
        conv.push_message(ChatMessage::user("hello", t0));
        let json = serde_json::to_value(&conv).unwrap();
        assert!(json.get("messagesChanged").is_none());

        let mut reloaded: Conversation = serde_json::from_value(json).unwrap();
        reloaded.prepare_save(t0 + Duration::seconds(30));
        assert_eq!(reloaded.last_activity, t0);
        assert_eq!(reloaded.messages().len(), 1);
    }

    #[test]
    fn conversation_ids_have_expected_shape() {
        let now = Utc::now();
        let id = generate_conversation_id(now);
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "conv");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn summary_truncates_long_messages() {
        let now = Utc::now();
        let mut conv = Conversation::new("conv_2", "anonymous", now);
        conv.push_message(ChatMessage::bot("x".repeat(200), now));
        let summary = conv.summary();
        assert_eq!(summary.message_count, 1);
        assert_eq!(summary.last_message.as_deref().map(str::len), Some(PREVIEW_CHARS + 3));
    }
}
