//! Inbound update model.
//!
//! These records mirror the JSON the platform delivers through `getUpdates`
//! or a webhook. Only the fields the framework routes on are modeled; unknown
//! fields are ignored during deserialization.
//!
//! # Example
//!
//! ```rust
//! use tidings_core::Update;
//!
//! let update: Update = serde_json::from_str(r#"{
//!     "update_id": 10,
//!     "callback_query": {
//!         "id": "534241",
//!         "from": { "id": 7, "is_bot": false, "first_name": "Ada" },
//!         "chat_instance": "-42",
//!         "data": "vote up"
//!     }
//! }"#).unwrap();
//!
//! let query = update.callback_query.as_ref().unwrap();
//! assert_eq!(query.command(), "vote");
//! ```

use serde::{Deserialize, Serialize};

/// One inbound event from the platform's update stream.
///
/// At most one of the optional payloads is set on a real update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// Monotonically increasing identifier assigned by the platform.
    pub update_id: i64,

    /// A new incoming message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    /// A new version of a message that was edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_message: Option<Message>,

    /// A press on an inline keyboard button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
}

impl Update {
    /// Creates an update carrying no payload.
    pub fn new(update_id: i64) -> Self {
        Self {
            update_id,
            message: None,
            edited_message: None,
            callback_query: None,
        }
    }

    /// Attaches a callback query to this update.
    pub fn with_callback_query(mut self, query: CallbackQuery) -> Self {
        self.callback_query = Some(query);
        self
    }

    /// Attaches a message to this update.
    pub fn with_message(mut self, message: Message) -> Self {
        self.message = Some(message);
        self
    }

    /// Returns a short name for the payload kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        if self.callback_query.is_some() {
            "callback_query"
        } else if self.message.is_some() {
            "message"
        } else if self.edited_message.is_some() {
            "edited_message"
        } else {
            "unknown"
        }
    }
}

/// An incoming callback query from an inline keyboard button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    /// Unique identifier, echoed back in `answerCallbackQuery`.
    pub id: String,

    /// The user who pressed the button.
    pub from: User,

    /// The message the button was attached to, if it is still available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    /// Identifier of the inline message the button was attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,

    /// Global identifier of the chat the message was sent in.
    #[serde(default)]
    pub chat_instance: String,

    /// Payload associated with the button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Short name of a game to be returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

impl CallbackQuery {
    /// Creates a callback query without payload data.
    pub fn new(id: impl Into<String>, from: User) -> Self {
        Self {
            id: id.into(),
            from,
            message: None,
            inline_message_id: None,
            chat_instance: String::new(),
            data: None,
            game_short_name: None,
        }
    }

    /// Sets the payload data.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Returns the first space-delimited token of the payload.
    ///
    /// Absent or empty data yields `""`.
    pub fn command(&self) -> &str {
        self.data
            .as_deref()
            .unwrap_or_default()
            .split(' ')
            .next()
            .unwrap_or_default()
    }

    /// Returns the tokens following the command.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.data.as_deref().unwrap_or_default().split(' ').skip(1)
    }
}

/// A platform user or bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl User {
    /// Creates a human user with only the required fields.
    pub fn new(id: i64, first_name: impl Into<String>) -> Self {
        Self {
            id,
            is_bot: false,
            first_name: first_name.into(),
            last_name: None,
            username: None,
            language_code: None,
        }
    }
}

/// A chat a message belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// One of `private`, `group`, `supergroup` or `channel`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    /// Unix time the message was sent.
    #[serde(default)]
    pub date: i64,
    pub chat: Chat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(data: Option<&str>) -> CallbackQuery {
        let q = CallbackQuery::new("1", User::new(7, "Ada"));
        match data {
            Some(d) => q.with_data(d),
            None => q,
        }
    }

    #[test]
    fn test_command_is_first_token() {
        assert_eq!(query(Some("foo bar baz")).command(), "foo");
        assert_eq!(query(Some("foobar")).command(), "foobar");
    }

    #[test]
    fn test_command_of_missing_or_empty_data() {
        assert_eq!(query(None).command(), "");
        assert_eq!(query(Some("")).command(), "");
        assert_eq!(query(Some(" leading")).command(), "");
    }

    #[test]
    fn test_args() {
        let q = query(Some("page 2 next"));
        assert_eq!(q.args().collect::<Vec<_>>(), vec!["2", "next"]);
        assert_eq!(query(None).args().count(), 0);
    }

    #[test]
    fn test_deserialize_callback_update() {
        let raw = r#"{
            "update_id": 881,
            "callback_query": {
                "id": "534241",
                "from": { "id": 99, "is_bot": false, "first_name": "Grace", "username": "gh" },
                "message": {
                    "message_id": 5,
                    "date": 1700000000,
                    "chat": { "id": -100, "type": "supergroup", "title": "ops" },
                    "text": "pick one"
                },
                "chat_instance": "-8812",
                "data": "yeheeee",
                "some_future_field": true
            }
        }"#;

        let update: Update = serde_json::from_str(raw).unwrap();
        assert_eq!(update.update_id, 881);
        assert_eq!(update.kind(), "callback_query");

        let q = update.callback_query.unwrap();
        assert_eq!(q.id, "534241");
        assert_eq!(q.from.username.as_deref(), Some("gh"));
        assert_eq!(q.data.as_deref(), Some("yeheeee"));
        assert_eq!(q.message.unwrap().chat.kind, "supergroup");
    }

    #[test]
    fn test_message_update_has_no_callback_query() {
        let raw = r#"{
            "update_id": 3,
            "message": {
                "message_id": 1,
                "date": 0,
                "chat": { "id": 7, "type": "private" },
                "text": "/start"
            }
        }"#;

        let update: Update = serde_json::from_str(raw).unwrap();
        assert!(update.callback_query.is_none());
        assert_eq!(update.kind(), "message");
    }
}
