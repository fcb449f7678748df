//! Chat Session
//!
//! Ordered, append-only list of chat turns for the chatbot view.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Bot turn shown when the service cannot be reached
pub const ERROR_REPLY: &str = "⚠️ Error contacting server";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    /// Anything that is not the user is shown as the bot
    #[serde(other)]
    Bot,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Bot, text: text.into() }
    }
}

/// One turn as shown in the conversation
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    /// Unique within the session; unchanged when history is prepended
    pub id: usize,
    pub entry: ChatEntry,
    /// Produced in this session rather than loaded from history
    pub live: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    turns: Vec<ChatTurn>,
    next_id: usize,
    in_flight: usize,
}

impl ChatSession {
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// True while at least one reply is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    fn turn(&mut self, entry: ChatEntry, live: bool) -> ChatTurn {
        let id = self.next_id;
        self.next_id += 1;
        ChatTurn { id, entry, live }
    }

    /// Put stored history in front of the turns typed so far
    pub fn seed(&mut self, history: Vec<ChatEntry>) {
        let seeded: Vec<_> = history.into_iter().map(|entry| self.turn(entry, false)).collect();
        self.turns.splice(0..0, seeded);
    }

    /// Record a user turn; returns the prompt to send, or `None` for blank input
    pub fn begin(&mut self, text: &str) -> Option<String> {
        let prompt = text.trim();
        if prompt.is_empty() {
            return None;
        }

        let turn = self.turn(ChatEntry::user(prompt), true);
        self.turns.push(turn);
        self.in_flight += 1;
        Some(prompt.to_string())
    }

    /// Record the outcome of one request started with `begin`
    pub fn finish(&mut self, reply: Result<String, ApiError>) {
        let text = match reply {
            Ok(text) => text,
            Err(_) => ERROR_REPLY.to_string(),
        };
        let turn = self.turn(ChatEntry::bot(text), true);
        self.turns.push(turn);
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(session: &ChatSession) -> Vec<ChatEntry> {
        session.turns().iter().map(|t| t.entry.clone()).collect()
    }

    #[test]
    fn test_submit_appends_user_then_bot() {
        let mut session = ChatSession::default();

        let prompt = session.begin("  Is it raining in Jurong?\n");
        assert_eq!(prompt.as_deref(), Some("Is it raining in Jurong?"));
        assert_eq!(entries(&session), vec![ChatEntry::user("Is it raining in Jurong?")]);
        assert!(session.is_loading());

        session.finish(Ok("Light showers.".to_string()));
        let entries = entries(&session);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], ChatEntry::bot("Light showers."));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_failure_appends_fixed_error_turn() {
        let mut session = ChatSession::default();
        session.begin("hello");
        session.finish(Err(ApiError::Status { status: 502, message: "Bad Gateway".to_string() }));

        assert_eq!(entries(&session)[1], ChatEntry::bot(ERROR_REPLY));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::default();
        assert_eq!(session.begin("   \n\t"), None);
        assert!(session.is_empty());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_overlapping_submissions_keep_every_turn() {
        let mut session = ChatSession::default();
        session.begin("first");
        session.begin("second");
        session.finish(Ok("reply one".to_string()));
        assert!(session.is_loading());
        session.finish(Err(ApiError::Network("offline".to_string())));

        let roles: Vec<_> = session.turns().iter().map(|t| t.entry.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::User, ChatRole::Bot, ChatRole::Bot]);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_seed_goes_before_live_turns() {
        let mut session = ChatSession::default();
        session.begin("new question");

        session.seed(vec![ChatEntry::user("old"), ChatEntry::bot("old answer")]);
        let entries = entries(&session);
        assert_eq!(entries[0], ChatEntry::user("old"));
        assert_eq!(entries[2], ChatEntry::user("new question"));

        let live: Vec<_> = session.turns().iter().map(|t| t.live).collect();
        assert_eq!(live, vec![false, false, true]);
    }

    #[test]
    fn test_late_history_keeps_live_turn_ids() {
        let mut session = ChatSession::default();
        session.begin("question");
        session.finish(Ok("answer".to_string()));
        let before: Vec<_> = session.turns().iter().map(|t| t.id).collect();

        session.seed(vec![ChatEntry::user("old"), ChatEntry::bot("old answer")]);
        let after: Vec<_> = session.turns()[2..].iter().map(|t| t.id).collect();
        assert_eq!(before, after);

        let mut ids: Vec<_> = session.turns().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_role_wire_format() {
        let entries: Vec<ChatEntry> = serde_json::from_str(
            r#"[{"role": "user", "text": "hi"}, {"role": "bot", "text": "hello"}, {"role": "model", "text": "?"}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].role, ChatRole::User);
        assert_eq!(entries[1].role, ChatRole::Bot);
        assert_eq!(entries[2].role, ChatRole::Bot);
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
    }
}
