//! In-memory per-chat state. Nothing here survives a restart.
//!
//! Each chat owns its displayed state, so the store is a single map behind
//! one async mutex. The per-task generation counters implement
//! latest-request-wins: a fetch that resolves after a newer one has begun is
//! discarded instead of overwriting newer state.

use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::{ChatId, MessageId};
use tokio::sync::Mutex;

use crate::types::{ChatMessage, Language, QueryContext};

pub const DEFAULT_DISTRICT: &str = "Mandya";
pub const DEFAULT_CROP: &str = "Sugarcane";
/// Used until the farmer shares a location.
pub const DEFAULT_COORDS: (f64, f64) = (12.97, 77.59);

/// Transcript turns kept per chat. Older turns are dropped from the front.
const HISTORY_LIMIT: usize = 40;

/// Query keys with refreshable, raceable results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Insight,
    Mandi,
    Weather,
}

#[derive(Debug, Default)]
struct Session {
    lang: Language,
    district: Option<String>,
    crop: Option<String>,
    coords: Option<(f64, f64)>,
    history: Vec<ChatMessage>,
    insight_message: Option<MessageId>,
    generations: HashMap<TaskKind, u64>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<ChatId, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the chat's request context with defaults applied.
    pub async fn context(&self, chat: ChatId) -> QueryContext {
        let mut sessions = self.inner.lock().await;
        let session = sessions.entry(chat).or_default();
        QueryContext {
            lang: session.lang,
            district: session
                .district
                .clone()
                .unwrap_or_else(|| DEFAULT_DISTRICT.to_string()),
            crop: session
                .crop
                .clone()
                .unwrap_or_else(|| DEFAULT_CROP.to_string()),
            coords: session.coords.unwrap_or(DEFAULT_COORDS),
        }
    }

    pub async fn language(&self, chat: ChatId) -> Language {
        let mut sessions = self.inner.lock().await;
        sessions.entry(chat).or_default().lang
    }

    pub async fn set_language(&self, chat: ChatId, lang: Language) {
        let mut sessions = self.inner.lock().await;
        sessions.entry(chat).or_default().lang = lang;
    }

    pub async fn set_district(&self, chat: ChatId, district: String) {
        let mut sessions = self.inner.lock().await;
        sessions.entry(chat).or_default().district = Some(district);
    }

    pub async fn set_crop(&self, chat: ChatId, crop: String) {
        let mut sessions = self.inner.lock().await;
        sessions.entry(chat).or_default().crop = Some(crop);
    }

    pub async fn set_coords(&self, chat: ChatId, coords: (f64, f64)) {
        let mut sessions = self.inner.lock().await;
        sessions.entry(chat).or_default().coords = Some(coords);
    }

    /// Append one transcript turn, dropping the oldest beyond the limit.
    pub async fn push_message(&self, chat: ChatId, message: ChatMessage) {
        let mut sessions = self.inner.lock().await;
        let history = &mut sessions.entry(chat).or_default().history;
        history.push(message);
        if history.len() > HISTORY_LIMIT {
            let excess = history.len() - HISTORY_LIMIT;
            history.drain(..excess);
        }
    }

    pub async fn history(&self, chat: ChatId) -> Vec<ChatMessage> {
        let mut sessions = self.inner.lock().await;
        sessions.entry(chat).or_default().history.clone()
    }

    /// Start a fetch for this query key and return its generation.
    pub async fn begin(&self, chat: ChatId, kind: TaskKind) -> u64 {
        let mut sessions = self.inner.lock().await;
        let generation = sessions
            .entry(chat)
            .or_default()
            .generations
            .entry(kind)
            .or_insert(0);
        *generation += 1;
        *generation
    }

    /// Whether a fetch started at `generation` is still the newest one.
    pub async fn is_current(&self, chat: ChatId, kind: TaskKind, generation: u64) -> bool {
        let mut sessions = self.inner.lock().await;
        sessions
            .entry(chat)
            .or_default()
            .generations
            .get(&kind)
            .copied()
            .unwrap_or(0)
            == generation
    }

    pub async fn insight_message(&self, chat: ChatId) -> Option<MessageId> {
        let mut sessions = self.inner.lock().await;
        sessions.entry(chat).or_default().insight_message
    }

    pub async fn set_insight_message(&self, chat: ChatId, id: MessageId) {
        let mut sessions = self.inner.lock().await;
        sessions.entry(chat).or_default().insight_message = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatRole;

    #[tokio::test]
    async fn context_defaults_until_set() {
        let store = SessionStore::new();
        let chat = ChatId(1);

        let ctx = store.context(chat).await;
        assert_eq!(ctx.district, DEFAULT_DISTRICT);
        assert_eq!(ctx.crop, DEFAULT_CROP);
        assert_eq!(ctx.coords, DEFAULT_COORDS);
        assert_eq!(ctx.lang, Language::English);

        store.set_district(chat, "Kolar".to_string()).await;
        store.set_crop(chat, "Tomato".to_string()).await;
        store.set_coords(chat, (13.13, 78.13)).await;
        store.set_language(chat, Language::Kannada).await;

        let ctx = store.context(chat).await;
        assert_eq!(ctx.district, "Kolar");
        assert_eq!(ctx.crop, "Tomato");
        assert_eq!(ctx.coords, (13.13, 78.13));
        assert_eq!(ctx.lang, Language::Kannada);
    }

    #[tokio::test]
    async fn sessions_are_isolated_per_chat() {
        let store = SessionStore::new();
        store.set_district(ChatId(1), "Kolar".to_string()).await;
        let other = store.context(ChatId(2)).await;
        assert_eq!(other.district, DEFAULT_DISTRICT);
    }

    #[tokio::test]
    async fn superseded_generation_is_stale() {
        let store = SessionStore::new();
        let chat = ChatId(7);

        let first = store.begin(chat, TaskKind::Insight).await;
        let second = store.begin(chat, TaskKind::Insight).await;
        assert!(second > first);
        assert!(!store.is_current(chat, TaskKind::Insight, first).await);
        assert!(store.is_current(chat, TaskKind::Insight, second).await);

        // other task kinds keep their own counters
        let mandi = store.begin(chat, TaskKind::Mandi).await;
        assert!(store.is_current(chat, TaskKind::Mandi, mandi).await);
        assert!(store.is_current(chat, TaskKind::Insight, second).await);
    }

    #[tokio::test]
    async fn history_is_append_only_and_bounded() {
        let store = SessionStore::new();
        let chat = ChatId(9);

        store.push_message(chat, ChatMessage::user("q1")).await;
        store.push_message(chat, ChatMessage::assistant("a1")).await;
        let history = store.history(chat).await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, ChatRole::User);
        assert_eq!(history[1].role, ChatRole::Assistant);

        for i in 0..100 {
            store.push_message(chat, ChatMessage::user(format!("q{i}"))).await;
        }
        let history = store.history(chat).await;
        assert_eq!(history.len(), 40);
        assert_eq!(history.last().unwrap().text, "q99");
    }
}
