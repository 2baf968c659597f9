//! Conversational session state.
//!
//! The transcript is an owned value threaded explicitly through each
//! turn-handling call; there is no ambient or global session state.

use serde::{Deserialize, Serialize};

use crate::interpreter::chat_reply;
use crate::llm::LlmProvider;
use crate::types::{ChatMessage, Role};

/// Default seed for a new conversation.
pub const DEFAULT_SEED: &str =
    "You are Dish Decoder, a friendly meal-planning assistant. Help the user \
     find meals that fit their dietary preferences, and keep replies short.";

/// An append-only log of a conversational session.
///
/// A transcript always starts with a single seeded system turn. User and
/// assistant turns strictly alternate after the seed, enforced by the push
/// methods. Lifetime is one session; `reset` discards everything but the
/// seed. Nothing is persisted across process restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    seed: String,
    turns: Vec<ChatMessage>,
}

impl Transcript {
    /// Create a transcript seeded with the given system turn.
    pub fn seeded(seed: impl Into<String>) -> Self {
        let seed = seed.into();
        let turns = vec![ChatMessage::system(seed.clone())];
        Self { seed, turns }
    }

    /// The turns in order, seed first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.turns
    }

    /// Number of turns, counting the seed.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        // A transcript always holds at least the seed.
        false
    }

    /// The turn at `index`, seed at 0.
    pub fn turn(&self, index: usize) -> Option<&ChatMessage> {
        self.turns.get(index)
    }

    /// Whether the next turn to append is a user turn.
    pub fn expects_user_turn(&self) -> bool {
        match self.turns.last() {
            Some(last) => last.role != Role::User,
            None => true,
        }
    }

    /// Append a user turn. Panics in debug builds if called out of order;
    /// the single-session flow appends exactly once per side per exchange.
    pub fn push_user(&mut self, content: impl Into<String>) {
        debug_assert!(self.expects_user_turn(), "two user turns in a row");
        self.turns.push(ChatMessage::user(content));
    }

    /// Append an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        debug_assert!(!self.expects_user_turn(), "assistant turn out of order");
        self.turns.push(ChatMessage::assistant(content));
    }

    /// Discard all turns and restore the single seeded turn.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.turns.push(ChatMessage::system(self.seed.clone()));
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::seeded(DEFAULT_SEED)
    }
}

/// Handle one conversational exchange.
///
/// Appends the user message, replays the whole transcript to the provider,
/// appends the assistant reply (the degraded failure string included, so the
/// alternation holds), and returns the reply. Exactly one user append and
/// one assistant append per call.
pub async fn take_turn(
    provider: &dyn LlmProvider,
    transcript: &mut Transcript,
    message: &str,
) -> String {
    transcript.push_user(message);
    let reply = chat_reply(provider, transcript).await;
    transcript.push_assistant(reply.clone());
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::PROCESSING_FAILURE;
    use crate::llm::FakeProvider;

    #[test]
    fn test_new_transcript_has_single_seeded_turn() {
        let transcript = Transcript::seeded("seed text");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.turn(0).unwrap().role, Role::System);
        assert_eq!(transcript.turn(0).unwrap().content, "seed text");
    }

    #[tokio::test]
    async fn test_one_exchange_yields_three_turns() {
        let provider = FakeProvider::with_response("breakfast", "Try shakshuka.");
        let mut transcript = Transcript::default();

        let reply = take_turn(&provider, &mut transcript, "high protein breakfast").await;

        assert_eq!(reply, "Try shakshuka.");
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.turn(0).unwrap().role, Role::System);
        assert_eq!(transcript.turn(1).unwrap().role, Role::User);
        assert_eq!(transcript.turn(2).unwrap().role, Role::Assistant);
        assert_eq!(transcript.turn(2).unwrap().content, "Try shakshuka.");
    }

    #[tokio::test]
    async fn test_turns_alternate_across_exchanges() {
        let provider = FakeProvider::new().with_default_response("ok");
        let mut transcript = Transcript::default();

        take_turn(&provider, &mut transcript, "first").await;
        take_turn(&provider, &mut transcript, "second").await;

        assert_eq!(transcript.len(), 5);
        for (i, turn) in transcript.messages().iter().enumerate().skip(1) {
            let expected = if i % 2 == 1 {
                Role::User
            } else {
                Role::Assistant
            };
            assert_eq!(turn.role, expected, "turn {}", i);
        }
    }

    #[tokio::test]
    async fn test_failed_reply_still_appends_assistant_turn() {
        let provider = FakeProvider::new(); // errors on every call
        let mut transcript = Transcript::default();

        let reply = take_turn(&provider, &mut transcript, "hello").await;

        assert_eq!(reply, PROCESSING_FAILURE);
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.turn(2).unwrap().content, PROCESSING_FAILURE);
    }

    #[tokio::test]
    async fn test_reset_restores_seed_only() {
        let provider = FakeProvider::new().with_default_response("ok");
        let mut transcript = Transcript::seeded("the seed");

        take_turn(&provider, &mut transcript, "hello").await;
        assert_eq!(transcript.len(), 3);

        transcript.reset();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.turn(0).unwrap().role, Role::System);
        assert_eq!(transcript.turn(0).unwrap().content, "the seed");
    }
}
