pub mod triggers;

use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::error::StorageError;
use crate::knowledge::KnowledgeSource;
use crate::sentiment::{SentimentScorer, classify};
use crate::store::ChatState;
use triggers::{
    GREETING_REPLY, HELLO_REPLY, NAMELESS_INTRODUCTION_REPLY, Normalized, TriggerKind,
    TriggerMatch, capitalize_first, match_trigger,
};

/// Candidate replies shorter than this (in characters) are replaced.
pub const MIN_REPLY_CHARS: usize = 3;
/// Candidate replies longer than this (in characters) are replaced.
pub const MAX_REPLY_CHARS: usize = 150;

/// Replies used when a candidate is degenerate or missing.
pub const FILLER_REPLIES: [&str; 4] = [
    "Hmm, entendi o que você quis dizer.",
    "Interessante... continue!",
    "Adoro conversar com você 😄",
    "Isso é bem curioso, me conte mais.",
];

/// Which branch of the turn produced the candidate reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Trigger(TriggerKind),
    Lookup,
    /// No trigger and not a question: the candidate is empty.
    Fallback,
}

/// The outcome of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Final reply, prefixed with the personality's display name.
    pub reply: String,
    /// Reply text as logged, without the prefix.
    pub body: String,
    pub source: ReplySource,
    /// Whether the sanity filter swapped the candidate for a filler.
    pub filtered: bool,
}

/// Whether a candidate reply survives the sanity filter.
pub fn is_acceptable(candidate: &str) -> bool {
    let len = candidate.chars().count();
    (MIN_REPLY_CHARS..=MAX_REPLY_CHARS).contains(&len)
}

/// Keep an acceptable candidate, otherwise pick a filler uniformly at random.
pub fn sanity_filter(candidate: String) -> String {
    if is_acceptable(&candidate) {
        return candidate;
    }
    let mut rng = rand::thread_rng();
    FILLER_REPLIES
        .choose(&mut rng)
        .copied()
        .unwrap_or(FILLER_REPLIES[0])
        .to_string()
}

/// The response selector: classify, match, look up, filter, log.
pub struct Responder {
    scorer: Box<dyn SentimentScorer>,
    knowledge: Box<dyn KnowledgeSource>,
}

impl Responder {
    pub fn new(scorer: Box<dyn SentimentScorer>, knowledge: Box<dyn KnowledgeSource>) -> Self {
        Self { scorer, knowledge }
    }

    /// Run one turn against `state`.
    ///
    /// The memory record is persisted after the mood update, after a name is
    /// learned, and after the exchange is logged. Any failed save aborts the
    /// turn and restores the in-memory record to its state before the turn;
    /// nothing else is an error.
    pub async fn respond(
        &self,
        state: &mut ChatState,
        utterance: &str,
    ) -> Result<Turn, StorageError> {
        let snapshot = state.memory.clone();
        let result = self.run_turn(state, utterance).await;
        if let Err(e) = &result {
            warn!("turn aborted: {e}");
            state.memory = snapshot;
        }
        result
    }

    async fn run_turn(&self, state: &mut ChatState, utterance: &str) -> Result<Turn, StorageError> {
        let normalized = Normalized::new(utterance);
        debug!(utterance, "processing turn");

        state.memory.mood = classify(&*self.scorer, normalized.as_str());
        state.persist()?;

        let (candidate, source) = match match_trigger(normalized.as_str()) {
            Some(matched) => {
                let reply = self.apply_trigger(state, &normalized, matched)?;
                (reply, ReplySource::Trigger(matched.kind))
            }
            None if normalized.is_question() => {
                let outcome = self.knowledge.lookup(utterance.trim()).await;
                debug!(?outcome, "knowledge lookup finished");
                (outcome.into_reply(), ReplySource::Lookup)
            }
            None => (String::new(), ReplySource::Fallback),
        };

        let filtered = !is_acceptable(&candidate);
        let body = sanity_filter(candidate);

        state.memory.record(utterance, body.clone());
        state.persist()?;

        info!(
            source = ?source,
            filtered,
            mood = %state.memory.mood,
            turns = state.memory.turn_count(),
            "turn complete"
        );

        Ok(Turn {
            reply: format!("{}: {}", state.personality.display_name, body),
            body,
            source,
            filtered,
        })
    }

    fn apply_trigger(
        &self,
        state: &mut ChatState,
        normalized: &Normalized<'_>,
        matched: TriggerMatch,
    ) -> Result<String, StorageError> {
        let reply = match matched.kind {
            TriggerKind::Greeting => GREETING_REPLY.to_string(),
            TriggerKind::Hello => HELLO_REPLY.to_string(),
            TriggerKind::Identity => format!(
                "Sou {}, sua assistente pessoal.",
                state.personality.display_name
            ),
            TriggerKind::MoodReport => {
                format!("Estou me sentindo {} hoje.", state.memory.mood.descriptor())
            }
            TriggerKind::Introduction => {
                let name = capitalize_first(normalized.original_tail(matched.end).trim());
                if name.is_empty() {
                    return Ok(NAMELESS_INTRODUCTION_REPLY.to_string());
                }
                info!(user_name = %name, "learned user name");
                let reply = format!("Prazer, {name}! 😄 Agora vou lembrar de você.");
                state.memory.user_name = name;
                state.persist()?;
                reply
            }
        };
        Ok(reply)
    }
}
