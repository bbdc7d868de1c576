pub mod wikipedia;

use async_trait::async_trait;

pub use wikipedia::WikipediaSummary;

/// Shown when the source answered but had nothing for the question.
pub const NOT_FOUND_REPLY: &str = "Desculpe, não encontrei informações sobre isso.";
/// Shown when the source could not be reached in time.
pub const UNREACHABLE_REPLY: &str = "Desculpe, não consegui acessar a internet no momento.";

/// Result of asking a knowledge source about a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(String),
    NotFound,
    Unreachable,
}

impl LookupOutcome {
    /// Text to use as the candidate reply. Failures become apologies, never errors.
    pub fn into_reply(self) -> String {
        match self {
            Self::Found(summary) => summary,
            Self::NotFound => NOT_FOUND_REPLY.to_string(),
            Self::Unreachable => UNREACHABLE_REPLY.to_string(),
        }
    }
}

/// Fetches a short textual summary for a question.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    async fn lookup(&self, question: &str) -> LookupOutcome;
}

/// Knowledge source used when lookups are disabled: always unreachable.
pub struct OfflineKnowledge;

#[async_trait]
impl KnowledgeSource for OfflineKnowledge {
    async fn lookup(&self, _question: &str) -> LookupOutcome {
        LookupOutcome::Unreachable
    }
}
