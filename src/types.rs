use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Current sentiment label, recomputed on every turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[serde(alias = "feliz")]
    Happy,
    #[serde(alias = "triste")]
    Sad,
    #[default]
    #[serde(alias = "neutra")]
    Neutral,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Neutral => "neutral",
        }
    }

    /// Word used when the mood is spoken in a reply.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::Happy => "feliz",
            Self::Sad => "triste",
            Self::Neutral => "neutra",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged turn: what the user said and what was answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    #[serde(alias = "usuario")]
    pub utterance: String,
    #[serde(alias = "br_ai")]
    pub reply: String,
}

/// Conversation memory. A single process-wide record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryRecord {
    #[serde(alias = "usuario")]
    pub user_name: String,
    #[serde(alias = "conversas")]
    pub conversation_log: Vec<Exchange>,
    #[serde(alias = "emocao")]
    pub mood: Mood,
}

impl MemoryRecord {
    pub fn turn_count(&self) -> usize {
        self.conversation_log.len()
    }

    pub fn record(&mut self, utterance: impl Into<String>, reply: impl Into<String>) {
        self.conversation_log.push(Exchange {
            utterance: utterance.into(),
            reply: reply.into(),
        });
    }
}

/// Personality profile. Read at startup and never mutated by a turn.
///
/// Only `display_name` feeds the reply path today; the remaining fields are
/// carried so that an edited profile survives a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personality {
    #[serde(alias = "nome")]
    pub display_name: String,
    #[serde(alias = "humor")]
    pub mood_descriptor: String,
    #[serde(alias = "interesses")]
    pub interests: BTreeSet<String>,
    #[serde(alias = "modo_de_falar")]
    pub speaking_style: String,
    #[serde(alias = "nivel_curiosidade")]
    pub curiosity_level: f64,
    #[serde(alias = "amizade_com_usuario")]
    pub affinity_level: f64,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            display_name: "BR-AI".into(),
            mood_descriptor: "curiosa".into(),
            interests: ["tecnologia", "ajudar o criador", "aprender coisas novas"]
                .into_iter()
                .map(String::from)
                .collect(),
            speaking_style: "gentil e atenciosa".into(),
            curiosity_level: 1.0,
            affinity_level: 0.5,
        }
    }
}
