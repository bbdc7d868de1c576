pub mod lexicon;

use crate::types::Mood;

pub use lexicon::LexiconScorer;

/// Scores above this are happy; scores below its negation are sad.
pub const MOOD_THRESHOLD: f64 = 0.3;

/// Maps an utterance to a compound polarity score in `[-1.0, 1.0]`.
///
/// Implementations are free to use any model; the mood policy lives in
/// [`mood_for_score`] and does not depend on the scorer.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, utterance: &str) -> f64;
}

/// Threshold a compound score into a mood label. Both bounds are exclusive,
/// so exactly `0.3` or `-0.3` is neutral. NaN is neutral.
pub fn mood_for_score(score: f64) -> Mood {
    if score > MOOD_THRESHOLD {
        Mood::Happy
    } else if score < -MOOD_THRESHOLD {
        Mood::Sad
    } else {
        Mood::Neutral
    }
}

/// Score an utterance and map it to a mood in one step.
pub fn classify(scorer: &dyn SentimentScorer, utterance: &str) -> Mood {
    mood_for_score(scorer.score(utterance))
}
