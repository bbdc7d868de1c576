use brai::sentiment::{LexiconScorer, SentimentScorer, classify, mood_for_score};
use brai::types::Mood;

struct FixedScore(f64);

impl SentimentScorer for FixedScore {
    fn score(&self, _utterance: &str) -> f64 {
        self.0
    }
}

#[test]
fn mapping_follows_thresholds() {
    assert_eq!(mood_for_score(0.5), Mood::Happy);
    assert_eq!(mood_for_score(-0.5), Mood::Sad);
    assert_eq!(mood_for_score(0.0), Mood::Neutral);
}

#[test]
fn threshold_bounds_are_exclusive() {
    assert_eq!(mood_for_score(0.3), Mood::Neutral);
    assert_eq!(mood_for_score(-0.3), Mood::Neutral);
    assert_eq!(mood_for_score(0.31), Mood::Happy);
    assert_eq!(mood_for_score(-0.31), Mood::Sad);
}

#[test]
fn extremes_and_nan() {
    assert_eq!(mood_for_score(1.0), Mood::Happy);
    assert_eq!(mood_for_score(-1.0), Mood::Sad);
    assert_eq!(mood_for_score(f64::NAN), Mood::Neutral);
}

#[test]
fn classify_uses_only_the_score() {
    assert_eq!(classify(&FixedScore(0.9), "estou triste"), Mood::Happy);
    assert_eq!(classify(&FixedScore(-0.9), "estou feliz"), Mood::Sad);
}

#[test]
fn lexicon_scores_stay_in_range() {
    let scorer = LexiconScorer::new();
    for text in [
        "",
        "feliz feliz feliz feliz feliz feliz!!!!!!!",
        "odeio odeio odeio, horrível, péssimo!!!",
        "que horas são?",
    ] {
        let score = scorer.score(text);
        assert!((-1.0..=1.0).contains(&score), "{text}: {score}");
    }
}

#[test]
fn lexicon_portuguese_polarity() {
    let scorer = LexiconScorer::new();
    assert_eq!(classify(&scorer, "estou muito feliz hoje"), Mood::Happy);
    assert_eq!(classify(&scorer, "estou triste"), Mood::Sad);
    assert_eq!(classify(&scorer, "que horas são?"), Mood::Neutral);
}

#[test]
fn lexicon_english_polarity() {
    let scorer = LexiconScorer::new();
    assert_eq!(classify(&scorer, "this is great"), Mood::Happy);
    assert_eq!(classify(&scorer, "i hate mondays"), Mood::Sad);
}

#[test]
fn negation_flips_polarity() {
    let scorer = LexiconScorer::new();
    assert!(scorer.score("estou feliz") > 0.0);
    assert!(scorer.score("não estou feliz") < 0.0);
    assert_eq!(classify(&scorer, "não estou feliz"), Mood::Sad);
}

#[test]
fn exclamations_amplify() {
    let scorer = LexiconScorer::new();
    assert!(scorer.score("que legal!!!") > scorer.score("que legal"));
    assert_eq!(scorer.score("!!!"), 0.0);
}
