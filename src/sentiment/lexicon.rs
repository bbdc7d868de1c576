use std::collections::HashMap;

use super::SentimentScorer;

/// Normalisation constant for the compound score: `x / sqrt(x² + ALPHA)`.
const ALPHA: f64 = 15.0;
/// Multiplier applied to a word preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;
/// How far back (in tokens) a negation or intensifier reaches.
const LOOKBACK: usize = 3;
const BOOST: f64 = 0.293;
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;

/// Word valences on a -4..4 scale, Portuguese first, then English.
const VALENCES: &[(&str, f64)] = &[
    ("feliz", 2.4),
    ("alegre", 2.2),
    ("contente", 2.0),
    ("animado", 2.0),
    ("animada", 2.0),
    ("ótimo", 2.6),
    ("otimo", 2.6),
    ("ótima", 2.6),
    ("otima", 2.6),
    ("bom", 1.9),
    ("boa", 1.9),
    ("legal", 1.7),
    ("gosto", 1.8),
    ("adoro", 2.8),
    ("amo", 3.0),
    ("incrível", 2.8),
    ("incrivel", 2.8),
    ("maravilhoso", 3.0),
    ("maravilhosa", 3.0),
    ("excelente", 3.0),
    ("perfeito", 2.8),
    ("perfeita", 2.8),
    ("lindo", 2.4),
    ("linda", 2.4),
    ("divertido", 2.0),
    ("divertida", 2.0),
    ("obrigado", 1.6),
    ("obrigada", 1.6),
    ("triste", -2.4),
    ("infeliz", -2.4),
    ("ruim", -2.1),
    ("péssimo", -3.0),
    ("pessimo", -3.0),
    ("péssima", -3.0),
    ("pessima", -3.0),
    ("horrível", -3.0),
    ("horrivel", -3.0),
    ("terrível", -3.0),
    ("terrivel", -3.0),
    ("odeio", -3.2),
    ("chato", -1.8),
    ("chata", -1.8),
    ("chateado", -2.0),
    ("chateada", -2.0),
    ("cansado", -1.4),
    ("cansada", -1.4),
    ("mal", -1.8),
    ("raiva", -2.6),
    ("medo", -2.0),
    ("sozinho", -1.6),
    ("sozinha", -1.6),
    ("deprimido", -2.8),
    ("deprimida", -2.8),
    ("difícil", -1.2),
    ("dificil", -1.2),
    ("problema", -1.4),
    ("happy", 2.7),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("nice", 1.8),
    ("love", 3.2),
    ("awesome", 3.1),
    ("wonderful", 2.7),
    ("excellent", 2.7),
    ("thanks", 1.9),
    ("sad", -2.1),
    ("unhappy", -1.8),
    ("bad", -2.5),
    ("awful", -2.0),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("hate", -2.7),
    ("angry", -2.3),
    ("tired", -1.9),
    ("lonely", -2.0),
];

const NEGATIONS: &[&str] = &[
    "não", "nao", "nunca", "nem", "jamais", "not", "never", "no", "don't", "isn't", "dont",
    "isnt",
];

/// Intensifiers push a valence away from zero, dampeners toward it.
const MODIFIERS: &[(&str, f64)] = &[
    ("muito", BOOST),
    ("muita", BOOST),
    ("super", BOOST),
    ("bastante", BOOST),
    ("tão", BOOST),
    ("tao", BOOST),
    ("extremamente", BOOST),
    ("very", BOOST),
    ("really", BOOST),
    ("extremely", BOOST),
    ("pouco", -BOOST),
    ("meio", -BOOST),
    ("slightly", -BOOST),
    ("kinda", -BOOST),
];

/// Small bilingual valence-lexicon scorer.
///
/// Sums word valences (adjusted for nearby negations and intensifiers and for
/// trailing exclamation marks) and squashes the sum into `[-1, 1]`.
pub struct LexiconScorer {
    valences: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            modifiers: MODIFIERS.iter().copied().collect(),
        }
    }

    fn word_valence(&self, tokens: &[String], i: usize) -> f64 {
        let Some(&base) = self.valences.get(tokens[i].as_str()) else {
            return 0.0;
        };

        let mut valence = base;
        let start = i.saturating_sub(LOOKBACK);
        for prev in &tokens[start..i] {
            if let Some(&delta) = self.modifiers.get(prev.as_str()) {
                valence += if valence < 0.0 { -delta } else { delta };
            }
        }
        if tokens[start..i]
            .iter()
            .any(|t| NEGATIONS.contains(&t.as_str()))
        {
            valence *= NEGATION_SCALAR;
        }
        valence
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, utterance: &str) -> f64 {
        let tokens = tokenize(utterance);
        let mut sum: f64 = (0..tokens.len()).map(|i| self.word_valence(&tokens, i)).sum();

        if sum != 0.0 {
            let bangs = utterance.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
            sum += sum.signum() * bangs * EXCLAMATION_BOOST;
        }

        normalize(sum)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
