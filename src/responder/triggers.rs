/// What a fixed trigger does once it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Greeting,
    Hello,
    Identity,
    MoodReport,
    /// Stores the name that follows the phrase. The only side-effecting trigger.
    Introduction,
}

/// A trigger and the lowercase phrases that select it.
#[derive(Debug)]
pub struct Trigger {
    pub kind: TriggerKind,
    pub phrases: &'static [&'static str],
}

/// Fixed trigger table. Evaluation order is the table order and the first
/// trigger with any phrase contained in the utterance wins, so `oi` beats
/// every later entry (including a name like "Heloisa" after "meu nome é").
pub const TRIGGERS: &[Trigger] = &[
    Trigger {
        kind: TriggerKind::Greeting,
        phrases: &["oi"],
    },
    Trigger {
        kind: TriggerKind::Hello,
        phrases: &["olá", "hello"],
    },
    Trigger {
        kind: TriggerKind::Identity,
        phrases: &["quem é você", "quem e voce", "who are you"],
    },
    Trigger {
        kind: TriggerKind::MoodReport,
        phrases: &["como você está", "como voce esta", "how are you"],
    },
    Trigger {
        kind: TriggerKind::Introduction,
        phrases: &["meu nome é", "my name is"],
    },
];

pub const GREETING_REPLY: &str = "oi como vai? 😊";
pub const HELLO_REPLY: &str = "Olá! Que bom te ver por aqui.";
pub const NAMELESS_INTRODUCTION_REPLY: &str = "Ah, prazer em te conhecer! 💙";

/// A matched trigger and where its phrase ends in the normalized utterance.
#[derive(Debug, Clone, Copy)]
pub struct TriggerMatch {
    pub kind: TriggerKind,
    pub phrase: &'static str,
    /// Byte offset just past the last occurrence of `phrase`.
    pub end: usize,
}

/// Scan the table in order and return the first match.
pub fn match_trigger(normalized: &str) -> Option<TriggerMatch> {
    TRIGGERS.iter().find_map(|trigger| {
        trigger.phrases.iter().find_map(|&phrase| {
            normalized.rfind(phrase).map(|start| TriggerMatch {
                kind: trigger.kind,
                phrase,
                end: start + phrase.len(),
            })
        })
    })
}

/// A lowercased utterance that remembers where each of its bytes came from,
/// so text found in the lowercase form can be cut from the original.
#[derive(Debug)]
pub struct Normalized<'a> {
    original: &'a str,
    lowered: String,
    /// For every byte of `lowered` (plus one past the end), the byte offset
    /// in `original` of the character it was produced from.
    origin: Vec<usize>,
}

impl<'a> Normalized<'a> {
    pub fn new(original: &'a str) -> Self {
        let mut lowered = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len() + 1);
        for (idx, ch) in original.char_indices() {
            for lower in ch.to_lowercase() {
                lowered.push(lower);
                origin.resize(lowered.len(), idx);
            }
        }
        origin.push(original.len());
        Self {
            original,
            lowered,
            origin,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.lowered
    }

    /// Original-case text from lowered byte offset `at` to the end.
    pub fn original_tail(&self, at: usize) -> &'a str {
        let start = self.origin.get(at).copied().unwrap_or(self.original.len());
        &self.original[start..]
    }

    /// Whether the utterance reads as a question (trailing whitespace ignored).
    pub fn is_question(&self) -> bool {
        self.lowered.trim_end().ends_with('?')
    }
}

/// Uppercase the first character, leave the rest as typed.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_is_the_priority() {
        let kinds: Vec<_> = TRIGGERS.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TriggerKind::Greeting,
                TriggerKind::Hello,
                TriggerKind::Identity,
                TriggerKind::MoodReport,
                TriggerKind::Introduction,
            ]
        );
    }

    #[test]
    fn earlier_trigger_wins_when_both_match() {
        let m = match_trigger("oi, olá!").unwrap();
        assert_eq!(m.kind, TriggerKind::Greeting);

        let m = match_trigger("olá, quem é você?").unwrap();
        assert_eq!(m.kind, TriggerKind::Hello);
    }

    #[test]
    fn unaccented_lookalikes_do_not_match() {
        assert!(match_trigger("o que é uma escola?").is_none());
        assert!(match_trigger("o que é angola?").is_none());
        assert!(match_trigger("meu nome era joana").is_none());
    }

    #[test]
    fn substring_match_anywhere() {
        let m = match_trigger("boa noite").unwrap();
        assert_eq!(m.kind, TriggerKind::Greeting);
        assert!(match_trigger("que horas são?").is_none());
    }

    #[test]
    fn end_points_past_the_last_occurrence() {
        let text = "meu nome é bia, meu nome é ana";
        let m = match_trigger(text).unwrap();
        assert_eq!(m.kind, TriggerKind::Introduction);
        assert_eq!(&text[m.end..], " ana");
    }

    #[test]
    fn original_tail_maps_through_lowercasing() {
        let n = Normalized::new("Meu Nome É Ana Luísa");
        assert_eq!(n.as_str(), "meu nome é ana luísa");
        let m = match_trigger(n.as_str()).unwrap();
        assert_eq!(n.original_tail(m.end), " Ana Luísa");
    }

    #[test]
    fn original_tail_handles_length_changing_lowercase() {
        // 'İ' lowercases to two chars ("i̇"), three bytes instead of two.
        let n = Normalized::new("İ my name is Zoë");
        let m = match_trigger(n.as_str()).unwrap();
        assert_eq!(n.original_tail(m.end), " Zoë");
        assert_eq!(n.original_tail(n.as_str().len()), "");
    }

    #[test]
    fn question_detection_ignores_trailing_space() {
        assert!(Normalized::new("Quem foi Pelé?  ").is_question());
        assert!(!Normalized::new("Pelé").is_question());
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize_first("ana"), "Ana");
        assert_eq!(capitalize_first("éLIS"), "ÉLIS");
        assert_eq!(capitalize_first(""), "");
    }
}
