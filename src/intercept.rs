//! Canned replies for identity questions.
//!
//! A fixed phrase table answers "who are you" style questions in several
//! languages without a network round-trip. Matching is containment on the
//! trimmed, lower-cased utterance; the table is checked in a fixed priority
//! order and the first satisfied entry wins.

struct TriggerSet {
    phrases: &'static [&'static str],
    reply: &'static str,
}

// Priority order: English, French, German, Spanish, then Swahili. The Swahili
// entry is last so its reply also serves as the default for any hit that no
// other language claims.
const TRIGGERS: &[TriggerSet] = &[
    TriggerSet {
        phrases: &["who are you", "what is your name", "what's your name"],
        reply: "I'm AtupeleGPT, your digital assistant.",
    },
    TriggerSet {
        phrases: &["qui es-tu", "comment tu t'appelles"],
        reply: "Je suis AtupeleGPT, votre assistant numérique.",
    },
    TriggerSet {
        phrases: &["wer bist du", "wie heißt du"],
        reply: "Ich bin AtupeleGPT, dein digitaler Assistent.",
    },
    TriggerSet {
        phrases: &["¿quién eres?", "cómo te llamas"],
        reply: "Soy AtupeleGPT, tu asistente digital.",
    },
    TriggerSet {
        phrases: &["wewe ni nani", "jina lako", "unaitwaje"],
        reply: "Mimi ni AtupeleGPT, msaidizi wako wa kidijitali.",
    },
];

/// Returns the canned reply for an identity question, or `None` when the
/// utterance contains no trigger phrase. Pure and O(number of phrases).
pub fn reply_for(utterance: &str) -> Option<&'static str> {
    let normalized = utterance.trim().to_lowercase();
    TRIGGERS
        .iter()
        .find(|set| {
            set.phrases
                .iter()
                .any(|phrase| normalized.contains(phrase))
        })
        .map(|set| set.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_identity_question() {
        assert_eq!(
            reply_for("who are you"),
            Some("I'm AtupeleGPT, your digital assistant.")
        );
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(
            reply_for("Qui es-tu"),
            Some("Je suis AtupeleGPT, votre assistant numérique.")
        );
        assert_eq!(reply_for("WHO ARE YOU"), reply_for("who are you"));
    }

    #[test]
    fn surrounding_text_still_matches() {
        assert_eq!(
            reply_for("  hey, what's your name exactly?  "),
            Some("I'm AtupeleGPT, your digital assistant.")
        );
    }

    #[test]
    fn swahili_phrase_gets_swahili_reply() {
        assert_eq!(
            reply_for("wewe ni nani"),
            Some("Mimi ni AtupeleGPT, msaidizi wako wa kidijitali.")
        );
    }

    #[test]
    fn german_and_spanish_replies() {
        assert_eq!(
            reply_for("wer bist du?"),
            Some("Ich bin AtupeleGPT, dein digitaler Assistent.")
        );
        assert_eq!(
            reply_for("¿quién eres?"),
            Some("Soy AtupeleGPT, tu asistente digital.")
        );
    }

    #[test]
    fn english_wins_over_swahili_on_mixed_input() {
        assert_eq!(
            reply_for("jina lako? who are you?"),
            Some("I'm AtupeleGPT, your digital assistant.")
        );
    }

    #[test]
    fn unrelated_input_misses() {
        assert_eq!(reply_for("what's the weather"), None);
        assert_eq!(reply_for(""), None);
    }

    #[test]
    fn matcher_is_deterministic() {
        let first = reply_for("unaitwaje leo");
        let second = reply_for("unaitwaje leo");
        assert_eq!(first, second);
    }
}
