use crate::domain::localization::entities::Locale;

/// Phrases a customer uses to signal the order is finished. Matched as
/// lower-cased substrings, so a phrase buried in a longer sentence still
/// fires; the set covers common French and English spellings.
const COMPLETION_PHRASES: &[&str] = &[
    "c'est bon",
    "c bon",
    "c est bon",
    "ok c bon",
    "ok c'est bon",
    "ok c est bon",
    "c'est tout",
    "c est tout",
    "rien d'autre",
    "rien d autre",
    "rien de plus",
    "terminé",
    "termine",
    "je valide",
    "je confirme",
    "on valide",
    "on confirme",
    "passe au paiement",
    "payer",
    "paiement",
    "checkout",
    "that's all",
    "thats all",
    "no more",
    "all good",
    "that's it",
    "i'm done",
    "im done",
    "nothing else",
    "nothing more",
];

/// Phrases in assistant replies that keep soliciting additions. Used to
/// catch the model contradicting an order it just marked complete.
const FOLLOW_UP_PHRASES: &[&str] = &[
    "souhaitez-vous",
    "ajouter autre",
    "quelque chose d'autre",
    "autre chose",
    "encore",
    "voulez-vous ajouter",
    "would you like",
    "anything else",
    "add anything",
    "want to add",
];

/// True iff the text contains any completion-signaling phrase. This is one
/// half of the completion signal; the model's own `completed` flag is the
/// other, and either one marks the order complete.
pub fn detect_completion(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let lowered = text.to_lowercase();
    COMPLETION_PHRASES.iter().any(|p| lowered.contains(p))
}

pub fn assistant_asks_for_more(text: &str) -> bool {
    let lowered = text.to_lowercase();
    FOLLOW_UP_PHRASES.iter().any(|p| lowered.contains(p))
}

/// The canonical confirmation line sent once an order is complete.
pub fn confirmation_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Order confirmed. Go to the next terminal for payment.",
        Locale::Fr => "Commande confirmée. RDV à la prochaine borne pour le paiement.",
    }
}

/// On a completed order, an assistant reply that is empty or still asks for
/// more items is replaced with the canonical confirmation; anything else
/// passes through untouched.
pub fn normalize_assistant_text(assistant_text: String, order_completed: bool, locale: Locale) -> String {
    if !order_completed {
        return assistant_text;
    }
    if assistant_asks_for_more(&assistant_text) || assistant_text.trim().is_empty() {
        return confirmation_message(locale).to_string();
    }
    assistant_text
}
