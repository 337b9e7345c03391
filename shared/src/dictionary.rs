//! Explanations shown next to flagged terms.

use lazy_static::lazy_static;
use std::collections::HashMap;

pub const FALLBACK_EXPLANATION: &str = "Commonly used in misleading or fake content.";

const ENTRIES: [(&str, &str); 27] = [
    ("shocking", "Overly dramatic language used to provoke emotions."),
    ("exposed", "Suggests hidden or secretive information is being revealed, often sensationalized."),
    ("secret", "Used to create intrigue and imply exclusivity."),
    ("truth", "Often misused to mislead the reader."),
    ("you won’t believe", "Clickbait phrase meant to trigger curiosity."),
    ("disaster", "Exaggerates events to induce panic."),
    ("busted", "Sensational term implying wrongdoing."),
    ("revealed", "Frequently used in misleading headlines."),
    ("scandal", "Used to spark controversy."),
    ("viral", "Implies content is widely shared regardless of authenticity."),
    ("conspiracy", "Implies intentional suppression of information."),
    ("explosive", "Used to describe content with exaggerated shock value."),
    ("mind-blowing", "Exaggerates the significance of the content to attract attention."),
    ("unbelievable", "Used to make information seem extraordinary and sensational."),
    ("exclusive", "Implied rarity to make information seem more valuable or intriguing."),
    ("shocking footage", "Used to sensationalize ordinary events with a dramatic label."),
    ("revealing", "Intended to suggest something hidden is being uncovered."),
    (
        "debunked",
        "Often used to give the impression that something has been conclusively proven false, when it may not be.",
    ),
    ("bombshell", "A term meant to imply major revelations with high drama."),
    ("uncovered", "Implying something has been intentionally hidden, even if it hasn't."),
    ("untold", "Implies the story hasn't been shared, creating a sense of mystery."),
    (
        "controversial",
        "Used to make something appear more important or contentious than it really is.",
    ),
    ("game-changing", "Exaggerates the impact of a piece of news or information."),
    (
        "unmasked",
        "Implying that someone or something is finally revealed after hiding, often with a dramatic effect.",
    ),
    (
        "shockingly",
        "Adjective meant to emphasize the supposed outrageousness of an event or detail.",
    ),
    ("hoax", "Intended to undermine credibility, often used without proper evidence."),
    (
        "exclusive footage",
        "Creates the illusion of rare, unseen material, which may not be the case.",
    ),
];

lazy_static! {
    static ref EXPLANATIONS: HashMap<&'static str, &'static str> = ENTRIES.iter().copied().collect();
}

// Keys are lowercase and use the typographic apostrophe.
fn normalize(term: &str) -> String {
    term.trim().to_lowercase().replace('\'', "’")
}

pub fn lookup(term: &str) -> Option<&'static str> {
    EXPLANATIONS.get(normalize(term).as_str()).copied()
}

pub fn explanation_for(term: &str) -> &'static str {
    lookup(term).unwrap_or(FALLBACK_EXPLANATION)
}

pub fn len() -> usize {
    EXPLANATIONS.len()
}
