//! Marks flagged terms inside extracted text.
//!
//! Matching is case-insensitive and whole-word. When spans of different terms
//! overlap, the longest span wins and ties go to the one that starts first, so
//! the outcome does not depend on the order the service listed the terms in.
//! Concatenating the text of every returned [`Segment`] reproduces the input.

use crate::dictionary::explanation_for;
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Flagged {
        /// The occurrence as written in the source text.
        text: String,
        /// The flagged term that matched it.
        term: String,
        explanation: &'static str,
    },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Flagged { text, .. } => text,
        }
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self, Segment::Flagged { .. })
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
    chars: usize,
    term: usize,
}

impl Span {
    fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// `\b` is only required on a side whose edge character is itself a word
// character; phrases like "cover-up" or "exposé!" still match as written.
fn term_pattern(term: &str) -> Option<Regex> {
    let first = term.chars().next()?;
    let last = term.chars().next_back()?;
    let mut pattern = String::new();
    if is_word_char(first) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(term));
    if is_word_char(last) {
        pattern.push_str(r"\b");
    }
    RegexBuilder::new(&pattern).case_insensitive(true).build().ok()
}

pub fn highlight<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<Segment> {
    let mut seen = HashSet::new();
    let patterns: Vec<(&str, Regex)> = terms
        .iter()
        .map(|term| term.as_ref().trim())
        .filter(|term| !term.is_empty() && seen.insert(term.to_lowercase()))
        .filter_map(|term| term_pattern(term).map(|re| (term, re)))
        .collect();

    let mut candidates: Vec<Span> = patterns
        .iter()
        .enumerate()
        .flat_map(|(idx, (_, re))| {
            re.find_iter(text).map(move |m| Span {
                start: m.start(),
                end: m.end(),
                chars: m.as_str().chars().count(),
                term: idx,
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.chars.cmp(&a.chars).then(a.start.cmp(&b.start)));

    // Kept spans never overlap, so only the last one starting before a
    // candidate's end can collide with it.
    let mut chosen: BTreeMap<usize, Span> = BTreeMap::new();
    for candidate in candidates {
        let collides = chosen
            .range(..candidate.end)
            .next_back()
            .is_some_and(|(_, kept)| kept.overlaps(&candidate));
        if !collides {
            chosen.insert(candidate.start, candidate);
        }
    }

    let mut segments = Vec::with_capacity(chosen.len() * 2 + 1);
    let mut cursor = 0;
    for span in chosen.into_values() {
        if span.start > cursor {
            segments.push(Segment::Plain(text[cursor..span.start].to_string()));
        }
        let term = patterns[span.term].0;
        segments.push(Segment::Flagged {
            text: text[span.start..span.end].to_string(),
            term: term.to_string(),
            explanation: explanation_for(term),
        });
        cursor = span.end;
    }
    if cursor < text.len() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::FALLBACK_EXPLANATION;

    fn rejoin(segments: &[Segment]) -> String {
        segments.iter().map(Segment::text).collect()
    }

    fn flagged(segments: &[Segment]) -> Vec<&str> {
        segments.iter().filter(|s| s.is_flagged()).map(Segment::text).collect()
    }

    #[test]
    fn no_terms_leaves_text_alone() {
        let text = "Officials confirmed the budget on Tuesday.";
        let segments = highlight::<&str>(text, &[]);
        assert_eq!(segments, vec![Segment::Plain(text.to_string())]);
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(highlight("", &["shocking"]).is_empty());
    }

    #[test]
    fn every_occurrence_is_wrapped_case_insensitively() {
        let text = "Shocking! Truly SHOCKING, and shocking again.";
        let segments = highlight(text, &["shocking"]);
        assert_eq!(flagged(&segments), vec!["Shocking", "SHOCKING", "shocking"]);
        assert_eq!(rejoin(&segments), text);
    }

    #[test]
    fn substrings_of_larger_words_do_not_match() {
        let text = "A realistic and surreal account, really.";
        let segments = highlight(text, &["real"]);
        assert!(flagged(&segments).is_empty());
        assert_eq!(rejoin(&segments), text);
    }

    #[test]
    fn explanation_comes_from_dictionary_or_fallback() {
        let segments = highlight("A secret miracle cure", &["secret", "miracle"]);
        let explanations: Vec<&str> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Flagged { explanation, .. } => Some(*explanation),
                Segment::Plain(_) => None,
            })
            .collect();
        assert_eq!(
            explanations,
            vec!["Used to create intrigue and imply exclusivity.", FALLBACK_EXPLANATION]
        );
    }

    #[test]
    fn longest_overlapping_term_wins_regardless_of_order() {
        let text = "Watch the shocking footage now";
        for terms in [["shocking", "shocking footage"], ["shocking footage", "shocking"]] {
            let segments = highlight(text, &terms);
            assert_eq!(flagged(&segments), vec!["shocking footage"]);
            assert_eq!(rejoin(&segments), text);
        }
    }

    #[test]
    fn equal_length_overlap_goes_to_earlier_start() {
        let segments = highlight("alpha beta gamma", &["beta gamma", "alpha beta"]);
        assert_eq!(flagged(&segments), vec!["alpha beta"]);
    }

    #[test]
    fn hyphenated_and_punctuated_terms_match() {
        let text = "A mind-blowing cover-up!";
        let segments = highlight(text, &["mind-blowing", "cover-up", "blowing"]);
        assert_eq!(flagged(&segments), vec!["mind-blowing", "cover-up"]);
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let text = "Is it (breaking)? Or breaking.";
        let segments = highlight(text, &["(breaking)"]);
        assert_eq!(flagged(&segments), vec!["(breaking)"]);
        assert_eq!(rejoin(&segments), text);
    }

    #[test]
    fn duplicate_and_blank_terms_are_ignored() {
        let segments = highlight("viral viral", &["viral", "VIRAL", "  ", ""]);
        assert_eq!(flagged(&segments), vec!["viral", "viral"]);
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn headline_scenario_flags_all_three_terms() {
        let text = "BREAKING: shocking secret exposed!";
        let segments = highlight(text, &["shocking", "secret", "exposed"]);
        assert_eq!(flagged(&segments), vec!["shocking", "secret", "exposed"]);
        assert_eq!(segments[0], Segment::Plain("BREAKING: ".into()));
        assert_eq!(rejoin(&segments), text);
    }

    #[test]
    fn many_occurrences_are_all_wrapped() {
        let text = "truth ".repeat(20_000);
        let segments = highlight(&text, &["truth", "the truth"]);
        assert_eq!(segments.len(), 40_000);
        assert_eq!(flagged(&segments).len(), 20_000);
        assert_eq!(rejoin(&segments), text);
    }

    #[test]
    fn short_term_inside_kept_span_is_skipped() {
        let text = "the hidden truth, the truth";
        let segments = highlight(text, &["truth", "hidden truth"]);
        assert_eq!(flagged(&segments), vec!["hidden truth", "truth"]);
        assert_eq!(rejoin(&segments), text);
    }

    #[test]
    fn non_ascii_text_keeps_boundaries() {
        let text = "Скандал: exposé débunked, exposé.";
        let segments = highlight(text, &["exposé"]);
        assert_eq!(flagged(&segments), vec!["exposé", "exposé"]);
        assert_eq!(rejoin(&segments), text);
    }
}
