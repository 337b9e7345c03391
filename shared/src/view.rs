use crate::dictionary::explanation_for;
use crate::highlight::{highlight, Segment};
use crate::state::UiState;
use crate::{ClassificationResult, Label};

pub const NO_SUSPICIOUS_WORDS: &str = "None detected";

/// What the result area shows for a given [`UiState`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Hidden,
    Loading,
    Failed(String),
    Ready(ResultPanel),
}

impl ResultView {
    pub fn from_state(state: &UiState) -> Self {
        match state {
            UiState::Idle => ResultView::Hidden,
            UiState::Loading => ResultView::Loading,
            UiState::Failed(reason) => ResultView::Failed(reason.clone()),
            UiState::Result(result) => ResultView::Ready(ResultPanel::from(result)),
        }
    }

    pub fn shows_verdict(&self) -> bool {
        matches!(self, ResultView::Ready(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub word: String,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub segments: Vec<Segment>,
    pub word_count: u64,
    pub label: Label,
    pub confidence_percent: u8,
    pub chips: Vec<Chip>,
    pub explanation: String,
}

impl ResultPanel {
    pub fn verdict(&self) -> &'static str {
        self.label.verdict()
    }

    pub fn confidence_text(&self) -> String {
        format!("{}%", self.confidence_percent)
    }
}

impl From<&ClassificationResult> for ResultPanel {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            segments: highlight(&result.text, result.suspicious_words.as_slice()),
            word_count: result.word_count.unwrap_or_else(|| count_words(&result.text)),
            label: result.label,
            confidence_percent: confidence_percent(result.confidence),
            chips: result
                .suspicious_words
                .iter()
                .map(|word| Chip {
                    word: word.clone(),
                    explanation: explanation_for(word),
                })
                .collect(),
            explanation: result.explanation.clone(),
        }
    }
}

pub fn confidence_percent(confidence: f64) -> u8 {
    if !confidence.is_finite() {
        return 0;
    }
    (confidence * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn count_words(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}
