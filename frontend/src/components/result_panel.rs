use super::super::Model;
use shared::highlight::Segment;
use shared::view::{ResultPanel, ResultView, NO_SUSPICIOUS_WORDS};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    match ResultView::from_state(model.submissions.state()) {
        ResultView::Hidden => html! {},
        ResultView::Loading => html! {
            <div class="results-container loading">
                <div class="loading-overlay">
                    <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                    <p>{"Analyzing..."}</p>
                </div>
            </div>
        },
        ResultView::Failed(reason) => html! {
            <div class="results-container failed">
                <div class="error-message">
                    <i class="fa-solid fa-triangle-exclamation"></i>
                    <p>{ reason }</p>
                </div>
            </div>
        },
        ResultView::Ready(panel) => render_panel(&panel),
    }
}

fn render_panel(panel: &ResultPanel) -> Html {
    let is_real = panel.label.is_real();

    html! {
        <div class={classes!("results-container", if is_real { "not-fake" } else { "fake-detected" })}>
            <section class="extracted-text">
                <h3>{"Extracted Text"}</h3>
                <p class="highlighted">
                    { for panel.segments.iter().map(render_segment) }
                </p>
                <p class="word-count">{ format!("Word Count: {}", panel.word_count) }</p>
            </section>

            <section class="prediction">
                <h3>{"Prediction"}</h3>
                <div class="verdict">{ panel.verdict() }</div>
                <div class="confidence-meter">
                    <div class="meter-label">{"Confidence:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", panel.confidence_percent)}></div>
                    </div>
                    <div class="meter-value">{ panel.confidence_text() }</div>
                </div>

                <p class="result-label">{"Suspicious Words:"}</p>
                <div class="chips">
                    {
                        if panel.chips.is_empty() {
                            html! { <p>{ NO_SUSPICIOUS_WORDS }</p> }
                        } else {
                            panel.chips.iter().enumerate().map(|(i, chip)| html! {
                                <span
                                    key={i}
                                    class="chip"
                                    title={chip.explanation}
                                    aria-label={format!("{}: {}", chip.word, chip.explanation)}
                                >
                                    { &chip.word }
                                </span>
                            }).collect::<Html>()
                        }
                    }
                </div>

                <p class="result-label">{"Explanation:"}</p>
                <p class="explanation">{ &panel.explanation }</p>
            </section>
        </div>
    }
}

fn render_segment(segment: &Segment) -> Html {
    match segment {
        Segment::Plain(text) => html! { <>{ text.clone() }</> },
        Segment::Flagged { text, explanation, .. } => html! {
            <mark class="flagged" title={*explanation}>{ text.clone() }</mark>
        },
    }
}
