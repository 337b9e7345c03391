use super::super::Model;
use super::super::Msg;
use super::utils::{debounce, mode_label};
use shared::{InputMode, ACCEPTED_EXTENSIONS};
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn render_input_form(model: &Model, ctx: &Context<Model>) -> Html {
    let loading = model.submissions.is_loading();
    let link = ctx.link().clone();

    html! {
        <div class="upload-section">
            <div class="mode-selector">
                { for InputMode::iter().map(|mode| render_mode_button(model, ctx, mode, loading)) }
            </div>

            { render_mode_input(model, ctx, loading) }

            <div class="button-container">
                <button
                    class="analyze-btn"
                    disabled={loading}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Submit)
                    })}
                >
                    { render_analyze_button_content(loading) }
                </button>
            </div>
        </div>
    }
}

fn render_mode_button(model: &Model, ctx: &Context<Model>, mode: InputMode, loading: bool) -> Html {
    let is_active = model.mode == mode;

    html! {
        <button
            key={mode.as_ref()}
            class={classes!("mode-btn", is_active.then_some("active"))}
            disabled={loading}
            onclick={ctx.link().callback(move |_| Msg::SetMode(mode))}
        >
            { mode_label(mode) }
        </button>
    }
}

fn render_mode_input(model: &Model, ctx: &Context<Model>, loading: bool) -> Html {
    let link = ctx.link();

    match model.mode {
        InputMode::Text => {
            let on_input = link.callback(|e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                Msg::SetText(area.value())
            });
            html! {
                <textarea
                    class="text-input"
                    rows="6"
                    placeholder="Paste news text here..."
                    value={model.text.clone()}
                    oninput={on_input}
                    disabled={loading}
                />
            }
        }
        InputMode::Url => {
            let on_input = link.callback(|e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::SetUrl(input.value())
            });
            html! {
                <input
                    type="text"
                    class="text-input"
                    placeholder="Enter article URL..."
                    value={model.url.clone()}
                    oninput={on_input}
                    disabled={loading}
                />
            }
        }
        InputMode::File => {
            let on_change = link.callback(|e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let file = input
                    .files()
                    .and_then(|files| files.item(0))
                    .map(gloo_file::File::from);
                Msg::FileChosen(file)
            });
            let accept = ACCEPTED_EXTENSIONS
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect::<Vec<_>>()
                .join(",");
            let chosen = model.file.as_ref().map(|selected| selected.file.name());

            html! {
                <div class="file-input">
                    <input
                        type="file"
                        id="file-input"
                        accept={accept}
                        onchange={on_change}
                        disabled={loading}
                    />
                    <span class="file-types">
                        { chosen.unwrap_or_else(|| "Only .txt or .docx files supported".to_string()) }
                    </span>
                </div>
            }
        }
    }
}

fn render_analyze_button_content(loading: bool) -> Html {
    if loading {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze"}</> }
    }
}
