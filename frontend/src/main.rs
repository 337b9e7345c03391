mod components;
mod config;

use components::handlers;
use components::header::render_header;
use components::input_form::render_input_form;
use components::result_panel::render_results;
use components::utils::render_notice;
use config::AppConfig;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::state::{Submissions, Ticket};
use shared::{ClassificationResult, InputMode, SubmitError, Upload};
use yew::prelude::*;

// Models
#[derive(Clone)]
struct SelectedFile {
    file: GlooFile,
}

impl Upload for SelectedFile {
    fn file_name(&self) -> String {
        self.file.name()
    }
}

// Yew msg components
enum Msg {
    // Form input
    SetMode(InputMode),
    SetText(String),
    SetUrl(String),
    FileChosen(Option<GlooFile>),

    // Submission lifecycle
    Submit,
    Response(Ticket, Result<ClassificationResult, SubmitError>),
    Reveal(Ticket, Result<ClassificationResult, SubmitError>),

    // Notices
    DismissNotice,
}

// Main component
struct Model {
    config: AppConfig,
    mode: InputMode,
    text: String,
    url: String,
    file: Option<SelectedFile>,
    submissions: Submissions,
    notice: Option<String>,
    notice_timeout: Option<Timeout>,
    reveal_timeout: Option<Timeout>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: AppConfig::load(),
            mode: InputMode::Text,
            text: String::new(),
            url: String::new(),
            file: None,
            submissions: Submissions::new(),
            notice: None,
            notice_timeout: None,
            reveal_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetMode(mode) => {
                let changed = self.mode != mode;
                self.mode = mode;
                changed
            }
            Msg::SetText(text) => {
                self.text = text;
                false
            }
            Msg::SetUrl(url) => {
                self.url = url;
                false
            }
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),

            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Response(ticket, outcome) => handlers::handle_response(self, ctx, ticket, outcome),
            Msg::Reveal(ticket, outcome) => handlers::handle_reveal(self, ticket, outcome),

            Msg::DismissNotice => {
                self.notice = None;
                self.notice_timeout = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_input_form(self, ctx) }
                    { render_notice(self) }
                    { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"NewsDetector | Fullstack Rust WASM"}</p>
                    <p class="service-address">
                        { format!("Classification service: {}", config::service_label(&self.config.api_base)) }
                    </p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
