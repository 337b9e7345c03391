use super::super::Msg;
use super::super::{Model, SelectedFile};
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use shared::state::Ticket;
use shared::{ClassificationRequest, ClassificationResult, InputMode, InputSelection, SubmitError};
use shared::is_supported_upload;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const NOTICE_MS: u32 = 2000;

pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: Option<GlooFile>) -> bool {
    match file {
        Some(file) if !is_supported_upload(&file.name()) => {
            log::warn!("Rejected upload: {}", file.name());
            model.file = None;
            show_notice(model, ctx, SubmitError::UnsupportedFile(file.name()).to_string())
        }
        file => {
            model.file = file.map(|file| SelectedFile { file });
            true
        }
    }
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    let selection = match model.mode {
        InputMode::Text => InputSelection::Text(model.text.clone()),
        InputMode::Url => InputSelection::Url(model.url.clone()),
        InputMode::File => InputSelection::File(model.file.clone()),
    };

    match model.submissions.submit(selection) {
        Ok((ticket, request)) => {
            // A reveal still waiting on its timer belongs to an older ticket.
            if let Some(timeout) = model.reveal_timeout.take() {
                timeout.cancel();
            }
            model.notice = None;
            model.notice_timeout = None;
            log::info!("Submitting {} request {}", request.mode(), ticket);
            send_classification_request(ctx, ticket, request, model.config.api_base.clone());
            true
        }
        Err(err) => show_notice(model, ctx, err.to_string()),
    }
}

pub fn handle_response(
    model: &mut Model,
    ctx: &Context<Model>,
    ticket: Ticket,
    outcome: Result<ClassificationResult, SubmitError>,
) -> bool {
    if model.submissions.latest() != Some(ticket) {
        log::warn!("Dropping response for superseded request {}", ticket);
        return false;
    }

    let delay = model.config.result_delay_ms;
    if delay == 0 {
        return handle_reveal(model, ticket, outcome);
    }

    let link = ctx.link().clone();
    model.reveal_timeout = Some(Timeout::new(delay, move || {
        link.send_message(Msg::Reveal(ticket, outcome));
    }));
    false
}

pub fn handle_reveal(
    model: &mut Model,
    ticket: Ticket,
    outcome: Result<ClassificationResult, SubmitError>,
) -> bool {
    model.reveal_timeout = None;
    if let Err(err) = &outcome {
        log::error!("Request {} failed: {}", ticket, err);
    }
    if !model.submissions.complete(ticket, outcome) {
        log::warn!("Dropping response for superseded request {}", ticket);
        return false;
    }
    log::info!("Request {} completed", ticket);
    true
}

pub fn show_notice(model: &mut Model, ctx: &Context<Model>, message: String) -> bool {
    let link = ctx.link().clone();
    model.notice = Some(message);
    model.notice_timeout = Some(Timeout::new(NOTICE_MS, move || {
        link.send_message(Msg::DismissNotice);
    }));
    true
}

pub fn send_classification_request(
    ctx: &Context<Model>,
    ticket: Ticket,
    request: ClassificationRequest<SelectedFile>,
    api_base: String,
) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = classify(&api_base, request).await;
            link.send_message(Msg::Response(ticket, outcome));
        }
    });
}

fn js_error(err: JsValue) -> SubmitError {
    SubmitError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

async fn classify(
    api_base: &str,
    request: ClassificationRequest<SelectedFile>,
) -> Result<ClassificationResult, SubmitError> {
    let url = request.endpoint_url(api_base);
    let builder = Request::post(&url);

    let prepared = match request {
        ClassificationRequest::Text(body) => builder.json(&body),
        ClassificationRequest::Url(body) => builder.json(&body),
        ClassificationRequest::File(selected) => {
            let form_data = web_sys::FormData::new().map_err(js_error)?;
            form_data
                .append_with_blob_and_filename("file", selected.file.as_ref(), &selected.file.name())
                .map_err(js_error)?;
            builder.body(form_data)
        }
    }
    .map_err(|e| SubmitError::Network(e.to_string()))?;

    let response = prepared
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<ClassificationResult>()
            .await
            .map_err(|e| SubmitError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::from_response(status, &body))
    }
}
