use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use shared::{endpoint_url, ErrorResponse, InputMode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("No file uploaded")]
    MissingFile,
    #[error("Unsupported file format")]
    UnsupportedFormat,
    #[error("Failed to read upload: {0}")]
    Upload(String),
    #[error("Classification service unavailable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MissingFile | ProxyError::UnsupportedFormat | ProxyError::Upload(_) => {
                StatusCode::BAD_REQUEST
            }
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse { error: self.to_string() })
    }
}

pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Forwards prediction requests to the classification service and relays
/// its status and body unchanged.
#[derive(Clone)]
pub struct Classifier {
    client: reqwest::Client,
    base_url: String,
}

impl Classifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn forward_json<T: Serialize>(
        &self,
        mode: InputMode,
        body: &T,
    ) -> Result<HttpResponse, ProxyError> {
        let upstream = self
            .client
            .post(endpoint_url(&self.base_url, mode))
            .json(body)
            .send()
            .await?;
        relay(upstream).await
    }

    pub async fn forward_file(&self, upload: UploadedFile) -> Result<HttpResponse, ProxyError> {
        let part = Part::bytes(upload.bytes).file_name(upload.name);
        let form = Form::new().part("file", part);
        let upstream = self
            .client
            .post(endpoint_url(&self.base_url, InputMode::File))
            .multipart(form)
            .send()
            .await?;
        relay(upstream).await
    }
}

async fn relay(upstream: reqwest::Response) -> Result<HttpResponse, ProxyError> {
    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    if !status.is_success() {
        log::warn!("Classification service answered {}", status);
    }

    let body = upstream.bytes().await?;
    Ok(HttpResponse::build(status).content_type(content_type).body(body))
}
