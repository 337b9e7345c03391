use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

pub mod dictionary;
pub mod error;
pub mod highlight;
pub mod state;
pub mod view;

pub use error::SubmitError;

/// Extensions the file picker and the upload route accept.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["txt", "docx"];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Text,
    Url,
    File,
}

impl InputMode {
    pub fn endpoint(self) -> &'static str {
        match self {
            InputMode::Text => "predict-text",
            InputMode::Url => "predict-url",
            InputMode::File => "predict-file",
        }
    }
}

/// Joins the service base address and the endpoint for `mode`.
/// An empty base yields a same-origin path.
pub fn endpoint_url(api_base: &str, mode: InputMode) -> String {
    format!("{}/{}", api_base.trim().trim_end_matches('/'), mode.endpoint())
}

/// Picks the service base address for this page load: the `?api=` value,
/// then the operator-set stored value, then the build-time value. Empty
/// means same origin. Nothing here is written back.
pub fn resolve_api_base(query: Option<&str>, stored: Option<&str>, built_in: Option<&str>) -> String {
    query
        .or(stored)
        .or(built_in)
        .map(|base| base.trim().trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// Anything that can be sent as the `file` multipart field.
pub trait Upload {
    fn file_name(&self) -> String;
}

pub fn is_supported_upload(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

/// The value the user is about to submit. Only the active mode's value is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSelection<F> {
    Text(String),
    Url(String),
    File(Option<F>),
}

impl<F: Upload> InputSelection<F> {
    pub fn mode(&self) -> InputMode {
        match self {
            InputSelection::Text(_) => InputMode::Text,
            InputSelection::Url(_) => InputMode::Url,
            InputSelection::File(_) => InputMode::File,
        }
    }

    pub fn into_request(self) -> Result<ClassificationRequest<F>, SubmitError> {
        match self {
            InputSelection::Text(text) if text.trim().is_empty() => Err(SubmitError::EmptyInput),
            InputSelection::Text(text) => Ok(ClassificationRequest::Text(TextRequest { text })),
            InputSelection::Url(url) => {
                let url = url.trim();
                if url.is_empty() {
                    return Err(SubmitError::EmptyInput);
                }
                Ok(ClassificationRequest::Url(UrlRequest { url: url.to_string() }))
            }
            InputSelection::File(None) => Err(SubmitError::EmptyInput),
            InputSelection::File(Some(file)) => {
                let name = file.file_name();
                if !is_supported_upload(&name) {
                    return Err(SubmitError::UnsupportedFile(name));
                }
                Ok(ClassificationRequest::File(file))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationRequest<F> {
    Text(TextRequest),
    Url(UrlRequest),
    File(F),
}

impl<F> ClassificationRequest<F> {
    pub fn mode(&self) -> InputMode {
        match self {
            ClassificationRequest::Text(_) => InputMode::Text,
            ClassificationRequest::Url(_) => InputMode::Url,
            ClassificationRequest::File(_) => InputMode::File,
        }
    }

    pub fn endpoint_url(&self, api_base: &str) -> String {
        endpoint_url(api_base, self.mode())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Label {
    Real,
    #[default]
    Fake,
}

impl Label {
    pub fn is_real(self) -> bool {
        self == Label::Real
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Label::Real => "✅ Real",
            Label::Fake => "❌ Fake",
        }
    }
}

// Anything the service sends other than "Real" is shown as Fake.
impl From<String> for Label {
    fn from(raw: String) -> Self {
        if raw.trim().eq_ignore_ascii_case("real") {
            Label::Real
        } else {
            Label::Fake
        }
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.to_string()
    }
}

// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: Label,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,
    #[serde(default)]
    pub word_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suspicious_words: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
