use gloo_storage::{LocalStorage, Storage};
use shared::resolve_api_base;
use web_sys::UrlSearchParams;

const API_BASE_KEY: &str = "newsdetector.api_base";
const DEFAULT_RESULT_DELAY_MS: u32 = 1000;

/// Runtime settings, resolved once when the app mounts.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for `/predict-*`. Empty means same origin.
    pub api_base: String,
    /// Cosmetic pause before a result is revealed. Zero shows it immediately.
    pub result_delay_ms: u32,
}

impl AppConfig {
    pub fn load() -> Self {
        let api_base = api_base_for_page();
        let result_delay_ms = query_param("delay")
            .or_else(|| option_env!("NEWSDETECTOR_RESULT_DELAY_MS").map(str::to_string))
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_RESULT_DELAY_MS);

        log::info!("Classification service: {}", service_label(&api_base));

        Self { api_base, result_delay_ms }
    }
}

// ?api= applies to this page load only; the stored value is set by an operator.
fn api_base_for_page() -> String {
    let query = query_param("api");
    let stored = LocalStorage::get::<String>(API_BASE_KEY).ok();
    resolve_api_base(query.as_deref(), stored.as_deref(), option_env!("NEWSDETECTOR_API_BASE"))
}

fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

pub fn service_label(api_base: &str) -> &str {
    if api_base.is_empty() { "same origin" } else { api_base }
}
