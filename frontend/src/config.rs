use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global(object: &str, keys: [&str; 2]) -> Option<String> {
    // Expect optional global object: window.<object> = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &object.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn snapshot_from_globals() -> Option<String> {
    read_global("__OFFICE_CONSOLE_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__OFFICE_CONSOLE_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let resp = reqwest::get(config_json_url())
        .await
        .context("config.json request failed")?;
    if !resp.status().is_success() {
        bail!("config.json returned {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not valid runtime config")
}

fn config_json_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/config.json", origin))
        .unwrap_or_else(|| "./config.json".to_string())
}

/// Trims whitespace and trailing slashes; blank values are rejected.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// First usable candidate wins; the default applies when none is usable.
pub fn resolve_base_url<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|candidate| normalize_base_url(&candidate))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals().and_then(|v| normalize_base_url(&v)) {
        return cache_base_url(existing);
    }
    let from_file = match fetch_runtime_config().await {
        Ok(cfg) => cfg.api_base_url,
        Err(err) => {
            log::warn!("runtime config unavailable, using default: {:#}", err);
            None
        }
    };
    cache_base_url(resolve_base_url([from_file]))
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_trailing_slashes_and_blank() {
        assert_eq!(
            normalize_base_url(" http://hr.local:3001/ ").as_deref(),
            Some("http://hr.local:3001")
        );
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("///"), None);
    }

    #[test]
    fn resolve_picks_first_usable_candidate() {
        let resolved = resolve_base_url([None, Some("  ".into()), Some("https://api.example.com/".into())]);
        assert_eq!(resolved, "https://api.example.com");
    }

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(resolve_base_url([None, None]), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn runtime_config_parses_optional_base_url() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.api_base_url.is_none());
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://hr.example.com"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://hr.example.com"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn env_global_takes_precedence_over_config_global() {
        let window = web_sys::window().unwrap();
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"API_BASE_URL".into(), &"https://env.example.com".into())
            .unwrap();
        let cfg = js_sys::Object::new();
        js_sys::Reflect::set(&cfg, &"api_base_url".into(), &"https://cfg.example.com".into())
            .unwrap();
        js_sys::Reflect::set(&window, &"__OFFICE_CONSOLE_ENV".into(), &env).unwrap();
        js_sys::Reflect::set(&window, &"__OFFICE_CONSOLE_CONFIG".into(), &cfg).unwrap();

        assert_eq!(
            snapshot_from_globals().as_deref(),
            Some("https://env.example.com")
        );
    }
}
