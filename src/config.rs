//! Client Configuration
//!
//! Defaults match the site as deployed. A page may override any field with a
//! JSON object in `<meta name="recipe-config" content='{...}'>`.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsCast;

pub const CONFIG_META_NAME: &str = "recipe-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    /// Utterance language
    pub lang: String,
    /// Preferred voices have a language starting with this
    pub voice_prefix: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            lang: "bg-BG".to_string(),
            voice_prefix: "bg".to_string(),
            rate: 0.9,
            pitch: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Absolute API origin; the page's own origin when unset
    pub api_base: Option<String>,
    pub debounce_ms: u32,
    pub notification_ms: u32,
    /// localStorage key of the theme preference
    pub theme_key: String,
    pub log_level: String,
    pub speech: SpeechSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            debounce_ms: 300,
            notification_ms: 3000,
            theme_key: "theme".to_string(),
            log_level: "info".to_string(),
            speech: SpeechSettings::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `overrides`, if any
    pub fn from_meta(overrides: Option<&str>) -> Result<Self, serde_json::Error> {
        match overrides.map(str::trim).filter(|s| !s.is_empty()) {
            Some(json) => serde_json::from_str(json),
            None => Ok(Self::default()),
        }
    }

    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn api_base(&self) -> String {
        self.api_base
            .clone()
            .or_else(window_origin)
            .unwrap_or_default()
    }
}

fn window_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

/// Content of the config `<meta>` tag
pub fn read_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    let meta = document.query_selector(&selector).ok()??;
    meta.dyn_into::<web_sys::HtmlMetaElement>().ok().map(|m| m.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        assert_eq!(ClientConfig::from_meta(None).unwrap(), ClientConfig::default());
        assert_eq!(ClientConfig::from_meta(Some("  ")).unwrap(), ClientConfig::default());
        let config = ClientConfig::default();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.notification_ms, 3000);
        assert_eq!(config.log_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = ClientConfig::from_meta(Some(
            r#"{"api_base":"http://pi.local:5002","log_level":"debug","speech":{"rate":1.2}}"#,
        ))
        .unwrap();
        assert_eq!(config.api_base(), "http://pi.local:5002");
        assert_eq!(config.log_filter(), LevelFilter::Debug);
        assert_eq!(config.speech.rate, 1.2);
        assert_eq!(config.speech.lang, "bg-BG");
        assert_eq!(config.theme_key, "theme");
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(ClientConfig::from_meta(Some("{debounce_ms: 5")).is_err());
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = ClientConfig { log_level: "chatty".into(), ..Default::default() };
        assert_eq!(config.log_filter(), LevelFilter::Info);
    }
}
