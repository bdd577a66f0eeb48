use log::{warn, Level};
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::error::HeroError;

/// Id of the optional inline JSON block in `index.html` that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "hero-config";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub logo_src: String,
    pub logo_alt: String,
    pub scroll_threshold: f64,
    pub frame_interval_ms: u32,
    pub title_lines: Vec<String>,
    pub subtitle: String,
    pub tagline: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            logo_src: "/image.png".to_string(),
            logo_alt: "IoT Club Logo".to_string(),
            scroll_threshold: 100.0,
            frame_interval_ms: 16,
            title_lines: vec!["IOT".to_string(), "CLUB".to_string()],
            subtitle: "Vishwakarma Institute of Technology, Kondhwa".to_string(),
            tagline: "Innovating Tomorrow's Connected World Through Technology & Learning"
                .to_string(),
        }
    }
}

impl HeroConfig {
    pub fn from_json(raw: &str) -> Result<Self, HeroError> {
        let config: HeroConfig = serde_json::from_str(raw)?;
        config.validated()
    }

    fn validated(self) -> Result<Self, HeroError> {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(HeroError::Config(format!(
                "scroll_threshold must be a non-negative number, got {}",
                self.scroll_threshold
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(HeroError::Config("frame_interval_ms must be at least 1".to_string()));
        }
        Ok(self)
    }

    /// Reads overrides from the page, falling back to defaults on any problem.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring page config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = HeroConfig::from_json("{}").unwrap();
        assert_eq!(config, HeroConfig::default());
        assert_eq!(config.logo_src, "/image.png");
        assert_eq!(config.scroll_threshold, 100.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = HeroConfig::from_json(r#"{"logo_src": "/club.svg", "scroll_threshold": 240}"#)
            .unwrap();
        assert_eq!(config.logo_src, "/club.svg");
        assert_eq!(config.scroll_threshold, 240.0);
        assert_eq!(config.title_lines, vec!["IOT", "CLUB"]);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = HeroConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, HeroError::Config(_)));
    }

    #[test]
    fn rejects_negative_threshold_and_zero_interval() {
        assert!(HeroConfig::from_json(r#"{"scroll_threshold": -1}"#).is_err());
        assert!(HeroConfig::from_json(r#"{"frame_interval_ms": 0}"#).is_err());
    }
}
