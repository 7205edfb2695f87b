use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dnd::CollisionStrategy;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid board config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Pixels the pointer must travel after pointerdown before a drag starts.
    pub activation_distance: f64,
    pub collision: CollisionStrategy,
    /// Enables Space/Enter pick-up and arrow-key moves on focused cards.
    pub keyboard: bool,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            activation_distance: 0.0,
            collision: CollisionStrategy::default(),
            keyboard: true,
            log_filter: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Reads overrides embedded in the page, falling back to defaults.
    /// Returns the error alongside so it can be reported once logging is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        let embedded = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match embedded {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            None => (Self::default(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_defaults() {
        assert_eq!(BoardConfig::from_json("  ").unwrap(), BoardConfig::default());
        assert_eq!(BoardConfig::from_json("{}").unwrap(), BoardConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = BoardConfig::from_json(
            r#"{ "collision": "rect_intersection", "activation_distance": 8 }"#,
        )
        .unwrap();
        assert_eq!(config.collision, CollisionStrategy::RectIntersection);
        assert_eq!(config.activation_distance, 8.0);
        assert!(config.keyboard);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = BoardConfig::from_json(r#"{ "keyboard": "yes" }"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid board config"));
        assert!(BoardConfig::from_json("{").is_err());
    }
}
