//! Tab bar configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use floatbar_tabs::{ScrollBehavior, TabBarStateMachine, SCROLL_THRESHOLD};

use crate::error::CoreError;
use crate::Result;

/// Padding or margin, either uniform or per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    Uniform(f64),
    Axes {
        #[serde(default)]
        horizontal: f64,
        #[serde(default)]
        vertical: f64,
    },
}

impl Spacing {
    /// `(horizontal, vertical)`
    pub fn resolve(&self) -> (f64, f64) {
        match *self {
            Spacing::Uniform(value) => (value, value),
            Spacing::Axes {
                horizontal,
                vertical,
            } => (horizontal, vertical),
        }
    }
}

/// How scroll samples from the host's scroll view reach the bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollConnection {
    pub scroll_threshold: f64,
    pub enable_scroll_connection: bool,
}

impl Default for ScrollConnection {
    fn default() -> Self {
        Self {
            scroll_threshold: SCROLL_THRESHOLD,
            enable_scroll_connection: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabBarConfig {
    pub tab_bar_background_color: String,
    #[serde(alias = "borderRadius")]
    pub corner_radius: f64,
    pub elevation: f64,
    pub shadow_color: String,
    pub shadow_opacity: f64,
    pub shadow_radius: f64,
    pub padding: Spacing,
    pub margin: Spacing,
    /// Start in inline mode
    pub is_inline: bool,
    pub scroll_behavior: ScrollBehavior,
    /// Transition animation length in milliseconds
    pub animation_duration: u64,
    pub expanded_height: f64,
    pub inline_height: f64,
    pub selected_color: String,
    pub unselected_color: String,
    pub scroll_connection: ScrollConnection,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            tab_bar_background_color: "#FFFFFF".to_string(),
            corner_radius: 25.0,
            elevation: 0.0,
            shadow_color: "#000000".to_string(),
            shadow_opacity: 0.1,
            shadow_radius: 10.0,
            padding: Spacing::Uniform(8.0),
            margin: Spacing::Uniform(16.0),
            is_inline: false,
            scroll_behavior: ScrollBehavior::OnScrollDown,
            animation_duration: 300,
            expanded_height: 64.0,
            inline_height: 48.0,
            selected_color: "#007AFF".to_string(),
            unselected_color: "#8E8E93".to_string(),
            scroll_connection: ScrollConnection::default(),
        }
    }
}

impl TabBarConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, color) in [
            ("tabBarBackgroundColor", &self.tab_bar_background_color),
            ("shadowColor", &self.shadow_color),
            ("selectedColor", &self.selected_color),
            ("unselectedColor", &self.unselected_color),
        ] {
            if !is_hex_color(color) {
                return Err(CoreError::Config(format!("{} is not a hex color: {}", name, color)));
            }
        }

        let (padding_h, padding_v) = self.padding.resolve();
        let (margin_h, margin_v) = self.margin.resolve();
        for (name, value) in [
            ("cornerRadius", self.corner_radius),
            ("elevation", self.elevation),
            ("shadowRadius", self.shadow_radius),
            ("padding.horizontal", padding_h),
            ("padding.vertical", padding_v),
            ("margin.horizontal", margin_h),
            ("margin.vertical", margin_v),
            ("expandedHeight", self.expanded_height),
            ("inlineHeight", self.inline_height),
            ("scrollConnection.scrollThreshold", self.scroll_connection.scroll_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.shadow_opacity) {
            return Err(CoreError::Config(format!(
                "shadowOpacity must be between 0 and 1, got {}",
                self.shadow_opacity
            )));
        }

        if self.inline_height > self.expanded_height {
            return Err(CoreError::Config(format!(
                "inlineHeight ({}) exceeds expandedHeight ({})",
                self.inline_height, self.expanded_height
            )));
        }

        Ok(())
    }

    /// Build a state machine for this configuration
    pub fn state_machine(&self) -> Result<TabBarStateMachine> {
        Ok(TabBarStateMachine::with_threshold(
            self.scroll_behavior,
            true,
            self.scroll_connection.scroll_threshold,
        )?)
    }
}

/// `#RGB`, `#RRGGBB` or `#AARRGGBB`
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TabBarConfig::default();
        config.validate().unwrap();
        assert_eq!(config.animation_duration(), Duration::from_millis(300));
        assert_eq!(config.padding.resolve(), (8.0, 8.0));
        assert_eq!(config.margin.resolve(), (16.0, 16.0));
    }

    #[test]
    fn test_from_json() {
        let config = TabBarConfig::from_json(
            r##"{
                "tabBarBackgroundColor": "#202020",
                "borderRadius": 12,
                "padding": { "horizontal": 12, "vertical": 4 },
                "margin": 10,
                "scrollBehavior": "onScrollUp",
                "scrollConnection": { "scrollThreshold": 80 }
            }"##,
        )
        .unwrap();

        assert_eq!(config.tab_bar_background_color, "#202020");
        assert_eq!(config.corner_radius, 12.0);
        assert_eq!(config.padding.resolve(), (12.0, 4.0));
        assert_eq!(config.margin.resolve(), (10.0, 10.0));
        assert_eq!(config.scroll_behavior, ScrollBehavior::OnScrollUp);
        assert_eq!(config.scroll_connection.scroll_threshold, 80.0);
        assert!(config.scroll_connection.enable_scroll_connection);
        // Untouched fields keep defaults
        assert_eq!(config.expanded_height, 64.0);
    }

    #[test]
    fn test_unknown_scroll_behavior_rejected() {
        let result = TabBarConfig::from_json(r#"{ "scrollBehavior": "sometimes" }"#);
        assert!(matches!(result, Err(CoreError::Json(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = TabBarConfig::from_json(r#"{ "shadowColor": "black" }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));

        let result = TabBarConfig::from_json(r#"{ "shadowOpacity": 1.5 }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));

        let result = TabBarConfig::from_json(r#"{ "scrollConnection": { "scrollThreshold": -5 } }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));

        let result = TabBarConfig::from_json(r#"{ "inlineHeight": 90 }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));

        // Negative durations do not fit the type
        let result = TabBarConfig::from_json(r#"{ "animationDuration": -1 }"#);
        assert!(matches!(result, Err(CoreError::Json(_))));
    }

    #[test]
    fn test_hex_colors() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#007AFF"));
        assert!(is_hex_color("#80000000"));
        assert!(!is_hex_color("007AFF"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#GGGGGG"));
    }

    #[test]
    fn test_json_roundtrip_keeps_names() {
        let json = TabBarConfig::default().to_json().unwrap();
        assert!(json.contains("\"tabBarBackgroundColor\""));
        assert!(json.contains("\"scrollBehavior\": \"onScrollDown\""));

        let parsed = TabBarConfig::from_json(&json).unwrap();
        assert_eq!(parsed, TabBarConfig::default());
    }

    #[test]
    fn test_state_machine_uses_config() {
        let config = TabBarConfig {
            scroll_behavior: ScrollBehavior::Never,
            scroll_connection: ScrollConnection {
                scroll_threshold: 20.0,
                enable_scroll_connection: true,
            },
            ..TabBarConfig::default()
        };

        let machine = config.state_machine().unwrap();
        assert_eq!(machine.scroll_mode(), ScrollBehavior::Never);
        assert_eq!(machine.threshold(), 20.0);
    }
}
