//! Presentation model handed to renderers

use serde::Serialize;

use floatbar_tabs::{IconSource, TabBarState, TabDescriptor};

use crate::config::TabBarConfig;

const EXPANDED_ICON_SIZE: f64 = 24.0;
const INLINE_ICON_SIZE: f64 = 20.0;
const EXPANDED_GLYPH_SIZE: f64 = 20.0;
const INLINE_GLYPH_SIZE: f64 = 18.0;
const DEFAULT_BADGE_COLOR: &str = "#FF0000";

/// Geometry of the bar for the current mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarLayout {
    pub height: f64,
    pub icon_size: f64,
    /// Text size for font glyph icons
    pub glyph_size: f64,
    pub show_titles: bool,
    pub padding: (f64, f64),
    pub margin: (f64, f64),
    pub corner_radius: f64,
    pub animation_duration_ms: u64,
}

impl BarLayout {
    pub fn compute(config: &TabBarConfig, state: &TabBarState) -> Self {
        let (height, icon_size, glyph_size) = if state.is_inline {
            (config.inline_height, INLINE_ICON_SIZE, INLINE_GLYPH_SIZE)
        } else {
            (config.expanded_height, EXPANDED_ICON_SIZE, EXPANDED_GLYPH_SIZE)
        };

        Self {
            height,
            icon_size,
            glyph_size,
            show_titles: state.is_expanded,
            padding: config.padding.resolve(),
            margin: config.margin.resolve(),
            corner_radius: config.corner_radius,
            animation_duration_ms: config.animation_duration,
        }
    }
}

/// One tab as a renderer should draw it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabPresentation {
    pub key: String,
    /// `None` when the title is hidden
    pub title: Option<String>,
    pub icon: Option<IconSource>,
    pub icon_class: Option<String>,
    pub badge: Option<String>,
    pub badge_color: String,
    pub selected: bool,
    pub enabled: bool,
    /// Text and glyph color
    pub tint: String,
}

impl TabPresentation {
    pub fn new(tab: &TabDescriptor, state: &TabBarState, config: &TabBarConfig) -> Self {
        let selected = tab.key == state.selected_tab_key;
        let show_title = state.is_expanded && !tab.is_standalone && !tab.title.is_empty();

        Self {
            key: tab.key.clone(),
            title: show_title.then(|| tab.title.clone()),
            icon: tab.icon.clone(),
            icon_class: tab.icon_class.clone(),
            badge: tab.badge.as_ref().map(|badge| badge.to_string()),
            badge_color: tab
                .badge_color
                .clone()
                .unwrap_or_else(|| DEFAULT_BADGE_COLOR.to_string()),
            selected,
            enabled: tab.enabled,
            tint: if selected {
                config.selected_color.clone()
            } else {
                config.unselected_color.clone()
            },
        }
    }

    pub fn for_tabs(tabs: &[TabDescriptor], state: &TabBarState, config: &TabBarConfig) -> Vec<Self> {
        tabs.iter()
            .map(|tab| Self::new(tab, state, config))
            .collect()
    }
}
