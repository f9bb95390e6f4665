//! Tab descriptors
//!
//! What the host knows about each tab. The state machine only ever sees the
//! key; uniqueness of keys is up to whoever builds the tab set.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::icon::IconSource;

/// Badge shown on a tab, either free text or a counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Badge {
    Count(u32),
    Text(String),
}

impl Badge {
    pub fn is_empty(&self) -> bool {
        matches!(self, Badge::Text(text) if text.is_empty())
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Badge::Count(count) => write!(f, "{}", count),
            Badge::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<u32> for Badge {
    fn from(count: u32) -> Self {
        Badge::Count(count)
    }
}

impl From<&str> for Badge {
    fn from(text: &str) -> Self {
        Badge::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDescriptor {
    /// Stable identifier passed to `select_tab`
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: Option<IconSource>,
    /// Font family used for glyph icons
    #[serde(default)]
    pub icon_class: Option<String>,
    /// Icon only, never shows a title
    #[serde(default)]
    pub is_standalone: bool,
    #[serde(default, deserialize_with = "non_empty_badge")]
    pub badge: Option<Badge>,
    #[serde(default)]
    pub badge_color: Option<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Empty text badges mean "no badge"
fn non_empty_badge<'de, D>(deserializer: D) -> Result<Option<Badge>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Badge>::deserialize(deserializer)?.filter(|badge| !badge.is_empty()))
}

impl TabDescriptor {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: String::new(),
            icon: None,
            icon_class: None,
            is_standalone: false,
            badge: None,
            badge_color: None,
            enabled: true,
        }
    }

    /// Descriptor with a generated `tab_<millis>_<suffix>` key
    pub fn generated() -> Self {
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
        Self::new(format!("tab_{}_{}", Utc::now().timestamp_millis(), suffix))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_icon(mut self, icon: IconSource) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_icon_class(mut self, class: impl Into<String>) -> Self {
        self.icon_class = Some(class.into());
        self
    }

    pub fn standalone(mut self) -> Self {
        self.is_standalone = true;
        self
    }

    pub fn with_badge(mut self, badge: impl Into<Badge>) -> Self {
        let badge = badge.into();
        self.badge = (!badge.is_empty()).then_some(badge);
        self
    }

    pub fn with_badge_color(mut self, color: impl Into<String>) -> Self {
        self.badge_color = Some(color.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Title for display, falling back to the key
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.key
        } else {
            &self.title
        }
    }
}
