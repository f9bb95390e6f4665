//! Icon sources understood by the tab bar renderers

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::TabBarError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum IconSource {
    /// Glyph from an icon font (`font://` or a bare character)
    Font(String),
    /// Bundled platform resource (`res://`)
    Resource(String),
    /// System symbol (`sys://`)
    System(String),
    /// Remote image
    Remote(Url),
    /// App asset relative to the app root (`~/`)
    Asset(String),
}

impl IconSource {
    pub fn parse(source: &str) -> Result<Self> {
        let source = source.trim();
        if source.is_empty() {
            return Err(TabBarError::InvalidIcon("icon source cannot be empty".to_string()));
        }

        if let Some(glyph) = source.strip_prefix("font://") {
            return Ok(IconSource::Font(glyph.to_string()));
        }
        if let Some(name) = source.strip_prefix("res://") {
            return Ok(IconSource::Resource(name.to_string()));
        }
        if let Some(name) = source.strip_prefix("sys://") {
            return Ok(IconSource::System(name.to_string()));
        }
        if source.starts_with("http://") || source.starts_with("https://") {
            return Url::parse(source)
                .map(IconSource::Remote)
                .map_err(|e| TabBarError::InvalidIcon(format!("{}: {}", source, e)));
        }
        if source.starts_with("~/") {
            return Ok(IconSource::Asset(source.to_string()));
        }

        Ok(IconSource::Font(source.to_string()))
    }

    /// Whether the icon is drawn as text rather than an image
    pub fn is_font(&self) -> bool {
        matches!(self, IconSource::Font(_))
    }

    pub fn as_source(&self) -> String {
        match self {
            IconSource::Font(glyph) => format!("font://{}", glyph),
            IconSource::Resource(name) => format!("res://{}", name),
            IconSource::System(name) => format!("sys://{}", name),
            IconSource::Remote(url) => url.to_string(),
            IconSource::Asset(path) => path.clone(),
        }
    }
}

impl std::fmt::Display for IconSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_source())
    }
}

impl std::str::FromStr for IconSource {
    type Err = TabBarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
