//! Scroll behavior modes
//!
//! Decide which scroll direction (if any) collapses the bar to inline mode.

use serde::{Deserialize, Serialize};

use crate::error::TabBarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScrollBehavior {
    /// Scrolling down collapses, scrolling up expands
    #[default]
    #[serde(rename = "onScrollDown")]
    OnScrollDown,
    /// Scrolling up collapses, scrolling down expands
    #[serde(rename = "onScrollUp")]
    OnScrollUp,
    /// Manual transitions only
    #[serde(rename = "never")]
    Never,
    /// Any scroll collapses, nothing expands
    #[serde(rename = "always")]
    Always,
}

impl ScrollBehavior {
    pub const ALL: [ScrollBehavior; 4] = [
        ScrollBehavior::OnScrollDown,
        ScrollBehavior::OnScrollUp,
        ScrollBehavior::Never,
        ScrollBehavior::Always,
    ];

    /// Cycle to the next mode, wrapping around
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::OnScrollDown => "onScrollDown",
            ScrollBehavior::OnScrollUp => "onScrollUp",
            ScrollBehavior::Never => "never",
            ScrollBehavior::Always => "always",
        }
    }
}

impl std::fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScrollBehavior {
    type Err = TabBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| TabBarError::UnknownScrollBehavior(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!(
            "onScrollDown".parse::<ScrollBehavior>().unwrap(),
            ScrollBehavior::OnScrollDown
        );
        assert_eq!(
            "onScrollUp".parse::<ScrollBehavior>().unwrap(),
            ScrollBehavior::OnScrollUp
        );
        assert_eq!("never".parse::<ScrollBehavior>().unwrap(), ScrollBehavior::Never);
        assert_eq!("always".parse::<ScrollBehavior>().unwrap(), ScrollBehavior::Always);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = "sometimes".parse::<ScrollBehavior>().unwrap_err();
        assert_eq!(err, TabBarError::UnknownScrollBehavior("sometimes".into()));

        // Names are case sensitive, no silent fallback
        assert!("OnScrollDown".parse::<ScrollBehavior>().is_err());
        assert!("".parse::<ScrollBehavior>().is_err());
    }

    #[test]
    fn test_cycle() {
        let mut mode = ScrollBehavior::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(seen, ScrollBehavior::ALL.to_vec());
        assert_eq!(mode, ScrollBehavior::OnScrollDown);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ScrollBehavior::OnScrollUp).unwrap();
        assert_eq!(json, "\"onScrollUp\"");

        let parsed: ScrollBehavior = serde_json::from_str("\"always\"").unwrap();
        assert_eq!(parsed, ScrollBehavior::Always);

        assert!(serde_json::from_str::<ScrollBehavior>("\"bogus\"").is_err());
    }
}
