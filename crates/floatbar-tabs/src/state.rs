//! Tab bar display state
//!
//! ```text
//! Expanded/Idle ──begin──▶ Inline/Animating ──complete──▶ Inline/Idle
//!       ▲                                                      │
//!       └──complete── Expanded/Animating ◀──────begin──────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Direction derived from the most recent nonzero scroll sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

impl ScrollDirection {
    /// Positive offsets scroll down, negative offsets scroll up.
    /// A zero (or NaN) offset keeps the previous direction.
    pub fn from_offset(offset: f64, previous: ScrollDirection) -> Self {
        if offset > 0.0 {
            ScrollDirection::Down
        } else if offset < 0.0 {
            ScrollDirection::Up
        } else {
            previous
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
            ScrollDirection::None => "none",
        }
    }
}

impl std::fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of the tab bar state.
///
/// The state machine replaces its copy on every change and only ever hands
/// out clones, so holding one of these never observes later updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarState {
    /// Compact presentation
    pub is_inline: bool,
    /// Always `!is_inline`
    pub is_expanded: bool,
    /// Set between transition start and the host's completion report
    pub is_animating: bool,
    /// Active tab key, empty when nothing is selected
    pub selected_tab_key: String,
    /// Last raw offset reported by the scroll source
    pub scroll_offset: f64,
    pub last_scroll_direction: ScrollDirection,
    /// Scroll-driven transitions are suppressed while false
    pub can_transition: bool,
}

impl TabBarState {
    pub fn new(can_transition: bool) -> Self {
        Self {
            can_transition,
            ..Self::default()
        }
    }

    /// Copy of this state switched to the given mode and marked animating
    pub(crate) fn transitioning(&self, to_inline: bool) -> Self {
        Self {
            is_inline: to_inline,
            is_expanded: !to_inline,
            is_animating: true,
            ..self.clone()
        }
    }

    pub fn mode_name(&self) -> &'static str {
        if self.is_inline {
            "inline"
        } else {
            "expanded"
        }
    }
}

impl Default for TabBarState {
    fn default() -> Self {
        Self {
            is_inline: false,
            is_expanded: true,
            is_animating: false,
            selected_tab_key: String::new(),
            scroll_offset: 0.0,
            last_scroll_direction: ScrollDirection::None,
            can_transition: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_offset() {
        assert_eq!(
            ScrollDirection::from_offset(10.0, ScrollDirection::None),
            ScrollDirection::Down
        );
        assert_eq!(
            ScrollDirection::from_offset(-3.5, ScrollDirection::Down),
            ScrollDirection::Up
        );
        // Zero keeps whatever came before
        assert_eq!(
            ScrollDirection::from_offset(0.0, ScrollDirection::None),
            ScrollDirection::None
        );
        assert_eq!(
            ScrollDirection::from_offset(0.0, ScrollDirection::Up),
            ScrollDirection::Up
        );
        assert_eq!(
            ScrollDirection::from_offset(f64::NAN, ScrollDirection::Down),
            ScrollDirection::Down
        );
    }

    #[test]
    fn test_default_state() {
        let state = TabBarState::default();
        assert!(!state.is_inline);
        assert!(state.is_expanded);
        assert!(!state.is_animating);
        assert!(state.can_transition);
        assert!(state.selected_tab_key.is_empty());
        assert_eq!(state.scroll_offset, 0.0);
        assert_eq!(state.last_scroll_direction, ScrollDirection::None);
        assert_eq!(state.mode_name(), "expanded");
    }

    #[test]
    fn test_transitioning_keeps_expanded_in_sync() {
        let state = TabBarState::new(false);
        let next = state.transitioning(true);

        assert!(next.is_inline);
        assert!(!next.is_expanded);
        assert!(next.is_animating);
        assert!(!next.can_transition);
        // Original is untouched
        assert!(!state.is_inline);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(TabBarState::default()).unwrap();
        assert_eq!(json["isInline"], false);
        assert_eq!(json["isExpanded"], true);
        assert_eq!(json["selectedTabKey"], "");
        assert_eq!(json["lastScrollDirection"], "none");
        assert_eq!(json["canTransition"], true);
    }
}
