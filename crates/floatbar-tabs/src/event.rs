//! Events emitted to state machine observers

use serde::{Deserialize, Serialize};

use crate::state::TabBarState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum TabBarEvent {
    /// A transition started; `state` is the new snapshot
    StateChanged { state: TabBarState },
    /// A tab was selected (also re-emitted for the current tab)
    TabSelected { key: String },
    /// The host reported that the transition animation finished
    AnimationFinished { state: TabBarState },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabBarEventKind {
    StateChanged,
    TabSelected,
    AnimationFinished,
}

impl TabBarEvent {
    pub fn kind(&self) -> TabBarEventKind {
        match self {
            TabBarEvent::StateChanged { .. } => TabBarEventKind::StateChanged,
            TabBarEvent::TabSelected { .. } => TabBarEventKind::TabSelected,
            TabBarEvent::AnimationFinished { .. } => TabBarEventKind::AnimationFinished,
        }
    }

    /// State snapshot carried by the event, if any
    pub fn state(&self) -> Option<&TabBarState> {
        match self {
            TabBarEvent::StateChanged { state } | TabBarEvent::AnimationFinished { state } => {
                Some(state)
            }
            TabBarEvent::TabSelected { .. } => None,
        }
    }
}

impl TabBarEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabBarEventKind::StateChanged => "stateChanged",
            TabBarEventKind::TabSelected => "tabSelected",
            TabBarEventKind::AnimationFinished => "animationFinished",
        }
    }
}

impl std::fmt::Display for TabBarEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
