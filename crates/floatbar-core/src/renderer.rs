//! Platform render seam
//!
//! Each platform implements this against its native widgets. The hooks are
//! called synchronously from state machine events, so implementations should
//! only schedule UI work, not block.

use floatbar_tabs::TabBarState;

use crate::config::TabBarConfig;
use crate::layout::{BarLayout, TabPresentation};

pub trait TabBarRenderer: Send + Sync {
    /// Rebuild the tab views
    fn update_tabs(&self, tabs: &[TabPresentation]);

    /// Apply colors, radii, shadow and spacing
    fn update_appearance(&self, config: &TabBarConfig);

    /// Animate to the given mode. The host reports the end of the animation
    /// through `FloatingTabBar::animation_finished`.
    fn update_state(&self, state: &TabBarState, layout: &BarLayout);

    /// Highlight the selected tab and swap in its content
    fn update_selection(&self, tab_key: &str);
}

/// Renderer for headless hosts
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl TabBarRenderer for NoopRenderer {
    fn update_tabs(&self, tabs: &[TabPresentation]) {
        tracing::trace!(count = tabs.len(), "update_tabs");
    }

    fn update_appearance(&self, _config: &TabBarConfig) {
        tracing::trace!("update_appearance");
    }

    fn update_state(&self, state: &TabBarState, layout: &BarLayout) {
        tracing::trace!(mode = state.mode_name(), height = layout.height, "update_state");
    }

    fn update_selection(&self, tab_key: &str) {
        tracing::trace!(tab_key = %tab_key, "update_selection");
    }
}
