//! Floating tab bar widget model
//!
//! Owns the tab set and configuration, validates selections against the tab
//! set, and forwards state machine events to the platform renderer.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use floatbar_tabs::{
    ScrollBehavior, ScrollDirection, SubscriptionId, TabBarEvent, TabBarState,
    TabBarStateMachine, TabDescriptor,
};

use crate::config::TabBarConfig;
use crate::error::CoreError;
use crate::layout::{BarLayout, TabPresentation};
use crate::renderer::TabBarRenderer;
use crate::Result;

/// Scroll sample as seen by scroll listeners
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollReport {
    pub offset: f64,
    pub direction: ScrollDirection,
}

/// Handle returned by `on_scroll`, used to detach the listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollListenerId(u64);

type ScrollListener = Arc<dyn Fn(&ScrollReport) + Send + Sync>;

pub struct FloatingTabBar {
    machine: Arc<TabBarStateMachine>,
    tabs: Arc<RwLock<Vec<TabDescriptor>>>,
    config: Arc<RwLock<TabBarConfig>>,
    renderer: Arc<dyn TabBarRenderer>,
    scroll_listeners: RwLock<Vec<(ScrollListenerId, ScrollListener)>>,
    next_listener_id: AtomicU64,
    /// Renderer forwarding, removed on drop
    subscription: SubscriptionId,
}

impl FloatingTabBar {
    pub fn new(config: TabBarConfig, renderer: Arc<dyn TabBarRenderer>) -> Result<Self> {
        config.validate()?;

        let machine = Arc::new(config.state_machine()?);
        let start_inline = config.is_inline;
        let tabs = Arc::new(RwLock::new(Vec::new()));
        let config = Arc::new(RwLock::new(config));

        let subscription = {
            let tabs = Arc::clone(&tabs);
            let config = Arc::clone(&config);
            let renderer = Arc::clone(&renderer);
            machine.subscribe(move |event| forward_event(event, &tabs, &config, renderer.as_ref()))
        };

        let bar = Self {
            machine,
            tabs,
            config,
            renderer,
            scroll_listeners: RwLock::new(Vec::new()),
            next_listener_id: AtomicU64::new(1),
            subscription,
        };

        if start_inline {
            bar.machine.begin_transition(true);
            bar.machine.complete_transition();
        }

        bar.render();

        tracing::info!(
            scroll_behavior = %bar.machine.scroll_mode(),
            inline = start_inline,
            "Created floating tab bar"
        );

        Ok(bar)
    }

    /// Push the full current state to the renderer
    pub fn render(&self) {
        let state = self.machine.state();
        let config = self.config.read().clone();
        let presented = TabPresentation::for_tabs(&self.tabs.read(), &state, &config);

        self.renderer.update_appearance(&config);
        self.renderer.update_tabs(&presented);
        self.renderer
            .update_state(&state, &BarLayout::compute(&config, &state));
    }

    pub fn machine(&self) -> &Arc<TabBarStateMachine> {
        &self.machine
    }

    pub fn state(&self) -> TabBarState {
        self.machine.state()
    }

    pub fn config(&self) -> TabBarConfig {
        self.config.read().clone()
    }

    pub fn layout(&self) -> BarLayout {
        BarLayout::compute(&self.config.read(), &self.machine.state())
    }

    /// Append a tab. The first tab added becomes selected.
    pub fn add_tab(&self, tab: TabDescriptor) -> Result<()> {
        {
            let mut tabs = self.tabs.write();
            if tabs.iter().any(|existing| existing.key == tab.key) {
                return Err(CoreError::DuplicateTab(tab.key));
            }
            tabs.push(tab.clone());
        }

        tracing::debug!(tab_key = %tab.key, title = %tab.title, "Added tab");

        if tab.enabled && self.machine.state().selected_tab_key.is_empty() {
            self.machine.select_tab(tab.key);
        }

        self.refresh_tabs();
        Ok(())
    }

    pub fn tabs(&self) -> Vec<TabDescriptor> {
        self.tabs.read().clone()
    }

    pub fn tab(&self, key: &str) -> Option<TabDescriptor> {
        self.tabs.read().iter().find(|tab| tab.key == key).cloned()
    }

    /// The tab matching the selected key
    pub fn active_tab(&self) -> Option<TabDescriptor> {
        self.tab(&self.machine.state().selected_tab_key)
    }

    /// Select a known, enabled tab
    pub fn select_tab(&self, key: &str) -> Result<()> {
        let tab = self
            .tab(key)
            .ok_or_else(|| CoreError::TabNotFound(key.to_string()))?;

        if !tab.enabled {
            return Err(CoreError::TabDisabled(key.to_string()));
        }

        self.machine.select_tab(tab.key);
        Ok(())
    }

    /// Feed a scroll offset from the host's scroll view.
    ///
    /// Returns false when the scroll connection is disabled.
    pub fn on_scroll_changed(&self, offset: f64) -> bool {
        if !self.config.read().scroll_connection.enable_scroll_connection {
            return false;
        }

        let direction = self.machine.record_scroll(offset);

        let report = ScrollReport { offset, direction };
        let listeners: Vec<ScrollListener> = self
            .scroll_listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&report);
        }

        true
    }

    /// Register a listener for forwarded scroll samples
    pub fn on_scroll<F>(&self, listener: F) -> ScrollListenerId
    where
        F: Fn(&ScrollReport) + Send + Sync + 'static,
    {
        let id = ScrollListenerId(self.next_listener_id.fetch_add(1, Ordering::Relaxed));
        self.scroll_listeners.write().push((id, Arc::new(listener)));
        id
    }

    /// Detach a scroll listener. Returns false for an unknown id.
    pub fn off_scroll(&self, id: ScrollListenerId) -> bool {
        let mut listeners = self.scroll_listeners.write();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Switch mode manually
    pub fn set_inline(&self, inline: bool) -> bool {
        self.machine.begin_transition(inline)
    }

    /// Called by the renderer when its transition animation ends
    pub fn animation_finished(&self) -> bool {
        self.machine.complete_transition()
    }

    /// Suspend scroll-driven transitions, e.g. while the user drags the bar
    pub fn set_can_transition(&self, can_transition: bool) {
        self.machine.set_can_transition(can_transition);
    }

    pub fn set_scroll_behavior(&self, mode: ScrollBehavior) {
        self.config.write().scroll_behavior = mode;
        self.machine.set_scroll_mode(mode);
    }

    /// Replace the configuration and restyle.
    ///
    /// A changed `isInline` starts a transition to that mode, and is rejected
    /// while a transition is still animating. The scroll threshold cannot
    /// change once the state machine exists.
    pub fn set_config(&self, config: TabBarConfig) -> Result<()> {
        config.validate()?;

        if config.scroll_connection.scroll_threshold != self.machine.threshold() {
            return Err(CoreError::Config(format!(
                "scroll threshold is fixed at {}",
                self.machine.threshold()
            )));
        }

        let state = self.machine.state();
        let switch_mode = config.is_inline != state.is_inline;
        if switch_mode && state.is_animating {
            return Err(CoreError::Config(
                "cannot change isInline while the bar is animating".to_string(),
            ));
        }

        self.machine.set_scroll_mode(config.scroll_behavior);
        *self.config.write() = config.clone();

        self.renderer.update_appearance(&config);
        self.refresh_tabs();

        if switch_mode && !self.machine.begin_transition(config.is_inline) {
            tracing::warn!(inline = config.is_inline, "Mode change from config was not applied");
        }
        Ok(())
    }

    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&TabBarEvent) + Send + Sync + 'static,
    {
        self.machine.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.machine.unsubscribe(id)
    }

    fn refresh_tabs(&self) {
        let state = self.machine.state();
        let presented = TabPresentation::for_tabs(&self.tabs.read(), &state, &self.config.read());
        self.renderer.update_tabs(&presented);
    }
}

impl Drop for FloatingTabBar {
    fn drop(&mut self) {
        self.machine.unsubscribe(self.subscription);
    }
}

impl std::fmt::Debug for FloatingTabBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatingTabBar")
            .field("machine", &self.machine)
            .field("tabs", &self.tabs.read().len())
            .finish()
    }
}

/// Map a state machine event onto renderer hooks
fn forward_event(
    event: &TabBarEvent,
    tabs: &RwLock<Vec<TabDescriptor>>,
    config: &RwLock<TabBarConfig>,
    renderer: &dyn TabBarRenderer,
) {
    match event {
        TabBarEvent::StateChanged { state } => {
            let layout = BarLayout::compute(&config.read(), state);
            renderer.update_state(state, &layout);
        }
        // Titles appear or disappear once the bar has settled
        TabBarEvent::AnimationFinished { state } => {
            let presented = TabPresentation::for_tabs(&tabs.read(), state, &config.read());
            renderer.update_tabs(&presented);
        }
        TabBarEvent::TabSelected { key } => renderer.update_selection(key),
    }
}
