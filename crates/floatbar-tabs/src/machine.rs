//! Tab Bar State Machine
//!
//! Owns the inline/expanded state, turns scroll samples into transitions and
//! notifies observers. Operations run to completion on the calling thread and
//! deliver their event to every observer before returning.
//!
//! Each operation holds a re-entrant delivery lock from the state change until
//! its event has reached every observer, so operations from different threads
//! are applied and delivered one at a time. The same thread may take it again,
//! so an observer may call straight back into the machine. An observer must
//! not block on another thread that uses the machine.

use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::TabBarError;
use crate::event::TabBarEvent;
use crate::mode::ScrollBehavior;
use crate::state::{ScrollDirection, TabBarState};
use crate::Result;

/// Scroll distance beyond which a collapse is triggered
pub const SCROLL_THRESHOLD: f64 = 50.0;

type Observer = Arc<dyn Fn(&TabBarEvent) + Send + Sync>;

/// Handle returned by [`TabBarStateMachine::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct TabBarStateMachine {
    /// Held across "update state, then notify"
    delivery: ReentrantMutex<()>,
    state: Mutex<TabBarState>,
    mode: RwLock<ScrollBehavior>,
    threshold: f64,
    observers: RwLock<Vec<(SubscriptionId, Observer)>>,
    next_subscription: AtomicU64,
}

impl TabBarStateMachine {
    pub fn new(mode: ScrollBehavior, can_transition: bool) -> Self {
        Self {
            delivery: ReentrantMutex::new(()),
            state: Mutex::new(TabBarState::new(can_transition)),
            mode: RwLock::new(mode),
            threshold: SCROLL_THRESHOLD,
            observers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    /// Create a machine with a custom scroll threshold
    pub fn with_threshold(mode: ScrollBehavior, can_transition: bool, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(TabBarError::InvalidThreshold(threshold));
        }

        Ok(Self {
            threshold,
            ..Self::new(mode, can_transition)
        })
    }

    /// Create a machine from a mode name, rejecting unknown names
    pub fn from_mode_str(mode: &str, can_transition: bool) -> Result<Self> {
        Ok(Self::new(mode.parse()?, can_transition))
    }

    /// Snapshot of the current state
    pub fn state(&self) -> TabBarState {
        self.state.lock().clone()
    }

    pub fn scroll_mode(&self) -> ScrollBehavior {
        *self.mode.read()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Register an observer for all events
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&TabBarEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, Arc::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    /// Record a raw scroll offset and apply the active scroll behavior.
    ///
    /// Returns the direction computed for this sample.
    pub fn record_scroll(&self, offset: f64) -> ScrollDirection {
        let _delivery = self.delivery.lock();
        let (direction, target) = {
            let mut state = self.state.lock();
            let direction = ScrollDirection::from_offset(offset, state.last_scroll_direction);
            state.scroll_offset = offset;
            state.last_scroll_direction = direction;

            if !state.can_transition || state.is_animating {
                tracing::trace!(
                    offset,
                    direction = %direction,
                    can_transition = state.can_transition,
                    animating = state.is_animating,
                    "Scroll recorded without transition"
                );
                return direction;
            }

            (direction, self.scroll_target(&state, offset, direction))
        };

        if let Some(to_inline) = target {
            self.begin_transition(to_inline);
        }

        direction
    }

    /// Which mode (if any) the scroll sample asks for. `Some(true)` is inline.
    fn scroll_target(
        &self,
        state: &TabBarState,
        offset: f64,
        direction: ScrollDirection,
    ) -> Option<bool> {
        let (collapse, expand) = match self.scroll_mode() {
            ScrollBehavior::OnScrollDown => (ScrollDirection::Down, ScrollDirection::Up),
            ScrollBehavior::OnScrollUp => (ScrollDirection::Up, ScrollDirection::Down),
            ScrollBehavior::Never => return None,
            ScrollBehavior::Always => return (!state.is_inline).then_some(true),
        };

        if direction == collapse && offset.abs() > self.threshold && !state.is_inline {
            Some(true)
        } else if direction == expand && state.is_inline {
            Some(false)
        } else {
            None
        }
    }

    /// Start a transition to the given mode.
    ///
    /// Does nothing if the bar is already in that mode or still animating.
    /// The host must call [`complete_transition`](Self::complete_transition)
    /// once its animation ends.
    pub fn begin_transition(&self, to_inline: bool) -> bool {
        let _delivery = self.delivery.lock();
        let (from, next) = {
            let mut state = self.state.lock();
            if state.is_inline == to_inline || state.is_animating {
                return false;
            }

            let next = state.transitioning(to_inline);
            let from = state.mode_name();
            *state = next.clone();
            (from, next)
        };

        tracing::debug!(from = from, to = next.mode_name(), "Tab bar transition started");

        self.emit(TabBarEvent::StateChanged { state: next });
        true
    }

    /// Clear the animating flag. Returns false if no transition was running.
    pub fn complete_transition(&self) -> bool {
        let _delivery = self.delivery.lock();
        let next = {
            let mut state = self.state.lock();
            if !state.is_animating {
                return false;
            }

            let next = TabBarState {
                is_animating: false,
                ..state.clone()
            };
            *state = next.clone();
            next
        };

        tracing::debug!(mode = next.mode_name(), "Tab bar transition finished");

        self.emit(TabBarEvent::AnimationFinished { state: next });
        true
    }

    /// Select a tab. Emits even when the key is already selected.
    pub fn select_tab(&self, key: impl Into<String>) {
        let key = key.into();
        let _delivery = self.delivery.lock();
        self.state.lock().selected_tab_key = key.clone();

        tracing::debug!(tab_key = %key, "Tab selected");

        self.emit(TabBarEvent::TabSelected { key });
    }

    pub fn set_can_transition(&self, can_transition: bool) {
        let _delivery = self.delivery.lock();
        self.state.lock().can_transition = can_transition;
    }

    /// Replace the scroll behavior. Takes effect on the next scroll sample.
    pub fn set_scroll_mode(&self, mode: ScrollBehavior) {
        let _delivery = self.delivery.lock();
        let previous = std::mem::replace(&mut *self.mode.write(), mode);
        if previous != mode {
            tracing::debug!(from = %previous, to = %mode, "Scroll behavior changed");
        }
    }

    /// Deliver an event to every observer in registration order.
    ///
    /// A panicking observer unwinds through the caller; observers after it
    /// do not see the event.
    fn emit(&self, event: TabBarEvent) {
        let observers: Vec<Observer> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in observers {
            observer(&event);
        }
    }
}

impl Default for TabBarStateMachine {
    fn default() -> Self {
        Self::new(ScrollBehavior::default(), true)
    }
}

impl std::fmt::Debug for TabBarStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabBarStateMachine")
            .field("state", &*self.state.lock())
            .field("mode", &self.scroll_mode())
            .field("threshold", &self.threshold)
            .field("observers", &self.observer_count())
            .finish()
    }
}
