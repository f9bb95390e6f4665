//! Floatbar Core
//!
//! Host-side model of the floating tab bar: configuration, layout and the
//! widget that wires a platform renderer to the tab bar state machine.
//! The renderer draws; all state lives in `floatbar-tabs`.

mod bar;
mod config;
mod error;
mod layout;
mod renderer;

pub use bar::{FloatingTabBar, ScrollListenerId, ScrollReport};
pub use config::{ScrollConnection, Spacing, TabBarConfig};
pub use error::CoreError;
pub use layout::{BarLayout, TabPresentation};
pub use renderer::{NoopRenderer, TabBarRenderer};

// Re-export the state machine
pub use floatbar_tabs::{
    Badge, IconSource, ScrollBehavior, ScrollDirection, SubscriptionId, TabBarError, TabBarEvent,
    TabBarEventKind, TabBarState, TabBarStateMachine, TabDescriptor, SCROLL_THRESHOLD,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
