//! Floatbar Tab Bar Core
//!
//! Render-agnostic state machine behind the floating tab bar. The bar is either
//! expanded (full height, titles visible) or inline (compact), and scroll samples
//! reported by the host decide when it switches:
//!
//! ```text
//! Expanded ──scroll past threshold──▶ Inline
//!    ▲                                  │
//!    └──────── scroll back ─────────────┘
//! ```
//!
//! Each switch is bracketed by an animating flag that only the host can clear.

mod error;
mod event;
mod icon;
mod machine;
mod mode;
mod state;
mod tab;

pub use error::TabBarError;
pub use event::{TabBarEvent, TabBarEventKind};
pub use icon::IconSource;
pub use machine::{SubscriptionId, TabBarStateMachine, SCROLL_THRESHOLD};
pub use mode::ScrollBehavior;
pub use state::{ScrollDirection, TabBarState};
pub use tab::{Badge, TabDescriptor};

pub type Result<T> = std::result::Result<T, TabBarError>;
