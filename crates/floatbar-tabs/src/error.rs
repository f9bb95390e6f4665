//! Tab bar error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TabBarError {
    #[error("Unknown scroll behavior: {0}")]
    UnknownScrollBehavior(String),

    #[error("Invalid scroll threshold: {0}")]
    InvalidThreshold(f64),

    #[error("Invalid icon source: {0}")]
    InvalidIcon(String),
}
