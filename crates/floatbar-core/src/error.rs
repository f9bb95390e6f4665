//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab bar error: {0}")]
    Tab(#[from] floatbar_tabs::TabBarError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tab not found: {0}")]
    TabNotFound(String),

    #[error("Tab is disabled: {0}")]
    TabDisabled(String),

    #[error("Duplicate tab key: {0}")]
    DuplicateTab(String),
}
