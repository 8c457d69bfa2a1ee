//! Error types for tabstrip-core
//!
//! This module provides the error types used by the tab registry and
//! the tab strip controller.

use crate::tab::TabId;
use thiserror::Error;

/// Errors that can occur in tab registry operations.
///
/// There is a single failure mode in this core: an operation referenced
/// a tab id that is not present in the registry. Controllers treat this
/// as a recoverable staleness condition, never as a fatal error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Tab with the specified ID was not found.
    ///
    /// This occurs when attempting to activate or remove a tab that
    /// does not exist in the registry, typically because a queued
    /// intent references a tab closed by an earlier intent.
    #[error("tab not found: {0}")]
    TabNotFound(TabId),
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;
