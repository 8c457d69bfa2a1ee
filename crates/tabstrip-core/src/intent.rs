//! User intents delivered to the tab strip controller.

use crate::tab::TabId;

/// A user-triggered request against the tab strip.
///
/// Intents arrive as discrete, non-overlapping events on one logical
/// thread; each either fully applies or is dropped as a stale no-op.
///
/// # Example
///
/// ```
/// use tabstrip_core::{Intent, TabId};
///
/// let select: Intent<()> = Intent::Select(1);
/// assert!(matches!(select, Intent::Select(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent<C> {
    /// Open a new tab with the given title and content; the new tab
    /// always becomes the active one.
    Open {
        /// Display label for the new tab
        title: String,
        /// Content pane handle, owned by the tab once opened
        content: C,
    },
    /// Activate the tab with the given id.
    Select(TabId),
    /// Close the tab with the given id.
    Close(TabId),
}

impl<C> Intent<C> {
    /// Creates an open intent.
    pub fn open(title: impl Into<String>, content: C) -> Self {
        Intent::Open {
            title: title.into(),
            content,
        }
    }
}
