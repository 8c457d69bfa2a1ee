//! Tab strip controller: the intent state machine.
//!
//! [`TabStrip`] translates user intents (open, select, close) into
//! registry mutations and derives the resulting highlight/visibility
//! state to push to the host. It owns the re-selection policy that runs
//! when the active tab is closed.
//!
//! # Example
//!
//! ```
//! use tabstrip_core::{TabHost, TabId, TabStrip};
//!
//! #[derive(Default)]
//! struct NullHost;
//!
//! impl TabHost<&'static str> for NullHost {
//!     fn mount_label(&mut self, _id: TabId, _title: &str) {}
//!     fn unmount_label(&mut self, _id: TabId) {}
//!     fn set_label_highlighted(&mut self, _id: TabId, _highlighted: bool) {}
//!     fn mount_content(&mut self, _id: TabId, _content: &&'static str) {}
//!     fn unmount_content(&mut self, _id: TabId) {}
//!     fn set_content_visible(&mut self, _id: TabId, _visible: bool) {}
//! }
//!
//! let mut strip = TabStrip::new(NullHost);
//! let a = strip.open("A", "pane a");
//! let b = strip.open("B", "pane b");
//! assert_eq!(strip.active_id(), Some(b));
//!
//! strip.close(b);
//! assert_eq!(strip.active_id(), Some(a));
//! ```

use crate::error::CoreError;
use crate::host::TabHost;
use crate::intent::Intent;
use crate::registry::TabRegistry;
use crate::tab::TabId;

/// Orchestrates user intents against a [`TabRegistry`] and drives a
/// [`TabHost`].
///
/// The controller has no state of its own beyond the registry and the
/// host: highlight and visibility pushed to the host are always derived
/// from the registry's active-tab marker, so UI and model cannot
/// diverge.
///
/// Every `TabNotFound` arising from a user intent is treated as a
/// recoverable staleness condition and downgraded to a logged no-op.
pub struct TabStrip<C, H> {
    registry: TabRegistry<C>,
    host: H,
}

impl<C, H: TabHost<C>> TabStrip<C, H> {
    /// Creates a controller over an empty registry.
    #[must_use]
    pub fn new(host: H) -> Self {
        TabStrip {
            registry: TabRegistry::new(),
            host,
        }
    }

    /// Opens a new tab and makes it the active one.
    ///
    /// The host is instructed to append a label to the strip and mount
    /// the content hidden; the visibility sync that follows activation
    /// then shows it. Returns the new tab's id.
    ///
    /// Opening never fails: any title is accepted, including the empty
    /// string.
    pub fn open(&mut self, title: impl Into<String>, content: C) -> TabId {
        let tab = self.registry.add_tab(title, content);
        let id = tab.id();
        self.host.mount_label(id, tab.title());
        self.host.mount_content(id, tab.content());
        self.host.set_content_visible(id, false);
        self.select(id);
        id
    }

    /// Activates the tab with the given id.
    ///
    /// A stale id (already closed, or never issued) is a silent no-op;
    /// the host is not touched.
    pub fn select(&mut self, id: TabId) {
        match self.registry.set_active(id) {
            Ok(()) => self.sync_host(),
            Err(CoreError::TabNotFound(_)) => {
                tracing::debug!(id, "select ignored: stale tab id");
            }
        }
    }

    /// Closes the tab with the given id.
    ///
    /// The host is instructed to remove the tab's label and content.
    /// If the closed tab was the active one and tabs remain, the
    /// survivor with the largest id (the most recently created) becomes
    /// active; if the strip is now empty, nothing is active and the
    /// host shows an empty content area. Closing a non-active tab never
    /// changes the active tab. A stale id is a silent no-op.
    pub fn close(&mut self, id: TabId) {
        let removed = match self.registry.remove(id) {
            Ok(tab) => tab,
            Err(CoreError::TabNotFound(_)) => {
                tracing::debug!(id, "close ignored: stale tab id");
                return;
            }
        };
        self.host.unmount_label(id);
        self.host.unmount_content(id);

        if removed.is_active() {
            // Newest surviving tab wins, not the nearest neighbor.
            if let Some(next) = self.registry.newest_id() {
                self.select(next);
            }
        }
        // `removed` drops here, releasing the content handle exactly once
    }

    /// Routes an intent to the matching operation.
    pub fn dispatch(&mut self, intent: Intent<C>) {
        match intent {
            Intent::Open { title, content } => {
                self.open(title, content);
            }
            Intent::Select(id) => self.select(id),
            Intent::Close(id) => self.close(id),
        }
    }

    /// Read access to the underlying registry.
    ///
    /// Hosts use this at frame time to draw the content of the visible
    /// tab; the registry keeps ownership of every content handle.
    #[must_use]
    pub fn registry(&self) -> &TabRegistry<C> {
        &self.registry
    }

    /// Read access to the host collaborator.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host collaborator.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the active tab's id, or `None` if the strip is empty.
    #[must_use]
    pub fn active_id(&self) -> Option<TabId> {
        self.registry.active_id()
    }

    /// Returns the number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if there are no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Pushes highlight and visibility for every tab to the host,
    /// derived from the registry's active marker.
    fn sync_host(&mut self) {
        for tab in self.registry.tabs() {
            self.host.set_label_highlighted(tab.id(), tab.is_active());
            self.host.set_content_visible(tab.id(), tab.is_active());
        }
    }
}
