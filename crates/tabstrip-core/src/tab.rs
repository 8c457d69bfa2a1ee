//! Tab type and identifier for the tab strip core.
//!
//! A [`Tab`] pairs a display title with an opaque content handle. The
//! core never inspects the content; it only carries it between the
//! registry and the host, and drops it exactly once when the tab is
//! closed.

/// Unique identifier for a tab.
///
/// Ids are assigned only by [`TabRegistry`](crate::TabRegistry), are
/// strictly increasing in creation order, and are never reused, even
/// after the tab owning one is closed. Hosts echo ids back when raising
/// select/close intents; they must not invent or mutate them.
pub type TabId = u64;

/// A logical unit of content in the tab strip.
///
/// Tabs are created only by [`TabRegistry::add_tab`] and destroyed only
/// by [`TabRegistry::remove`], which hands the tab back to the caller so
/// the content handle is released exactly once.
///
/// [`TabRegistry::add_tab`]: crate::TabRegistry::add_tab
/// [`TabRegistry::remove`]: crate::TabRegistry::remove
///
/// # Example
///
/// ```
/// use tabstrip_core::TabRegistry;
///
/// let mut registry = TabRegistry::new();
/// let tab = registry.add_tab("Home", "pane contents");
/// assert_eq!(tab.id(), 1);
/// assert_eq!(tab.title(), "Home");
/// assert!(!tab.is_active());
/// ```
#[derive(Debug)]
pub struct Tab<C> {
    id: TabId,
    title: String,
    active: bool,
    content: C,
}

impl<C> Tab<C> {
    /// Constructs a tab. Crate-internal: only the registry assigns ids.
    pub(crate) fn new(id: TabId, title: String, content: C) -> Self {
        Tab {
            id,
            title,
            active: false,
            content,
        }
    }

    /// Returns the unique identifier for this tab.
    #[must_use]
    pub fn id(&self) -> TabId {
        self.id
    }

    /// Returns the display title for this tab.
    ///
    /// The title is set once at creation and is immutable for the
    /// lifetime of the tab; there is no rename operation.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether this tab is the active one.
    ///
    /// At most one tab in a registry is active at any time.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Returns a reference to the content handle.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Returns a mutable reference to the content handle.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Consumes the tab, yielding its content handle.
    ///
    /// Used by callers that dispose of a closed tab but want to keep
    /// or recycle its content.
    #[must_use]
    pub fn into_content(self) -> C {
        self.content
    }
}
