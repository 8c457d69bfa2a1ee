//! Tab registry: the authoritative store of tabs.
//!
//! The [`TabRegistry`] owns the ordered collection of tabs, assigns
//! monotonically increasing identities, and enforces the single-active-tab
//! invariant. It is a pure data store: policy decisions such as which tab
//! to activate after a close belong to the
//! [`TabStrip`](crate::TabStrip) controller.
//!
//! # Example
//!
//! ```
//! use tabstrip_core::TabRegistry;
//!
//! let mut registry = TabRegistry::new();
//! let id = registry.add_tab("Home", ()).id();
//! registry.set_active(id)?;
//! assert_eq!(registry.active_id(), Some(id));
//! # Ok::<(), tabstrip_core::CoreError>(())
//! ```

use crate::error::{CoreError, CoreResult};
use crate::tab::{Tab, TabId};

/// Authoritative in-memory store of tabs.
///
/// The registry maintains three invariants by construction:
///
/// - every tab id is unique;
/// - if the registry is non-empty, exactly one tab is active;
/// - ids are strictly increasing in creation order and never reused,
///   even after the tab owning one is closed.
///
/// Insertion order is display order; no operation reorders tabs.
///
/// # Thread Safety
///
/// The registry is not thread-safe. All intents are expected to arrive
/// as discrete, non-overlapping events on one logical thread.
///
/// # Example
///
/// ```
/// use tabstrip_core::TabRegistry;
///
/// let mut registry = TabRegistry::new();
/// assert!(registry.is_empty());
///
/// let a = registry.add_tab("A", "pane a").id();
/// let b = registry.add_tab("B", "pane b").id();
/// assert_eq!((a, b), (1, 2));
///
/// registry.set_active(b)?;
/// let removed = registry.remove(a)?;
/// assert_eq!(removed.title(), "A");
/// # Ok::<(), tabstrip_core::CoreError>(())
/// ```
#[derive(Debug)]
pub struct TabRegistry<C> {
    /// Collection of tabs, stored in insertion order
    tabs: Vec<Tab<C>>,
    /// Last id handed out; incremented before each assignment, never reset
    last_id: TabId,
}

impl<C> TabRegistry<C> {
    /// Creates a new empty registry with its id counter at zero.
    ///
    /// # Example
    ///
    /// ```
    /// use tabstrip_core::TabRegistry;
    ///
    /// let registry = TabRegistry::<()>::new();
    /// assert!(registry.is_empty());
    /// assert!(registry.active_tab().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        TabRegistry {
            tabs: Vec::new(),
            last_id: 0,
        }
    }

    /// Creates a tab and appends it to the end of the strip.
    ///
    /// The tab receives the next id from the counter and starts out
    /// inactive; activation is a separate step so the caller decides
    /// the policy. Never fails: any title is accepted, including the
    /// empty string.
    ///
    /// # Example
    ///
    /// ```
    /// use tabstrip_core::TabRegistry;
    ///
    /// let mut registry = TabRegistry::new();
    /// let tab = registry.add_tab("Home", ());
    /// assert_eq!(tab.id(), 1);
    /// assert!(!tab.is_active());
    /// ```
    pub fn add_tab(&mut self, title: impl Into<String>, content: C) -> &Tab<C> {
        self.last_id += 1;
        let tab = Tab::new(self.last_id, title.into(), content);
        tracing::debug!(id = tab.id(), title = tab.title(), "tab created");
        self.tabs.push(tab);
        // Just pushed, so the last element exists
        &self.tabs[self.tabs.len() - 1]
    }

    /// Marks the tab with the given id as the single active tab.
    ///
    /// Every other tab transitions to inactive. Activating the already
    /// active tab is a no-op that still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TabNotFound`] if no tab with that id exists;
    /// the registry is left unchanged.
    pub fn set_active(&mut self, id: TabId) -> CoreResult<()> {
        if !self.tabs.iter().any(|t| t.id() == id) {
            return Err(CoreError::TabNotFound(id));
        }
        for tab in &mut self.tabs {
            tab.set_active(tab.id() == id);
        }
        tracing::debug!(id, "tab activated");
        Ok(())
    }

    /// Removes the tab with the given id and returns it.
    ///
    /// The relative order of the remaining tabs is preserved. The
    /// removed tab is handed back so the caller controls when its
    /// content handle is released.
    ///
    /// Removal performs no re-selection, even when the removed tab was
    /// the active one: that policy belongs to the controller.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TabNotFound`] if no tab with that id exists;
    /// the registry is left unchanged.
    pub fn remove(&mut self, id: TabId) -> CoreResult<Tab<C>> {
        let index = self
            .tabs
            .iter()
            .position(|t| t.id() == id)
            .ok_or(CoreError::TabNotFound(id))?;
        let tab = self.tabs.remove(index);
        tracing::debug!(id, was_active = tab.is_active(), "tab removed");
        Ok(tab)
    }

    /// Returns all tabs in insertion order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab<C>] {
        &self.tabs
    }

    /// Returns the active tab, or `None` if the registry is empty.
    #[must_use]
    pub fn active_tab(&self) -> Option<&Tab<C>> {
        self.tabs.iter().find(|t| t.is_active())
    }

    /// Returns the active tab's id, or `None` if the registry is empty.
    #[must_use]
    pub fn active_id(&self) -> Option<TabId> {
        self.active_tab().map(Tab::id)
    }

    /// Gets a tab by id.
    #[must_use]
    pub fn get(&self, id: TabId) -> Option<&Tab<C>> {
        self.tabs.iter().find(|t| t.id() == id)
    }

    /// Gets a tab by id, mutably.
    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Tab<C>> {
        self.tabs.iter_mut().find(|t| t.id() == id)
    }

    /// Returns the id of the most recently created surviving tab.
    ///
    /// Ids are strictly increasing, so this is the maximum id present.
    /// Returns `None` when the registry is empty.
    #[must_use]
    pub fn newest_id(&self) -> Option<TabId> {
        self.tabs.iter().map(Tab::id).max()
    }

    /// Returns the number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Returns true if there are no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl<C> Default for TabRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_registry_is_empty() {
        let registry = TabRegistry::<()>::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.active_tab().is_none());
        assert!(registry.active_id().is_none());
    }

    #[test]
    fn test_default_registry_is_empty() {
        let registry = TabRegistry::<()>::default();
        assert!(registry.is_empty());
    }

    // ==================== Add Tab Tests ====================

    #[test]
    fn test_add_tab_assigns_ids_from_one() {
        let mut registry = TabRegistry::new();
        assert_eq!(registry.add_tab("A", ()).id(), 1);
        assert_eq!(registry.add_tab("B", ()).id(), 2);
        assert_eq!(registry.add_tab("C", ()).id(), 3);
    }

    #[test]
    fn test_add_tab_starts_inactive() {
        let mut registry = TabRegistry::new();
        let tab = registry.add_tab("A", ());
        assert!(!tab.is_active());
        assert!(registry.active_tab().is_none());
    }

    #[test]
    fn test_add_tab_appends_in_order() {
        let mut registry = TabRegistry::new();
        registry.add_tab("A", ());
        registry.add_tab("B", ());
        registry.add_tab("C", ());

        let titles: Vec<&str> = registry.tabs().iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_add_tab_accepts_empty_title() {
        let mut registry = TabRegistry::new();
        let tab = registry.add_tab("", ());
        assert_eq!(tab.title(), "");
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut registry = TabRegistry::new();
        let id = registry.add_tab("A", ()).id();
        registry.remove(id).expect("should remove tab");
        assert!(registry.is_empty());

        // Counter never resets; the next tab gets a fresh id
        let next = registry.add_tab("B", ()).id();
        assert_eq!(next, 2);
    }

    // ==================== Set Active Tests ====================

    #[test]
    fn test_set_active_marks_exactly_one() {
        let mut registry = TabRegistry::new();
        let a = registry.add_tab("A", ()).id();
        let b = registry.add_tab("B", ()).id();

        registry.set_active(a).expect("should activate");
        registry.set_active(b).expect("should activate");

        let active: Vec<TabId> = registry
            .tabs()
            .iter()
            .filter(|t| t.is_active())
            .map(Tab::id)
            .collect();
        assert_eq!(active, vec![b]);
    }

    #[test]
    fn test_set_active_same_tab_is_idempotent() {
        let mut registry = TabRegistry::new();
        let a = registry.add_tab("A", ()).id();

        registry.set_active(a).expect("should activate");
        registry.set_active(a).expect("should activate again");
        assert_eq!(registry.active_id(), Some(a));
    }

    #[test]
    fn test_set_active_not_found() {
        let mut registry = TabRegistry::new();
        registry.add_tab("A", ());

        let result = registry.set_active(999);
        assert_eq!(result, Err(CoreError::TabNotFound(999)));
        // Registry unchanged
        assert!(registry.active_tab().is_none());
    }

    // ==================== Remove Tests ====================

    #[test]
    fn test_remove_returns_tab() {
        let mut registry = TabRegistry::new();
        let id = registry.add_tab("A", "payload").id();

        let removed = registry.remove(id).expect("should remove tab");
        assert_eq!(removed.id(), id);
        assert_eq!(removed.title(), "A");
        assert_eq!(*removed.content(), "payload");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_preserves_order_of_remainder() {
        let mut registry = TabRegistry::new();
        registry.add_tab("A", ());
        let b = registry.add_tab("B", ()).id();
        registry.add_tab("C", ());

        registry.remove(b).expect("should remove tab");

        let titles: Vec<&str> = registry.tabs().iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_not_found() {
        let mut registry = TabRegistry::new();
        registry.add_tab("A", ());

        let result = registry.remove(999);
        assert!(matches!(result, Err(CoreError::TabNotFound(999))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_active_does_not_reselect() {
        let mut registry = TabRegistry::new();
        let a = registry.add_tab("A", ()).id();
        let b = registry.add_tab("B", ()).id();
        registry.set_active(b).expect("should activate");

        registry.remove(b).expect("should remove tab");

        // Pure data store: no policy runs here
        assert!(registry.active_tab().is_none());
        assert_eq!(registry.get(a).map(Tab::id), Some(a));
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_existing_and_missing() {
        let mut registry = TabRegistry::new();
        let id = registry.add_tab("A", ()).id();
        assert!(registry.get(id).is_some());
        assert!(registry.get(999).is_none());
    }

    #[test]
    fn test_get_mut() {
        let mut registry = TabRegistry::new();
        let id = registry.add_tab("A", String::from("x")).id();
        registry
            .get_mut(id)
            .expect("tab exists")
            .content_mut()
            .push('y');
        assert_eq!(registry.get(id).map(|t| t.content().as_str()), Some("xy"));
    }

    #[test]
    fn test_newest_id() {
        let mut registry = TabRegistry::new();
        assert_eq!(registry.newest_id(), None);

        registry.add_tab("A", ());
        let b = registry.add_tab("B", ()).id();
        let c = registry.add_tab("C", ()).id();
        assert_eq!(registry.newest_id(), Some(c));

        registry.remove(c).expect("should remove tab");
        assert_eq!(registry.newest_id(), Some(b));
    }

    // ==================== Property Tests ====================

    proptest! {
        /// Ids are pairwise distinct and strictly increasing in call order.
        #[test]
        fn prop_ids_strictly_increasing(count in 1usize..64) {
            let mut registry = TabRegistry::new();
            let ids: Vec<TabId> = (0..count)
                .map(|i| registry.add_tab(format!("TAB_{i}"), ()).id())
                .collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }

        /// Removal preserves the relative order of all other tabs.
        #[test]
        fn prop_remove_preserves_order(count in 2usize..32, victim in 0usize..32) {
            prop_assume!(victim < count);
            let mut registry = TabRegistry::new();
            let ids: Vec<TabId> = (0..count)
                .map(|i| registry.add_tab(format!("TAB_{i}"), ()).id())
                .collect();

            registry.remove(ids[victim]).expect("victim exists");

            let expected: Vec<TabId> = ids
                .iter()
                .copied()
                .filter(|&id| id != ids[victim])
                .collect();
            let actual: Vec<TabId> = registry.tabs().iter().map(Tab::id).collect();
            prop_assert_eq!(actual, expected);
        }

        /// After any interleaving of adds and activations, at most one
        /// tab is active and it is the most recently activated one.
        #[test]
        fn prop_single_active(activations in proptest::collection::vec(0u64..16, 0..32)) {
            let mut registry = TabRegistry::new();
            for i in 0..16u64 {
                registry.add_tab(format!("TAB_{i}"), ());
            }

            let mut last_ok = None;
            for id in activations {
                if registry.set_active(id + 1).is_ok() {
                    last_ok = Some(id + 1);
                }
            }

            let active: Vec<TabId> = registry
                .tabs()
                .iter()
                .filter(|t| t.is_active())
                .map(Tab::id)
                .collect();
            match last_ok {
                Some(id) => prop_assert_eq!(active, vec![id]),
                None => prop_assert!(active.is_empty()),
            }
        }
    }
}
