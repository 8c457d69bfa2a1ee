//! Terminal implementation of the core's host interface.
//!
//! [`TuiHost`] is a pure projection of the instructions it receives
//! from the controller: it keeps the label strip in mount order, the
//! highlighted label, and the id of the visible content pane. It holds
//! no content and no back-reference into the registry; at frame time
//! the renderer reads the visible id from here and looks the pane up
//! through the controller.

use tabstrip_core::{TabHost, TabId};

/// One entry in the label strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    /// Id echoed back to the controller on select/close
    pub id: TabId,
    /// Display title, as given at mount time
    pub title: String,
    /// Whether this label is the highlighted one
    pub highlighted: bool,
}

/// Host-side widget state for the terminal tab strip.
///
/// # Example
///
/// ```
/// use tabstrip_core::TabStrip;
/// use tabstrip_ui::{Pane, TextPane, TuiHost};
///
/// let mut strip: TabStrip<Box<dyn Pane>, TuiHost> = TabStrip::new(TuiHost::new());
/// let id = strip.open("Home", Box::new(TextPane::new("hi")));
///
/// assert_eq!(strip.host().labels().len(), 1);
/// assert_eq!(strip.host().visible_content(), Some(id));
/// ```
#[derive(Debug, Default)]
pub struct TuiHost {
    /// Labels in mount order
    labels: Vec<TabLabel>,
    /// Content ids currently mounted
    mounted: Vec<TabId>,
    /// Content pane currently shown, if any
    visible: Option<TabId>,
}

impl TuiHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        TuiHost::default()
    }

    /// Returns the label strip in mount order.
    #[must_use]
    pub fn labels(&self) -> &[TabLabel] {
        &self.labels
    }

    /// Returns the index of the highlighted label, if any.
    #[must_use]
    pub fn highlighted_index(&self) -> Option<usize> {
        self.labels.iter().position(|l| l.highlighted)
    }

    /// Returns the id of the visible content pane, if any.
    ///
    /// `None` means the content area renders empty, which is the state
    /// after the last tab is closed.
    #[must_use]
    pub fn visible_content(&self) -> Option<TabId> {
        self.visible
    }

    fn label_mut(&mut self, id: TabId) -> Option<&mut TabLabel> {
        self.labels.iter_mut().find(|l| l.id == id)
    }
}

impl<C> TabHost<C> for TuiHost {
    fn mount_label(&mut self, id: TabId, title: &str) {
        self.labels.push(TabLabel {
            id,
            title: title.to_string(),
            highlighted: false,
        });
    }

    fn unmount_label(&mut self, id: TabId) {
        self.labels.retain(|l| l.id != id);
    }

    fn set_label_highlighted(&mut self, id: TabId, highlighted: bool) {
        if let Some(label) = self.label_mut(id) {
            label.highlighted = highlighted;
        } else {
            tracing::debug!(id, "highlight for unknown label ignored");
        }
    }

    fn mount_content(&mut self, id: TabId, _content: &C) {
        self.mounted.push(id);
    }

    fn unmount_content(&mut self, id: TabId) {
        self.mounted.retain(|&m| m != id);
        if self.visible == Some(id) {
            self.visible = None;
        }
    }

    fn set_content_visible(&mut self, id: TabId, visible: bool) {
        if visible {
            self.visible = Some(id);
        } else if self.visible == Some(id) {
            self.visible = None;
        }
    }
}
