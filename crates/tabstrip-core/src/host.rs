//! Host rendering interface.
//!
//! The core never touches pixels, fonts, or colors. Instead the
//! controller drives an implementation of [`TabHost`], which translates
//! mount/unmount/highlight/visibility instructions into whatever widget
//! toolkit the host uses. Communication is one-directional: the host
//! holds only tab ids and echoes them back when raising intents; it has
//! no back-pointer into the registry.

use crate::tab::TabId;

/// Rendering capability the controller requires from its collaborator.
///
/// Implementations are expected to be a pure projection of the
/// instructions they receive: they key their own widget state by
/// [`TabId`] and never invent or mutate ids.
///
/// Content handles are passed by reference at mount time only; the
/// registry keeps ownership, so a host that needs to draw content later
/// reads it back through the controller at frame time.
///
/// # Example
///
/// ```
/// use tabstrip_core::{TabHost, TabId};
///
/// /// Host that keeps a flat list of labels in mount order.
/// #[derive(Default)]
/// struct Labels(Vec<(TabId, String)>);
///
/// impl TabHost<()> for Labels {
///     fn mount_label(&mut self, id: TabId, title: &str) {
///         self.0.push((id, title.to_string()));
///     }
///     fn unmount_label(&mut self, id: TabId) {
///         self.0.retain(|(l, _)| *l != id);
///     }
///     fn set_label_highlighted(&mut self, _id: TabId, _highlighted: bool) {}
///     fn mount_content(&mut self, _id: TabId, _content: &()) {}
///     fn unmount_content(&mut self, _id: TabId) {}
///     fn set_content_visible(&mut self, _id: TabId, _visible: bool) {}
/// }
/// ```
pub trait TabHost<C> {
    /// Appends a tab label to the strip.
    fn mount_label(&mut self, id: TabId, title: &str);

    /// Removes a tab label from the strip.
    fn unmount_label(&mut self, id: TabId);

    /// Highlights or un-highlights a tab label.
    fn set_label_highlighted(&mut self, id: TabId, highlighted: bool);

    /// Mounts a content pane. Panes are mounted hidden; visibility is
    /// driven separately by [`set_content_visible`](Self::set_content_visible).
    fn mount_content(&mut self, id: TabId, content: &C);

    /// Unmounts a content pane.
    fn unmount_content(&mut self, id: TabId);

    /// Shows or hides a mounted content pane.
    fn set_content_visible(&mut self, id: TabId, visible: bool);
}
