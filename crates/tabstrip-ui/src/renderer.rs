//! Layout calculation for the main application frame.
//!
//! Divides the terminal into a one-line tab bar at the top and a
//! content area filling the rest.
//!
//! # Layout Structure
//!
//! ```text
//! +---------------------------------+
//! | Tab Bar (1 line)                |
//! +---------------------------------+
//! |                                 |
//! | Content Area                    |
//! | (remaining space)               |
//! |                                 |
//! +---------------------------------+
//! ```

use ratatui::prelude::*;

/// Main application layout areas
///
/// # Example
///
/// ```
/// use ratatui::prelude::Rect;
/// use tabstrip_ui::AppLayout;
///
/// let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
/// assert_eq!(layout.tab_bar, Rect::new(0, 0, 80, 1));
/// assert_eq!(layout.content, Rect::new(0, 1, 80, 23));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    /// Area for the tab bar (top)
    pub tab_bar: Rect,
    /// Area for the visible content pane
    pub content: Rect,
}

impl AppLayout {
    /// Calculate layout areas from the total terminal area.
    ///
    /// For terminals with height less than 2, the layout degrades
    /// gracefully by giving everything to content.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        if area.height < 2 {
            return AppLayout {
                tab_bar: Rect::default(),
                content: area,
            };
        }

        AppLayout {
            tab_bar: Rect::new(area.x, area.y, area.width, 1),
            content: Rect::new(
                area.x,
                area.y + 1,
                area.width,
                area.height.saturating_sub(1),
            ),
        }
    }
}
