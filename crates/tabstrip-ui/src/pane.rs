//! Pane trait: the content-handle contract for terminal hosts.
//!
//! The core treats tab content as an opaque handle. In the terminal
//! host that handle is a boxed [`Pane`], something that can draw itself
//! into a ratatui frame when its tab is the visible one.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Renderable content pane for a tab.
///
/// Panes are owned by their tab inside the registry; the host only
/// borrows them at frame time to draw the visible one.
///
/// # Example
///
/// ```
/// use ratatui::prelude::*;
/// use tabstrip_ui::Pane;
///
/// struct Counter(u32);
///
/// impl Pane for Counter {
///     fn view(&self, frame: &mut Frame, area: Rect) {
///         // draw self.0 into area
///     }
/// }
/// ```
pub trait Pane {
    /// Renders the pane content to the given area.
    fn view(&self, frame: &mut Frame, area: Rect);
}

/// A pane that displays a fixed block of text.
///
/// This is the bundled pane used by the demo binary; real applications
/// implement [`Pane`] for their own content types.
#[derive(Debug, Clone)]
pub struct TextPane {
    text: String,
}

impl TextPane {
    /// Creates a text pane with the given body.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        TextPane { text: text.into() }
    }

    /// Returns the pane's text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Pane for TextPane {
    fn view(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.text.as_str())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}
