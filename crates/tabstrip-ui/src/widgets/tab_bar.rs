//! Tab bar widget for displaying and selecting tabs
//!
//! The [`TabBar`] widget renders a horizontal bar showing every mounted
//! tab label, with the highlighted label in the theme's accent color
//! and the rest muted. It draws from [`TabLabel`] projection state, not
//! from the registry: the bar shows exactly what the host was
//! instructed to mount.

use ratatui::prelude::*;
use ratatui::widgets::{Tabs, Widget};

use crate::host::TabLabel;
use crate::theme::Theme;

/// Tab bar widget that displays tab labels
///
/// # Example
///
/// ```ignore
/// let tab_bar = TabBar::new(strip.host().labels(), &theme);
/// frame.render_widget(tab_bar, layout.tab_bar);
/// ```
pub struct TabBar<'a> {
    /// Labels to display, in mount order
    labels: &'a [TabLabel],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    /// Creates a new tab bar over the host's label strip.
    pub fn new(labels: &'a [TabLabel], theme: &'a Theme) -> Self {
        TabBar { labels, theme }
    }

    /// Returns the number of labels in this bar
    pub fn tab_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether the tab bar is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Handle empty strip gracefully
        if self.labels.is_empty() {
            return;
        }

        let titles: Vec<Line> = self
            .labels
            .iter()
            .map(|label| {
                let content = format!(" {} ", label.title);
                if label.highlighted {
                    Line::from(content).style(
                        Style::default()
                            .fg(self.theme.colors.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::from(content).style(Style::default().fg(self.theme.colors.muted))
                }
            })
            .collect();

        let selected = self.labels.iter().position(|l| l.highlighted);
        let tabs_widget = Tabs::new(titles)
            .select(selected)
            .divider(" | ")
            .style(Style::default().bg(self.theme.colors.background));

        tabs_widget.render(area, buf);
    }
}
