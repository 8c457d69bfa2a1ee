//! Main application struct
//!
//! [`App`] wires the core controller to the terminal host and owns the
//! per-frame render: tab bar at the top, the visible pane below it.
//!
//! # Example
//!
//! ```ignore
//! use tabstrip_ui::{App, TextPane};
//!
//! let mut app = App::new();
//! app.open("TAB_1", Box::new(TextPane::new("hello")));
//!
//! loop {
//!     terminal.draw(|f| app.render(f))?;
//!     // feed key events into app.open/select/close...
//!     if app.should_quit() {
//!         break;
//!     }
//! }
//! ```

use ratatui::prelude::*;

use crate::host::TuiHost;
use crate::pane::Pane;
use crate::renderer::AppLayout;
use crate::theme::Theme;
use crate::widgets::TabBar;
use tabstrip_core::{TabId, TabStrip};

/// Application state for the terminal tab strip demo.
///
/// Owns a [`TabStrip`] over boxed [`Pane`] content and a [`TuiHost`],
/// plus the theme and the quit flag. All tab behavior lives in the
/// controller; `App` only forwards intents and projects state into
/// widgets.
pub struct App {
    strip: TabStrip<Box<dyn Pane>, TuiHost>,
    theme: Theme,
    should_quit: bool,
}

impl App {
    /// Creates a new app with the default dark theme.
    #[must_use]
    pub fn new() -> Self {
        App::with_theme(Theme::dark())
    }

    /// Creates a new app with a custom theme.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        App {
            strip: TabStrip::new(TuiHost::new()),
            theme,
            should_quit: false,
        }
    }

    /// Opens a new tab; it becomes the active one.
    pub fn open(&mut self, title: impl Into<String>, pane: Box<dyn Pane>) -> TabId {
        self.strip.open(title, pane)
    }

    /// Activates a tab by id; stale ids are ignored.
    pub fn select(&mut self, id: TabId) {
        self.strip.select(id);
    }

    /// Closes a tab by id; stale ids are ignored.
    pub fn close(&mut self, id: TabId) {
        self.strip.close(id);
    }

    /// Closes the active tab, if any.
    pub fn close_active(&mut self) {
        if let Some(id) = self.strip.active_id() {
            self.strip.close(id);
        }
    }

    /// Returns the active tab's id, or `None` when the strip is empty.
    #[must_use]
    pub fn active_id(&self) -> Option<TabId> {
        self.strip.active_id()
    }

    /// Returns the number of tabs.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.strip.len()
    }

    /// Returns whether the app has any tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strip.is_empty()
    }

    /// Read access to the controller.
    #[must_use]
    pub fn strip(&self) -> &TabStrip<Box<dyn Pane>, TuiHost> {
        &self.strip
    }

    /// Sets the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Gets the current theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Requests application shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns whether shutdown was requested.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Renders the tab bar and the visible content pane.
    ///
    /// The tab bar draws from the host's label projection; the content
    /// area draws the pane whose id the host reports visible, looked up
    /// in the registry. An empty strip renders an empty content area.
    pub fn render(&self, frame: &mut Frame) {
        let layout = AppLayout::new(frame.area());

        let host = self.strip.host();
        let tab_bar = TabBar::new(host.labels(), &self.theme);
        frame.render_widget(tab_bar, layout.tab_bar);

        if let Some(id) = host.visible_content() {
            if let Some(tab) = self.strip.registry().get(id) {
                tab.content().view(frame, layout.content);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::TextPane;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn pane(text: &str) -> Box<dyn Pane> {
        Box::new(TextPane::new(text))
    }

    #[test]
    fn test_new_app_is_empty() {
        let app = App::new();
        assert!(app.is_empty());
        assert_eq!(app.tab_count(), 0);
        assert_eq!(app.active_id(), None);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_open_select_close_round() {
        let mut app = App::new();
        let a = app.open("A", pane("a"));
        let b = app.open("B", pane("b"));
        assert_eq!(app.active_id(), Some(b));

        app.select(a);
        assert_eq!(app.active_id(), Some(a));

        app.close(a);
        assert_eq!(app.active_id(), Some(b));
        assert_eq!(app.tab_count(), 1);
    }

    #[test]
    fn test_close_active_helper() {
        let mut app = App::new();
        app.open("A", pane("a"));
        app.close_active();
        assert!(app.is_empty());

        // No active tab left: another call is a no-op
        app.close_active();
        assert!(app.is_empty());
    }

    #[test]
    fn test_quit_flag() {
        let mut app = App::new();
        app.quit();
        assert!(app.should_quit());
    }

    #[test]
    fn test_render_draws_active_pane() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).expect("terminal");

        let mut app = App::new();
        app.open("TAB_1", pane("first pane"));
        app.open("TAB_2", pane("second pane"));

        terminal.draw(|f| app.render(f)).expect("draw");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("TAB_1"));
        assert!(text.contains("TAB_2"));
        assert!(text.contains("second pane"));
        assert!(!text.contains("first pane"));
    }

    #[test]
    fn test_render_empty_strip() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).expect("terminal");

        let mut app = App::new();
        let a = app.open("TAB_1", pane("first pane"));
        app.close(a);

        terminal.draw(|f| app.render(f)).expect("draw");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(!text.contains("TAB_1"));
        assert!(!text.contains("first pane"));
    }
}
