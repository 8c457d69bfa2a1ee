//! # tabstrip-ui
//!
//! Terminal host and widgets for the tabstrip framework.
//!
//! This crate projects [`tabstrip_core`]'s host instructions into
//! ratatui widgets:
//!
//! - [`TuiHost`] - [`tabstrip_core::TabHost`] implementation that keeps
//!   label, highlight, and visibility state keyed by tab id
//! - [`TabBar`] - widget rendering the label strip
//! - [`Pane`] / [`TextPane`] - content-handle contract for terminal panes
//! - [`AppLayout`] - tab bar / content area split
//! - [`Theme`] - color palette for the widgets
//! - [`App`] - coordinator owning the controller, host, and render
//!
//! ## Example
//!
//! ```ignore
//! use tabstrip_ui::{App, TextPane};
//!
//! let mut app = App::new();
//! app.open("TAB_1", Box::new(TextPane::new("hello")));
//!
//! loop {
//!     terminal.draw(|f| app.render(f))?;
//!     // translate key events into app.open/select/close
//!     if app.should_quit() {
//!         break;
//!     }
//! }
//! ```

pub mod app;
pub mod host;
pub mod pane;
pub mod renderer;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use host::{TabLabel, TuiHost};
pub use pane::{Pane, TextPane};
pub use renderer::AppLayout;
pub use theme::{Theme, ThemeColors};
pub use widgets::TabBar;
