//! UI widgets for the terminal tab strip
//!
//! ## Available Widgets
//!
//! - [`TabBar`] - Horizontal bar displaying tab labels with the
//!   highlighted tab accented

pub mod tab_bar;

pub use tab_bar::TabBar;
