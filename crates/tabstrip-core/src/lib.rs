//! # tabstrip-core
//!
//! Tab lifecycle and selection state machine for a closable,
//! browser-like tab strip.
//!
//! ## Overview
//!
//! The crate has two collaborating components:
//!
//! - [`TabRegistry`] owns the ordered collection of tabs, assigns
//!   monotonically increasing identities, and enforces the
//!   single-active-tab invariant.
//! - [`TabStrip`] translates user intents (open, select, close) into
//!   registry mutations and pushes the derived highlight/visibility
//!   state to a [`TabHost`] collaborator.
//!
//! The host is an abstract rendering capability: the core never touches
//! pixels, fonts, or colors, and the host holds only tab ids. Content
//! panes are opaque handles owned by their [`Tab`]; the core carries
//! them between the registry and the host and drops each exactly once
//! when its tab is closed.
//!
//! Everything is single-threaded and synchronous: intents arrive as
//! discrete, non-overlapping events, so there are no locks and no
//! partial states. A stale intent (an id already closed) is a logged
//! no-op, never an error the user sees.
//!
//! ## Example
//!
//! ```
//! use tabstrip_core::{TabHost, TabId, TabStrip};
//!
//! #[derive(Default)]
//! struct NullHost;
//!
//! impl TabHost<String> for NullHost {
//!     fn mount_label(&mut self, _id: TabId, _title: &str) {}
//!     fn unmount_label(&mut self, _id: TabId) {}
//!     fn set_label_highlighted(&mut self, _id: TabId, _highlighted: bool) {}
//!     fn mount_content(&mut self, _id: TabId, _content: &String) {}
//!     fn unmount_content(&mut self, _id: TabId) {}
//!     fn set_content_visible(&mut self, _id: TabId, _visible: bool) {}
//! }
//!
//! let mut strip = TabStrip::new(NullHost);
//! let home = strip.open("Home", "home pane".to_string());
//! let docs = strip.open("Docs", "docs pane".to_string());
//! assert_eq!(strip.active_id(), Some(docs));
//!
//! // Closing the active tab falls back to the newest survivor
//! strip.close(docs);
//! assert_eq!(strip.active_id(), Some(home));
//! ```

pub mod controller;
pub mod error;
pub mod host;
pub mod intent;
pub mod registry;
pub mod tab;

pub use controller::TabStrip;
pub use error::{CoreError, CoreResult};
pub use host::TabHost;
pub use intent::Intent;
pub use registry::TabRegistry;
pub use tab::{Tab, TabId};
