//! Ordering & filter engine.
//!
//! Pure logic computing the display order and visible subset of folders and
//! cards from the current view state. No hidden state and no caching: every
//! function recomputes its result from its inputs, which keeps the engine
//! deterministic and trivially testable.
//!
//! # Modules
//!
//! - [`view`]: view-state value objects ([`FolderQuery`], [`CardQuery`],
//!   [`CardSort`]) passed in by the presentation layer
//! - [`folders`]: folder display ordering (pinned first, then manual
//!   position) and search filtering
//! - [`cards`]: card filtering (starred, search) and the four sort orders

pub mod cards;
pub mod folders;
pub mod view;

pub use cards::visible_cards;
pub use folders::{display_order, visible_folders};
pub use view::{CardQuery, CardSort, FolderQuery};
