//! Domain layer for the collection core.
//!
//! This module contains the core domain types and business rules of the
//! flashcard collection, independent of storage backends or any presentation
//! concern. It keeps the entity definitions isolated from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`folder`]: Folder domain model
//! - [`card`]: Card domain model and content value object
//!
//! # Examples
//!
//! ```
//! use tangocho::domain::{Card, CardContent, Folder};
//!
//! let folder = Folder::new("Phrases", 0);
//! let card = Card::new(folder.id, CardContent {
//!     front_text: "Banana".to_string(),
//!     back_meaning: "バナナ".to_string(),
//!     ..CardContent::default()
//! });
//! assert_eq!(card.folder_id, folder.id);
//! ```

pub mod card;
pub mod error;
pub mod folder;

pub use card::{Card, CardContent};
pub use error::{Result, TangochoError};
pub use folder::Folder;
