//! Tangocho: the collection-management core of a vocabulary flashcard app.
//!
//! Tangocho (単語帳, "vocabulary notebook") is an embedded library, not a
//! service: a presentation layer (GUI, TUI, anything) drives it through a
//! small mutation API and re-queries read accessors after every change.
//! It provides:
//! - Folders of cards with manual drag ordering, pinning, and search
//! - Validated create/rename/update/delete with cascade deletion and
//!   order-index renormalization
//! - A pure, deterministic ordering & filter engine (four sort orders,
//!   starred filter, case-insensitive search)
//! - JSON file persistence with atomic writes, plus an in-memory store
//! - A shuffled flip-through study session over any card list
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation layer (not this crate)                │  ← gestures, rendering
//! └─────────────────────────────────────────────────────┘
//!        │ mutations                  │ re-query (pull)
//! ┌──────────────────────┐   ┌──────────────────────────┐
//! │ Application (app/)   │   │ Query engine (query/)    │
//! │ - Coordinator        │──▶│ - visible_folders        │
//! │ - validation         │   │ - visible_cards          │
//! │ - cascade + reindex  │   │ - view-state objects     │
//! └──────────────────────┘   └──────────────────────────┘
//!        │
//! ┌──────────────────────┐   ┌──────────────────────────┐
//! │ Storage (storage/)   │   │ Study (study/)           │
//! │ - EntityStore trait  │   │ - StudySession           │
//! │ - JsonStore          │   │   (shuffle/flip/step)    │
//! │ - MemoryStore        │   └──────────────────────────┘
//! └──────────────────────┘
//!        │
//! ┌─────────────────────────────────────────────────────┐
//! │ Domain (domain/): Folder, Card, errors              │
//! │ Infrastructure (infrastructure/): data-dir paths    │
//! │ Observability (observability/): file-based logs     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: the mutation coordinator
//! - [`domain`]: core entity types and errors
//! - [`query`]: pure ordering & filtering with explicit view state
//! - [`storage`]: entity-store trait and backends
//! - [`study`]: study-session state machine
//! - [`infrastructure`]: storage-path resolution
//! - [`observability`]: optional tracing setup
//!
//! # Persistence contract
//!
//! Mutations apply to the in-memory graph first and then request a save.
//! A failed save is reported to the caller but the in-memory change stays
//! applied; see [`app::Coordinator`] for the full contract.
//!
//! # Examples
//!
//! ```
//! use tangocho::{CardContent, CardQuery, Coordinator, MemoryStore};
//!
//! let mut app = Coordinator::new(MemoryStore::new());
//!
//! let animals = app.create_folder("Animals")?;
//! let cat = app.create_card(animals.id, CardContent {
//!     front_text: "Cat".to_string(),
//!     back_meaning: "ネコ".to_string(),
//!     ..CardContent::default()
//! })?;
//!
//! app.toggle_star(cat.id)?;
//! let starred = app.sorted_and_filtered_cards(animals.id, &CardQuery::starred())?;
//! assert_eq!(starred.len(), 1);
//! # Ok::<(), tangocho::TangochoError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod query;
pub mod storage;
pub mod study;

pub use app::Coordinator;
pub use domain::{Card, CardContent, Folder, Result, TangochoError};
pub use query::{CardQuery, CardSort, FolderQuery};
pub use storage::{EntityStore, JsonStore, MemoryStore};
pub use study::StudySession;

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Library configuration provided by the embedding application.
///
/// All fields are optional; defaults resolve to the platform data
/// directory and `info`-level logging.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path of the JSON collection file. Defaults to
    /// `<data dir>/collection.json`.
    pub storage_file: Option<String>,

    /// Log level for [`observability::init_tracing`]: `trace`, `debug`,
    /// `info`, `warn`, `error`. Default: `"info"`. `RUST_LOG` overrides.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a host-provided key-value map.
    ///
    /// Unknown keys are ignored; missing keys fall back to defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use tangocho::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("storage_file".to_string(), "/tmp/cards.json".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.storage_file.as_deref(), Some("/tmp/cards.json"));
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self {
            storage_file: config.get("storage_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Opens the collection and returns a ready coordinator.
///
/// Resolves the storage path from `config` (falling back to the platform
/// data directory), opens or creates the JSON store, and wraps it in a
/// [`Coordinator`]. Call [`observability::init_tracing`] separately if the
/// embedding application wants this crate to install a log subscriber.
///
/// # Errors
///
/// Returns an error if the storage file exists but cannot be read or
/// parsed.
///
/// # Examples
///
/// ```no_run
/// use tangocho::{initialize, Config, FolderQuery};
///
/// let mut app = initialize(&Config::default())?;
/// let folders = app.sorted_folders(&FolderQuery::default())?;
/// # Ok::<(), tangocho::TangochoError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Coordinator<JsonStore>> {
    let path = config
        .storage_file
        .as_ref()
        .map_or_else(infrastructure::default_storage_file, PathBuf::from);

    tracing::debug!(path = ?path, "opening collection");
    let store = JsonStore::new(path)?;
    Ok(Coordinator::new(store))
}
