//! Storage location resolution.
//!
//! The collection file and log file live in the platform-appropriate local
//! data directory (e.g. `~/.local/share/tangocho` on Linux). When the
//! platform offers no data directory, the current directory is used so the
//! crate still functions in minimal environments.

use std::path::PathBuf;

const APP_DIR: &str = "tangocho";

/// Returns the data directory for collection storage and logs.
///
/// The directory is not created here; creation happens lazily by whichever
/// component first writes into it.
///
/// # Examples
///
/// ```
/// use tangocho::infrastructure::data_dir;
///
/// let dir = data_dir();
/// assert!(dir.to_str().is_some());
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(APP_DIR))
}

/// Default path of the JSON collection file.
#[must_use]
pub fn default_storage_file() -> PathBuf {
    data_dir().join("collection.json")
}
