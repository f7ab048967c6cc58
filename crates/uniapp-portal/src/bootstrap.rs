// ABOUTME: Composition root helpers: builds the single RecordStore an application owns.
// ABOUTME: Decides, per configuration, whether a corrupt record file falls back to empty or aborts.

use uniapp_store::{RecordStore, StoreError};

use crate::config::{CorruptPolicy, PortalConfig};

/// Open the record store named by `config`.
///
/// A corrupt file is replaced by an empty in-memory collection under
/// `CorruptPolicy::Empty`; the file itself is left untouched until the next
/// mutation overwrites it.
pub fn open_store(config: &PortalConfig) -> Result<RecordStore, StoreError> {
    match RecordStore::open(&config.data_file) {
        Ok(store) => Ok(store),
        Err(e) if e.is_corrupt() && config.on_corrupt == CorruptPolicy::Empty => {
            tracing::warn!("{}; starting with no students", e);
            Ok(RecordStore::empty(&config.data_file))
        }
        Err(e) => Err(e),
    }
}
