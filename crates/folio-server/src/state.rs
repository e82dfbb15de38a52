//! Shared application state

use folio_core::config::SiteConfig;
use folio_core::media::MediaStore;
use folio_core::storage::Database;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub media: MediaStore,
    pub site: SiteConfig,
}

impl AppState {
    pub fn new(db: Database, media: MediaStore, site: SiteConfig) -> Self {
        Self { db, media, site }
    }
}
