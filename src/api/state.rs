//! API server state

use std::sync::Arc;

use crate::directory::AlbumDirectory;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Album directory shared by every handler
    pub directory: Arc<AlbumDirectory>,
}

impl AppState {
    pub fn new(directory: Arc<AlbumDirectory>) -> Self {
        Self { directory }
    }

    /// State backed by a directory holding the startup albums
    pub fn seeded() -> Self {
        Self::new(Arc::new(AlbumDirectory::seeded()))
    }
}
