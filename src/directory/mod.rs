//! In-memory album directory
//!
//! The directory is an ordered sequence of albums shared by every request
//! handler. Reads take a snapshot under the read lock and writes append under
//! the write lock, so concurrent handlers never observe a partially updated
//! sequence.

use tokio::sync::RwLock;

use crate::types::{seed_albums, Album};
use crate::{Error, Result};

/// AlbumDirectory holds every album known to the service, in insertion order
#[derive(Debug, Default)]
pub struct AlbumDirectory {
    albums: RwLock<Vec<Album>>,
}

impl AlbumDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding the startup albums
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }

    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Snapshot of every album in insertion order
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// Find the first album whose id matches exactly
    pub async fn get(&self, id: &str) -> Result<Album> {
        let albums = self.albums.read().await;
        albums
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    /// Append an album to the end of the directory
    ///
    /// The album is stored as given. Duplicate ids are accepted; lookups
    /// keep returning the earliest one.
    pub async fn create(&self, album: Album) -> Album {
        let mut albums = self.albums.write().await;
        albums.push(album.clone());
        album
    }

    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_directory_lists_in_order() {
        let directory = AlbumDirectory::seeded();

        let albums = directory.list().await;
        let ids: Vec<&str> = albums.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(albums[0].title, "Blue Train");
        assert_eq!(albums[2].artist, "Sarah Vaughan");
    }

    #[tokio::test]
    async fn test_get_is_exact_and_case_sensitive() {
        let directory = AlbumDirectory::with_albums(vec![Album::new("abc", "Lower", "A", 1.0)]);

        assert_eq!(directory.get("abc").await.unwrap().title, "Lower");
        assert!(matches!(
            directory.get("ABC").await,
            Err(Error::AlbumNotFound(id)) if id == "ABC"
        ));
        assert!(directory.get("ab").await.is_err());
        assert!(directory.get("").await.is_err());
    }

    #[tokio::test]
    async fn test_create_appends_and_first_match_wins() {
        let directory = AlbumDirectory::seeded();

        let created = directory
            .create(Album::new("1", "Duplicate", "Someone", -5.0))
            .await;
        assert_eq!(created.title, "Duplicate");

        let albums = directory.list().await;
        assert_eq!(albums.len(), 4);
        assert_eq!(albums[3], created);

        // The seeded album with id "1" still shadows the later duplicate
        assert_eq!(directory.get("1").await.unwrap().title, "Blue Train");
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let directory = AlbumDirectory::new();

        assert!(directory.is_empty().await);
        assert!(directory.list().await.is_empty());
        assert!(directory.get("1").await.is_err());
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_all_applied() {
        let directory = Arc::new(AlbumDirectory::seeded());

        let mut handles = Vec::new();
        for i in 0..32 {
            let directory = directory.clone();
            handles.push(tokio::spawn(async move {
                directory
                    .create(Album::new(format!("c{}", i), "Concurrent", "Task", i as f64))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(directory.len().await, 35);
        for i in 0..32 {
            let album = directory.get(&format!("c{}", i)).await.unwrap();
            assert_eq!(album.price, i as f64);
        }
    }
}
