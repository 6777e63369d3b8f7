//! Album directory - a small HTTP JSON API over an in-memory list of albums
//!
//! The service keeps an ordered directory of record albums for the lifetime
//! of the process and exposes it over HTTP:
//! - `GET /albums` lists every album in insertion order
//! - `GET /albums/:id` fetches the first album with a matching id
//! - `POST /albums` appends a new album

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod types;

pub use error::{Error, Result};
