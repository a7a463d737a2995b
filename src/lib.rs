//! # Newsreel
//!
//! An offline-first, paginated news reader.
//!
//! ## Architecture
//!
//! The data path flows strictly upward:
//!
//! ```text
//! Remote → Repository (fans out to Store) → Feed → UI
//! ```
//!
//! - [`remote`]: one-shot HTTP fetch of the full news collection, translated
//!   into a flat error taxonomy
//! - [`store`]: SQLite article cache with paged reads and bulk upsert
//! - [`repo`]: fetch-then-cache-then-read-back orchestration, with the cache
//!   as offline fallback on connection failures
//! - [`feed`]: the pagination state machine behind infinite scroll, refresh,
//!   and error recovery
//!
//! ## Quick Start
//!
//! ```bash
//! # Sync the cache and print the first page
//! newsreel fetch
//!
//! # Browse the cache without touching the network
//! newsreel list --page 2
//!
//! # Interactive reader
//! newsreel tui
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the store and the remote source
/// together once at startup; everything downstream takes explicit
/// references.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Core domain models: [`NewsArticle`](domain::NewsArticle) and its
/// [`Media`](domain::Media) attachment.
pub mod domain;

/// Pagination state machine.
///
/// [`NewsFeed`](feed::NewsFeed) accumulates pages, guards against
/// overlapping fetches, and publishes [`NewsFeedState`](feed::NewsFeedState)
/// to the presentation layer.
pub mod feed;

/// Remote news source.
///
/// - [`RemoteSource`](remote::RemoteSource): async trait, one operation
/// - [`HttpRemote`](remote::http::HttpRemote): reqwest-based implementation
/// - [`RemoteError`](remote::RemoteError): flat failure taxonomy
pub mod remote;

/// The news repository: remote fetch plus cache synchronization and
/// fallback policy.
pub mod repo;

/// SQLite persistence layer.
///
/// - [`CacheStore`](store::CacheStore): trait defining cache operations
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;

/// Terminal user interface built with ratatui: article list, detail pane,
/// and a status bar surfacing loading and error states.
pub mod tui;
