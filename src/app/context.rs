use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{NewsreelError, Result};
use crate::remote::http::HttpRemote;
use crate::remote::RemoteSource;
use crate::repo::NewsRepository;
use crate::store::sqlite::SqliteStore;
use crate::store::CacheStore;

/// Wires the shared components together once at startup. Everything below
/// takes these as explicit references; there is no global state.
pub struct AppContext {
    pub store: Arc<SqliteStore>,
    pub remote: Arc<dyn RemoteSource + Send + Sync>,
}

impl AppContext {
    pub fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store = Arc::new(SqliteStore::new(&db_path)?);
        let remote: Arc<dyn RemoteSource + Send + Sync> = Arc::new(HttpRemote::new());

        Ok(Self { store, remote })
    }

    pub fn in_memory() -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        let remote: Arc<dyn RemoteSource + Send + Sync> = Arc::new(HttpRemote::new());

        Ok(Self { store, remote })
    }

    pub fn repository(&self) -> NewsRepository {
        NewsRepository::new(
            self.remote.clone(),
            self.store.clone() as Arc<dyn CacheStore + Send + Sync>,
        )
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| NewsreelError::Config("Could not find data directory".into()))?;
        let newsreel_dir = data_dir.join("newsreel");
        std::fs::create_dir_all(&newsreel_dir)?;
        Ok(newsreel_dir.join("newsreel.db"))
    }
}
