use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection};
use rusqlite_migration::{Migrations, M};

use crate::app::{NewsreelError, Result};
use crate::domain::{Media, NewsArticle};
use crate::store::CacheStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.lock()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|_| NewsreelError::Database(rusqlite::Error::InvalidQuery))?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            NewsreelError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }

    /// An unreadable media column yields no media rather than failing the row.
    fn decode_media(raw: Option<String>) -> Option<Media> {
        raw.and_then(|s| serde_json::from_str(&s).ok())
    }

    fn encode_media(media: &Option<Media>) -> Option<String> {
        media.as_ref().and_then(|m| serde_json::to_string(m).ok())
    }
}

impl CacheStore for SqliteStore {
    fn read_page(&self, offset: u32, limit: u32) -> Result<Vec<NewsArticle>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, title, description, author, is_local, published_at_unix, media
             FROM articles ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let articles = stmt
            .query_map(params![limit, offset], |row| {
                Ok(NewsArticle {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    author: row.get(3)?,
                    is_local: row.get::<_, i64>(4)? != 0,
                    published_at_unix: row.get(5)?,
                    media: Self::decode_media(row.get(6)?),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(articles)
    }

    fn upsert(&self, articles: &[NewsArticle]) -> Result<()> {
        let mut conn = self.lock()?;

        let tx = conn.transaction()?;
        for article in articles {
            tx.execute(
                "INSERT OR REPLACE INTO articles
                 (id, title, description, author, is_local, published_at_unix, media)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    article.id,
                    article.title,
                    article.description,
                    article.author,
                    article.is_local as i64,
                    article.published_at_unix,
                    Self::encode_media(&article.media),
                ],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM articles", [])?;
        Ok(())
    }
}
