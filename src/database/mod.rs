pub mod assert;

use actix_web::web;
use anyhow::Context;
use diesel::{connection::SimpleConnection, Connection, SqliteConnection};

use crate::error::ApiError;

const BUSY_TIMEOUT_MS: u64 = 5_000;

const CREATE_COMMENTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        author TEXT NOT NULL,
        content TEXT NOT NULL,
        timestamp DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
";

/// Location of the comment store. Every call opens its own connection.
#[derive(Clone, Debug)]
pub struct Database {
    url: String,
}

impl Database {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Opens a connection that waits on a locked store instead of failing.
    pub fn connect(&self) -> Result<SqliteConnection, ApiError> {
        establish(&self.url)
    }

    pub fn initialize_schema(&self) -> anyhow::Result<()> {
        let conn = self
            .connect()
            .with_context(|| format!("DB connection to {}", self.url))?;
        conn.batch_execute(CREATE_COMMENTS_TABLE)
            .context("Creating comments table")?;
        Ok(())
    }

    /// Runs `f` on the blocking pool with a fresh connection that is closed
    /// when `f` returns, whether it succeeded or not.
    pub async fn with_connection<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&SqliteConnection) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let url = self.url.clone();
        let res = web::block(move || {
            let conn = establish(&url)?;
            f(&conn)
        })
        .await?;
        Ok(res)
    }
}

fn establish(url: &str) -> Result<SqliteConnection, ApiError> {
    let conn = SqliteConnection::establish(url)?;
    conn.batch_execute(&format!("PRAGMA busy_timeout = {};", BUSY_TIMEOUT_MS))?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::comments::NewComment;
    use diesel::prelude::*;
    use std::thread;

    fn test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("comments.db").to_string_lossy());
        db.initialize_schema().unwrap();
        (dir, db)
    }

    #[test]
    fn concurrent_writers_wait_for_the_lock() {
        use crate::schema::comments;
        const WRITERS: usize = 16;
        const INSERTS: usize = 20;

        let (_dir, db) = test_db();
        let handles: Vec<_> = (0..WRITERS)
            .map(|w| {
                let db = db.clone();
                thread::spawn(move || {
                    for i in 0..INSERTS {
                        let conn = db.connect().unwrap();
                        let data = NewComment {
                            author: format!("writer {}", w),
                            content: format!("comment {}", i),
                        };
                        diesel::insert_into(comments::table)
                            .values(&data)
                            .execute(&conn)
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let conn = db.connect().unwrap();
        let count = comments::table.count().get_result::<i64>(&conn).unwrap();
        assert_eq!(count, (WRITERS * INSERTS) as i64);
    }

    #[test]
    fn timestamp_is_required() {
        let (_dir, db) = test_db();
        let conn = db.connect().unwrap();
        let res = conn.execute(
            "INSERT INTO comments (author, content, timestamp) VALUES ('Ada', 'Hello', NULL)",
        );
        assert!(res.is_err());
    }

    #[test]
    fn busy_timeout_is_set() {
        let (_dir, db) = test_db();
        let conn = db.connect().unwrap();

        #[derive(QueryableByName)]
        struct Timeout {
            #[sql_type = "diesel::sql_types::BigInt"]
            timeout: i64,
        }
        let res = diesel::sql_query("PRAGMA busy_timeout")
            .load::<Timeout>(&conn)
            .unwrap();
        assert_eq!(res[0].timeout, BUSY_TIMEOUT_MS as i64);
    }
}
