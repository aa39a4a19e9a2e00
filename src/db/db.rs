use super::migrations::init_with_migrations;
use crate::libs::config::DatabaseLocation;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{Connection, Params, Row};

/// The single connection to the task database.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database and brings its schema up to date.
    pub fn open(location: &DatabaseLocation) -> Result<Db> {
        let mut conn = Self::new_without_migrations(location)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn new_without_migrations(location: &DatabaseLocation) -> Result<Connection> {
        let conn = match location {
            DatabaseLocation::File(path) => Connection::open(path)?,
            DatabaseLocation::Memory => Connection::open_in_memory()?,
        };

        Ok(conn)
    }

    /// Runs a parameterized statement and returns the number of affected rows.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Runs a parameterized query and maps every row with `f`.
    pub fn query<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, f)?.collect::<rusqlite::Result<Vec<T>>>()?;

        Ok(rows)
    }

    /// SQLite's `data_version`, which moves when another connection commits.
    pub fn data_version(&self) -> Result<i64> {
        Ok(self.conn.query_row("PRAGMA data_version", [], |row| row.get(0))?)
    }

    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| msg_error_anyhow!(Message::DbCloseFailed(e.to_string())))
    }
}
