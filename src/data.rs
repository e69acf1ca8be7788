use rusqlite::{params, Connection};

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::internal_error::InternalResult;

pub type DBConnection = Arc<Mutex<Connection>>;

pub fn open_database(path: impl AsRef<Path>) -> InternalResult<Connection> {
    let connection = Connection::open(path)?;
    create_tables(&connection)?;

    Ok(connection)
}

pub fn create_tables(connection: &Connection) -> InternalResult<()> {
    // category_id is only a declaration; tasks may outlive the category they point at.
    connection.pragma_update(None, "foreign_keys", false)?;

    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            code TEXT UNIQUE
        )",
        params![],
    )?;
    connection.execute(
        "CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            due_date TEXT,
            priority TEXT,
            category TEXT,
            status TEXT DEFAULT 'Pending',
            category_id INTEGER,
            FOREIGN KEY(category_id) REFERENCES categories(id)
        )",
        params![],
    )?;

    Ok(())
}

#[cfg(test)]
pub fn open_test_database() -> Connection {
    let connection = Connection::open_in_memory().unwrap();
    create_tables(&connection).unwrap();
    connection
}
