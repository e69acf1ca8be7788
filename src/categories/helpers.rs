use log::{info, warn};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use crate::internal_error::InternalResult;

use super::data::*;

pub fn get_category_from_row(row: &Row) -> rusqlite::Result<Category> {
    let id: CategoryID = row.get(0)?;
    let name: String = row.get(1)?;
    let code: String = row.get(2)?;

    Ok(Category::new(id, name, code))
}

/// Inserts a category. A code that is already registered is not an error;
/// the insert is skipped and reported as `InsertOutcome::Duplicate`.
pub fn add_category_to_db(
    name: &str,
    code: &str,
    db_connection: &Connection,
) -> InternalResult<InsertOutcome> {
    let result = db_connection.execute(
        "INSERT INTO categories (name, code) VALUES (?1, ?2)",
        params![name, code],
    );

    match result {
        Ok(_) => {
            let id = db_connection.last_insert_rowid();
            info!("Registered category {} as {}", code, id);
            Ok(InsertOutcome::Inserted(id))
        }
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            warn!("Category {} already registered", code);
            Ok(InsertOutcome::Duplicate)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn get_categories_from_db(db_connection: &Connection) -> InternalResult<Vec<Category>> {
    let mut statement =
        db_connection.prepare("SELECT id, name, code FROM categories ORDER BY id")?;

    let categories = statement
        .query_map(params![], |row| get_category_from_row(row))?
        .collect::<rusqlite::Result<Vec<Category>>>()?;

    Ok(categories)
}

pub fn get_category_id_for_code(
    code: &str,
    db_connection: &Connection,
) -> InternalResult<Option<CategoryID>> {
    let id = db_connection
        .query_row(
            "SELECT id FROM categories WHERE code = (?1)",
            params![code],
            |row| row.get(0),
        )
        .optional()?;

    Ok(id)
}

pub fn get_first_category_id(db_connection: &Connection) -> InternalResult<Option<CategoryID>> {
    let id = db_connection
        .query_row(
            "SELECT id FROM categories ORDER BY id LIMIT 1",
            params![],
            |row| row.get(0),
        )
        .optional()?;

    Ok(id)
}

/// Removes every task filed under `code`, then the category itself.
/// Returns the number of tasks removed.
pub fn delete_category_from_db(code: &str, db_connection: &Connection) -> InternalResult<usize> {
    let deleted_tasks =
        db_connection.execute("DELETE FROM tasks WHERE category = (?1)", params![code])?;
    db_connection.execute("DELETE FROM categories WHERE code = (?1)", params![code])?;

    info!("Deleted category {} and {} task(s)", code, deleted_tasks);

    Ok(deleted_tasks)
}
