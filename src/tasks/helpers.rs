use chrono::NaiveDate;
use log::info;
use rusqlite::{params, Connection, Row};

use crate::categories::data::CategoryID;
use crate::categories::helpers::{get_category_id_for_code, get_first_category_id};
use crate::internal_error::{InternalError, InternalResult};

use super::data::*;
use super::scoring::{parse_due_date, DATE_FORMAT};

pub const MISSING_FIELDS_MESSAGE: &str = "Task Title and Category are required!";
pub const INVALID_DATE_MESSAGE: &str = "Use format: YYYY-MM-DD";
pub const NO_SELECTION_MESSAGE: &str = "Please select a task to edit!";
/// Category text given to tasks created through quick add.
pub const QUICK_ADD_CATEGORY: &str = "Urgent";

pub fn get_task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let id: TaskID = row.get(0)?;
    let title: String = row.get(1)?;
    let due_date: String = row.get(2)?;
    let priority: Priority = row.get(3)?;
    let category: String = row.get(4)?;

    let mut task = Task::new(id, title, due_date, priority, category);
    task.status = row.get(5)?;
    task.category_id = row.get(6)?;
    task.category_code = row.get(7)?;

    Ok(task)
}

/// Checks input from the task form. `category` is `None` when the caller
/// is editing an existing task and cannot change its category.
pub fn validate_task_input(
    title: &str,
    due_date: &str,
    category: Option<&str>,
) -> InternalResult<()> {
    let category_missing = matches!(category, Some(c) if c.trim().is_empty());

    if title.trim().is_empty() || category_missing {
        return Err(InternalError::from(MISSING_FIELDS_MESSAGE));
    }

    if parse_due_date(due_date.trim()).is_err() {
        return Err(InternalError::from(INVALID_DATE_MESSAGE));
    }

    Ok(())
}

pub fn add_task_to_db(
    title: &str,
    due_date: &str,
    priority: Priority,
    category: &str,
    category_id: Option<CategoryID>,
    db_connection: &Connection,
) -> InternalResult<TaskID> {
    db_connection.execute(
        "INSERT INTO tasks (title, due_date, priority, category, category_id) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![title, due_date, priority, category, category_id],
    )?;
    let id = db_connection.last_insert_rowid();

    info!("Added task {} ({}) under {}", id, title, category);

    Ok(id)
}

/// Validates the request and files the task under the category whose code
/// it names. An unregistered code stores nothing and yields `None`.
pub fn add_task_for_category(
    request: &AddTaskRequest,
    db_connection: &Connection,
) -> InternalResult<Option<TaskID>> {
    validate_task_input(&request.title, &request.due_date, Some(request.category.as_str()))?;

    let category = request.category.trim();
    match get_category_id_for_code(category, db_connection)? {
        Some(category_id) => add_task_to_db(
            request.title.trim(),
            request.due_date.trim(),
            request.priority,
            category,
            Some(category_id),
            db_connection,
        )
        .map(Some),
        None => Ok(None),
    }
}

/// Adds a High priority task due today under the first registered category.
pub fn quick_add_task_to_db(
    title: &str,
    today: NaiveDate,
    db_connection: &Connection,
) -> InternalResult<Option<TaskID>> {
    let title = title.trim();
    if title.is_empty() {
        return Ok(None);
    }

    match get_first_category_id(db_connection)? {
        Some(category_id) => add_task_to_db(
            title,
            &today.format(DATE_FORMAT).to_string(),
            Priority::High,
            QUICK_ADD_CATEGORY,
            Some(category_id),
            db_connection,
        )
        .map(Some),
        None => Ok(None),
    }
}

/// Status and category are left untouched. Returns whether a task matched.
pub fn update_task_in_db(
    task_id: TaskID,
    title: &str,
    due_date: &str,
    priority: Priority,
    db_connection: &Connection,
) -> InternalResult<bool> {
    let changed = db_connection.execute(
        "UPDATE tasks SET title = (?1), due_date = (?2), priority = (?3) WHERE id = (?4)",
        params![title, due_date, priority, task_id],
    )?;

    Ok(changed > 0)
}

pub fn mark_task_done_in_db(task_id: TaskID, db_connection: &Connection) -> InternalResult<bool> {
    let changed = db_connection.execute(
        "UPDATE tasks SET status = (?1) WHERE id = (?2)",
        params![Status::Done, task_id],
    )?;

    if changed > 0 {
        info!("Task {} done", task_id);
    }

    Ok(changed > 0)
}

pub fn delete_task_from_db(task_id: TaskID, db_connection: &Connection) -> InternalResult<bool> {
    let changed = db_connection.execute("DELETE FROM tasks WHERE id = (?1)", params![task_id])?;

    Ok(changed > 0)
}

/// Every task in insertion order, joined with the code of the category it references.
pub fn get_all_tasks_from_db(db_connection: &Connection) -> InternalResult<Vec<Task>> {
    let mut statement = db_connection.prepare(
        "SELECT t.id, t.title, t.due_date, t.priority, t.category, t.status, t.category_id, c.code
         FROM tasks t
         LEFT JOIN categories c ON t.category_id = c.id
         ORDER BY t.id",
    )?;

    let tasks = statement
        .query_map(params![], |row| get_task_from_row(row))?
        .collect::<rusqlite::Result<Vec<Task>>>()?;

    Ok(tasks)
}
