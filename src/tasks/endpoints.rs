use chrono::Local;
use rocket::serde::json::Json;
use rocket::{get, post, State};

use crate::internal_error::{InternalError, InternalResult};

use super::data::*;
use super::helpers::*;
use super::scoring::task_view;
use crate::data::DBConnection;

#[get("/get_tasks")]
pub fn get_tasks(db_connection: &State<DBConnection>) -> InternalResult<Json<Vec<TaskView>>> {
    let db_connection = db_connection.lock()?;

    let today = Local::now().date_naive();
    let tasks = get_all_tasks_from_db(&db_connection)?
        .into_iter()
        .map(|task| task_view(task, today))
        .collect();

    Ok(Json(tasks))
}

#[post("/add_task", format = "json", data = "<add_task_request>")]
pub fn add_task(
    add_task_request: Json<AddTaskRequest>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<AddTaskResult>> {
    let db_connection = db_connection.lock()?;

    let task_id = add_task_for_category(&add_task_request, &db_connection)?;

    Ok(Json(AddTaskResult { task_id }))
}

#[post("/update_task", format = "json", data = "<update_task_request>")]
pub fn update_task(
    update_task_request: Json<UpdateTaskRequest>,
    db_connection: &State<DBConnection>,
) -> InternalResult<()> {
    let task_id = update_task_request
        .task_id
        .ok_or_else(|| InternalError::from(NO_SELECTION_MESSAGE))?;

    validate_task_input(
        &update_task_request.title,
        &update_task_request.due_date,
        None,
    )?;

    let db_connection = db_connection.lock()?;

    update_task_in_db(
        task_id,
        update_task_request.title.trim(),
        update_task_request.due_date.trim(),
        update_task_request.priority,
        &db_connection,
    )?;

    Ok(())
}

#[post("/mark_done", format = "json", data = "<mark_done_request>")]
pub fn mark_done(
    mark_done_request: Json<MarkDoneRequest>,
    db_connection: &State<DBConnection>,
) -> InternalResult<()> {
    // Nothing selected: nothing to do.
    if let Some(task_id) = mark_done_request.task_id {
        let db_connection = db_connection.lock()?;
        mark_task_done_in_db(task_id, &db_connection)?;
    }

    Ok(())
}

#[post("/delete_task", format = "json", data = "<delete_task_request>")]
pub fn delete_task(
    delete_task_request: Json<DeleteTaskRequest>,
    db_connection: &State<DBConnection>,
) -> InternalResult<()> {
    if let Some(task_id) = delete_task_request.task_id {
        let db_connection = db_connection.lock()?;
        delete_task_from_db(task_id, &db_connection)?;
    }

    Ok(())
}

#[post("/quick_add_task", format = "json", data = "<quick_add_request>")]
pub fn quick_add_task(
    quick_add_request: Json<QuickAddRequest>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<AddTaskResult>> {
    let db_connection = db_connection.lock()?;

    let today = Local::now().date_naive();
    let task_id = quick_add_task_to_db(&quick_add_request.title, today, &db_connection)?;

    Ok(Json(AddTaskResult { task_id }))
}
