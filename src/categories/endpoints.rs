use rocket::serde::json::Json;
use rocket::{get, post, State};

use crate::internal_error::InternalResult;

use super::data::*;
use super::helpers::*;
use crate::data::DBConnection;

#[get("/get_categories")]
pub fn get_categories(db_connection: &State<DBConnection>) -> InternalResult<Json<Vec<Category>>> {
    let db_connection = db_connection.lock()?;

    let categories = get_categories_from_db(&db_connection)?;

    Ok(Json(categories))
}

#[post("/add_category", format = "json", data = "<add_category_request>")]
pub fn add_category(
    add_category_request: Json<AddCategoryRequest>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<AddCategoryResult>> {
    let request = add_category_request.into_inner();

    let code = request.code.trim();
    if code.is_empty() {
        return Ok(Json(AddCategoryResult { category_id: None }));
    }

    let name = match request.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => code,
    };

    let db_connection = db_connection.lock()?;
    let category_id = match add_category_to_db(name, code, &db_connection)? {
        InsertOutcome::Inserted(id) => Some(id),
        InsertOutcome::Duplicate => None,
    };

    Ok(Json(AddCategoryResult { category_id }))
}

#[post("/delete_category", format = "json", data = "<delete_category_request>")]
pub fn delete_category(
    delete_category_request: Json<DeleteCategoryRequest>,
    db_connection: &State<DBConnection>,
) -> InternalResult<Json<DeleteCategoryResult>> {
    let db_connection = db_connection.lock()?;

    let deleted_tasks = delete_category_from_db(&delete_category_request.code, &db_connection)?;

    Ok(Json(DeleteCategoryResult { deleted_tasks }))
}
