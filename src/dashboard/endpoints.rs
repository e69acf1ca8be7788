use chrono::Local;
use rocket::serde::json::Json;
use rocket::{get, State};

use crate::internal_error::InternalResult;

use super::data::*;
use super::helpers::*;
use crate::data::DBConnection;
use crate::tasks::helpers::get_all_tasks_from_db;

#[get("/get_dashboard")]
pub fn get_dashboard(db_connection: &State<DBConnection>) -> InternalResult<Json<DashboardSummary>> {
    let db_connection = db_connection.lock()?;

    let tasks = get_all_tasks_from_db(&db_connection)?;

    Ok(Json(summarize(&tasks, Local::now().naive_local())))
}

#[get("/simulate_skip")]
pub fn get_skip_risk(db_connection: &State<DBConnection>) -> InternalResult<Json<SkipRiskResponse>> {
    let db_connection = db_connection.lock()?;

    let tasks = get_all_tasks_from_db(&db_connection)?;
    let risk = simulate_skip(&tasks, Local::now().date_naive());

    Ok(Json(SkipRiskResponse::from(risk)))
}
