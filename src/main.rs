use rocket::figment::Figment;
use rocket::{Build, Rocket};
use rusqlite::Connection;

use std::error::Error;
use std::sync::{Arc, Mutex};

mod categories;
mod config;
mod dashboard;
mod data;
mod internal_error;
mod tasks;

use config::AppConfig;
use data::{open_database, DBConnection};

#[macro_use]
extern crate rocket;

pub fn build_rocket(figment: Figment, connection: Connection) -> Rocket<Build> {
    let connection: DBConnection = Arc::new(Mutex::new(connection));

    rocket::custom(figment).manage(connection).mount(
        "/api",
        routes![
            categories::endpoints::get_categories,
            categories::endpoints::add_category,
            categories::endpoints::delete_category,
            tasks::endpoints::get_tasks,
            tasks::endpoints::add_task,
            tasks::endpoints::update_task,
            tasks::endpoints::mark_done,
            tasks::endpoints::delete_task,
            tasks::endpoints::quick_add_task,
            dashboard::endpoints::get_dashboard,
            dashboard::endpoints::get_skip_risk,
        ],
    )
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let figment = rocket::Config::figment();
    let config = AppConfig::from_figment(&figment)?;

    let connection = open_database(&config.database)?;

    build_rocket(figment, connection).launch().await?;

    Ok(())
}
