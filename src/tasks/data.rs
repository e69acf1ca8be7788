use chrono::{Local, NaiveDate};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::categories::data::CategoryID;

pub type TaskID = i64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn weight(&self) -> i64 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Priority, String> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

// Anything unrecognised in the store weighs the same as Low.
impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(value.as_str()?.parse().unwrap_or(Priority::Low))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Done => "Done",
        }
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "Done" => Ok(Status::Done),
            _ => Ok(Status::Pending),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskID,
    pub title: String,
    /// Kept exactly as stored; it is not guaranteed to be a valid date.
    pub due_date: String,
    pub priority: Priority,
    /// Category code copied at creation time.
    pub category: String,
    pub status: Status,
    pub category_id: Option<CategoryID>,
    /// Code of the category `category_id` currently points at, if any.
    pub category_code: Option<String>,
    pub description: String,
    pub created_at: NaiveDate,
}

impl Task {
    pub fn new(
        id: TaskID,
        title: String,
        due_date: String,
        priority: Priority,
        category: String,
    ) -> Task {
        Task {
            id,
            title,
            due_date,
            priority,
            category,
            status: Status::Pending,
            category_id: None,
            category_code: None,
            description: String::new(),
            created_at: Local::now().date_naive(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status != Status::Done
    }
}

/// How a pending task should be set apart in a listing.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Overdue,
    HighPriority { blink: bool },
    MediumPriority,
    LowPriority,
}

#[derive(Serialize, Debug, Clone)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub score: i64,
    pub days_left: i64,
    pub highlight: Option<Highlight>,
}

#[derive(Deserialize, Debug)]
pub struct AddTaskRequest {
    pub title: String,
    pub due_date: String,
    pub priority: Priority,
    #[serde(default)]
    pub category: String,
}

#[derive(Serialize, Debug)]
pub struct AddTaskResult {
    pub task_id: Option<TaskID>,
}

/// `task_id` is absent when nothing is selected.
#[derive(Deserialize, Debug)]
pub struct UpdateTaskRequest {
    pub task_id: Option<TaskID>,
    pub title: String,
    pub due_date: String,
    pub priority: Priority,
}

#[derive(Deserialize, Debug)]
pub struct MarkDoneRequest {
    pub task_id: Option<TaskID>,
}

#[derive(Deserialize, Debug)]
pub struct DeleteTaskRequest {
    pub task_id: Option<TaskID>,
}

#[derive(Deserialize, Debug)]
pub struct QuickAddRequest {
    pub title: String,
}
