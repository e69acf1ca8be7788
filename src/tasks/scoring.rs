//! Per-task urgency arithmetic. Everything here is pure and takes `today`
//! explicitly so callers decide what "now" means.

use chrono::NaiveDate;
use log::warn;
use thiserror::Error;

use super::data::*;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const URGENCY_BASE: i64 = 100;
const URGENCY_PER_DAY: i64 = 10;
const IMPORTANCE_PER_WEIGHT: i64 = 10;
const URGENCY_FACTOR: f64 = 0.7;
const IMPORTANCE_FACTOR: f64 = 0.3;

#[derive(Debug, Error, PartialEq)]
#[error("'{input}' is not a YYYY-MM-DD date")]
pub struct DateError {
    pub input: String,
}

/// Four-digit year, then one or two digit month and day. chrono alone also
/// takes short or signed years and skips whitespace between fields.
fn has_date_shape(due_date: &str) -> bool {
    let digits = |field: &str, min: usize, max: usize| {
        (min..=max).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
    };

    let mut fields = due_date.split('-');
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
        }
        _ => false,
    }
}

pub fn parse_due_date(due_date: &str) -> Result<NaiveDate, DateError> {
    let error = || DateError {
        input: due_date.to_string(),
    };

    if !has_date_shape(due_date) {
        return Err(error());
    }

    NaiveDate::parse_from_str(due_date, DATE_FORMAT).map_err(|_| error())
}

/// Signed number of days from `today` until `due_date`; negative when overdue.
/// A due date that does not parse counts as due today.
pub fn days_left(due_date: &str, today: NaiveDate) -> i64 {
    match parse_due_date(due_date) {
        Ok(due) => due.signed_duration_since(today).num_days(),
        Err(e) => {
            warn!("{}, treating as due today", e);
            0
        }
    }
}

pub fn urgency(days_left: i64) -> i64 {
    if days_left <= 0 {
        URGENCY_BASE + days_left.abs() * URGENCY_PER_DAY
    } else {
        (URGENCY_BASE - days_left * URGENCY_PER_DAY).max(0)
    }
}

pub fn importance(priority: Priority) -> i64 {
    priority.weight() * IMPORTANCE_PER_WEIGHT
}

/// Urgency blended with importance, truncated toward zero. Overdue tasks
/// keep climbing without bound.
pub fn smart_score(due_date: &str, priority: Priority, today: NaiveDate) -> i64 {
    let urgency = urgency(days_left(due_date, today)) as f64;
    let importance = importance(priority) as f64;

    let score = urgency * URGENCY_FACTOR + importance * IMPORTANCE_FACTOR;
    if score.is_finite() {
        score as i64
    } else {
        0
    }
}

/// Done tasks are never highlighted.
pub fn highlight(task: &Task, today: NaiveDate) -> Option<Highlight> {
    if !task.is_pending() {
        return None;
    }

    let days_left = days_left(&task.due_date, today);
    let highlight = if days_left < 0 {
        Highlight::Overdue
    } else {
        match task.priority {
            Priority::High => Highlight::HighPriority {
                blink: days_left <= 1,
            },
            Priority::Medium => Highlight::MediumPriority,
            Priority::Low => Highlight::LowPriority,
        }
    };

    Some(highlight)
}

pub fn task_view(task: Task, today: NaiveDate) -> TaskView {
    let score = smart_score(&task.due_date, task.priority, today);
    let days_left = days_left(&task.due_date, today);
    let highlight = highlight(&task, today);

    TaskView {
        task,
        score,
        days_left,
        highlight,
    }
}
