use serde::{Deserialize, Serialize};

pub type CategoryID = i64;

pub const DEFAULT_INSTRUCTOR: &str = "N/A";

/// A course or personal goal that tasks are filed under. `instructor` and
/// `credits` are carried for display only and never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryID,
    pub name: String,
    pub code: String,
    pub instructor: String,
    pub credits: i64,
}

impl Category {
    pub fn new(id: CategoryID, name: String, code: String) -> Category {
        Category {
            id,
            name,
            code,
            instructor: DEFAULT_INSTRUCTOR.to_string(),
            credits: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsertOutcome {
    Inserted(CategoryID),
    Duplicate,
}

#[derive(Deserialize, Debug)]
pub struct AddCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub code: String,
}

#[derive(Serialize, Debug)]
pub struct AddCategoryResult {
    pub category_id: Option<CategoryID>,
}

#[derive(Deserialize, Debug)]
pub struct DeleteCategoryRequest {
    pub code: String,
}

#[derive(Serialize, Debug)]
pub struct DeleteCategoryResult {
    pub deleted_tasks: usize,
}
