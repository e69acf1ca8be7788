use serde::Serialize;

use std::fmt;

use crate::tasks::data::TaskID;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    TopPerformer,
    Consistent,
    NeedsFocus,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::TopPerformer => "Top Performer",
            Badge::Consistent => "Consistent",
            Badge::NeedsFocus => "Needs Focus",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NearestDeadline {
    pub task_id: TaskID,
    pub title: String,
    pub days_left: i64,
}

impl fmt::Display for NearestDeadline {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.days_left == 0 {
            write!(f, "{} Today!", self.title)
        } else {
            write!(f, "{} ({} days left)", self.title, self.days_left)
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    StartAdding,
    AllCompleted,
    LowEfficiency,
    GoodPace,
}

impl Suggestion {
    pub fn text(&self) -> &'static str {
        match self {
            Suggestion::StartAdding => "Start adding your work!",
            Suggestion::AllCompleted => "Relax, All completed!",
            Suggestion::LowEfficiency => "Low efficiency! Plan High Priority tasks.",
            Suggestion::GoodPace => "Good pace! Keep it up.",
        }
    }
}

/// Pending task titles for the sticky note, at most `QUICK_NOTE_LIMIT` each.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct QuickNotes {
    pub do_urgent: Vec<String>,
    pub plan_later: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipRisk {
    SafeBreak,
    CriticalBacklog,
    TooManyPending,
    SmallRisk,
    OneMinorTask,
}

impl SkipRisk {
    pub fn severity(&self) -> Severity {
        match self {
            SkipRisk::SafeBreak | SkipRisk::OneMinorTask => Severity::Info,
            SkipRisk::SmallRisk => Severity::Warning,
            SkipRisk::CriticalBacklog | SkipRisk::TooManyPending => Severity::Error,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SkipRisk::SafeBreak => "Safe to take a break!",
            SkipRisk::CriticalBacklog => "Backlog danger! Critical tasks need attention.",
            SkipRisk::TooManyPending => "Backlog danger! Too many pending tasks.",
            SkipRisk::SmallRisk => "Small risk, manageable backlog tomorrow.",
            SkipRisk::OneMinorTask => "Only one minor task left. Safe to rest!",
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SkipRiskResponse {
    pub risk: SkipRisk,
    pub severity: Severity,
    pub message: String,
}

impl From<SkipRisk> for SkipRiskResponse {
    fn from(risk: SkipRisk) -> SkipRiskResponse {
        SkipRiskResponse {
            risk,
            severity: risk.severity(),
            message: risk.message().to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub greeting: String,
    pub total: usize,
    pub done: usize,
    pub efficiency: u32,
    /// Absent until the first task exists.
    pub badge: Option<Badge>,
    pub badge_text: String,
    pub nearest_deadline: Option<NearestDeadline>,
    pub nearest_deadline_text: String,
    pub focus_task_id: Option<TaskID>,
    pub focus_text: String,
    pub suggestion: Suggestion,
    pub suggestion_text: String,
    pub quick_notes: QuickNotes,
}
