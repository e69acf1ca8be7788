//! Dashboard rollups over the full task list. Every function takes the
//! tasks in store order and keeps no state between calls.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::tasks::data::{Priority, Task};
use crate::tasks::scoring::days_left;

use super::data::*;

pub const QUICK_NOTE_LIMIT: usize = 3;
pub const NOTHING_TO_FOCUS: &str = "Nothing to focus on!";
pub const NONE_TEXT: &str = "None";

const TOP_PERFORMER_THRESHOLD: u32 = 80;
const CONSISTENT_THRESHOLD: u32 = 50;

fn pending(tasks: &[Task]) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(|task| task.is_pending())
}

/// Percentage of tasks done, truncated. Zero for an empty list.
pub fn efficiency_score(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }

    let done = tasks.iter().filter(|task| !task.is_pending()).count();
    (done as f64 / tasks.len() as f64 * 100.0) as u32
}

pub fn badge_tier(efficiency: u32) -> Badge {
    if efficiency >= TOP_PERFORMER_THRESHOLD {
        Badge::TopPerformer
    } else if efficiency >= CONSISTENT_THRESHOLD {
        Badge::Consistent
    } else {
        Badge::NeedsFocus
    }
}

/// The pending task with the fewest days left; the earliest in store order wins ties.
pub fn nearest_deadline(tasks: &[Task], today: NaiveDate) -> Option<NearestDeadline> {
    let mut nearest: Option<NearestDeadline> = None;

    for task in pending(tasks) {
        let days = days_left(&task.due_date, today);

        if nearest.as_ref().map_or(true, |n| days < n.days_left) {
            nearest = Some(NearestDeadline {
                task_id: task.id,
                title: task.title.clone(),
                days_left: days,
            });
        }
    }

    nearest
}

pub fn describe_nearest_deadline(nearest: Option<&NearestDeadline>) -> String {
    match nearest {
        Some(nearest) => nearest.to_string(),
        None => NONE_TEXT.to_string(),
    }
}

/// First pending High task, else the first pending task.
pub fn focus_task(tasks: &[Task]) -> Option<&Task> {
    pending(tasks)
        .find(|task| task.priority == Priority::High)
        .or_else(|| pending(tasks).next())
}

pub fn suggestion_text(tasks: &[Task], efficiency: u32) -> Suggestion {
    if tasks.is_empty() {
        Suggestion::StartAdding
    } else if pending(tasks).next().is_none() {
        Suggestion::AllCompleted
    } else if efficiency < CONSISTENT_THRESHOLD {
        Suggestion::LowEfficiency
    } else {
        Suggestion::GoodPace
    }
}

pub fn quick_note_buckets(tasks: &[Task]) -> QuickNotes {
    let (high, other): (Vec<&Task>, Vec<&Task>) =
        pending(tasks).partition(|task| task.priority == Priority::High);

    let titles = |bucket: Vec<&Task>| -> Vec<String> {
        bucket
            .into_iter()
            .take(QUICK_NOTE_LIMIT)
            .map(|task| task.title.clone())
            .collect()
    };

    QuickNotes {
        do_urgent: titles(high),
        plan_later: titles(other),
    }
}

/// Verdict on putting off today's work.
pub fn simulate_skip(tasks: &[Task], today: NaiveDate) -> SkipRisk {
    let pending: Vec<&Task> = pending(tasks).collect();

    let critical = pending
        .iter()
        .any(|task| task.priority == Priority::High || days_left(&task.due_date, today) <= 0);

    match pending.len() {
        0 => SkipRisk::SafeBreak,
        _ if critical => SkipRisk::CriticalBacklog,
        1 => SkipRisk::OneMinorTask,
        2 => SkipRisk::SmallRisk,
        _ => SkipRisk::TooManyPending,
    }
}

pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning!"
    } else if hour < 17 {
        "Good Afternoon!"
    } else {
        "Good Evening!"
    }
}

pub fn summarize(tasks: &[Task], now: NaiveDateTime) -> DashboardSummary {
    let today = now.date();

    let efficiency = efficiency_score(tasks);
    let badge = if tasks.is_empty() {
        None
    } else {
        Some(badge_tier(efficiency))
    };
    let nearest = nearest_deadline(tasks, today);
    let focus = focus_task(tasks);
    let suggestion = suggestion_text(tasks, efficiency);

    DashboardSummary {
        greeting: greeting(now.hour()).to_string(),
        total: tasks.len(),
        done: tasks.len() - pending(tasks).count(),
        efficiency,
        badge,
        badge_text: badge.map_or(NONE_TEXT, |b| b.label()).to_string(),
        nearest_deadline_text: describe_nearest_deadline(nearest.as_ref()),
        nearest_deadline: nearest,
        focus_task_id: focus.map(|task| task.id),
        focus_text: focus.map_or(NOTHING_TO_FOCUS, |task| task.title.as_str()).to_string(),
        suggestion,
        suggestion_text: suggestion.text().to_string(),
        quick_notes: quick_note_buckets(tasks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::data::Status;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    fn task(id: i64, title: &str, due_date: &str, priority: Priority, status: Status) -> Task {
        let mut task = Task::new(id, title.into(), due_date.into(), priority, "CS".into());
        task.status = status;
        task
    }

    fn pending_task(id: i64, title: &str, due_date: &str, priority: Priority) -> Task {
        task(id, title, due_date, priority, Status::Pending)
    }

    fn done_task(id: i64, title: &str) -> Task {
        task(id, title, "2026-03-01", Priority::Low, Status::Done)
    }

    #[test]
    fn efficiency_truncates() {
        assert_eq!(efficiency_score(&[]), 0);

        let three_of_four = vec![
            done_task(1, "a"),
            done_task(2, "b"),
            done_task(3, "c"),
            pending_task(4, "d", "2026-03-20", Priority::Low),
        ];
        assert_eq!(efficiency_score(&three_of_four), 75);

        let two_of_three = vec![
            done_task(1, "a"),
            done_task(2, "b"),
            pending_task(3, "c", "2026-03-20", Priority::Low),
        ];
        assert_eq!(efficiency_score(&two_of_three), 66);
    }

    #[test]
    fn badge_bands_are_inclusive_at_lower_bound() {
        assert_eq!(badge_tier(100), Badge::TopPerformer);
        assert_eq!(badge_tier(80), Badge::TopPerformer);
        assert_eq!(badge_tier(79), Badge::Consistent);
        assert_eq!(badge_tier(75), Badge::Consistent);
        assert_eq!(badge_tier(50), Badge::Consistent);
        assert_eq!(badge_tier(49), Badge::NeedsFocus);
        assert_eq!(badge_tier(0), Badge::NeedsFocus);
        assert_eq!(Badge::Consistent.to_string(), "Consistent");
    }

    #[test]
    fn nearest_deadline_over_nothing_pending() {
        assert_eq!(nearest_deadline(&[], today()), None);
        assert_eq!(nearest_deadline(&[done_task(1, "a")], today()), None);
        assert_eq!(describe_nearest_deadline(None), "None");
    }

    #[test]
    fn nearest_deadline_due_today_says_today() {
        let tasks = vec![pending_task(1, "Essay", "2026-03-15", Priority::Low)];

        let nearest = nearest_deadline(&tasks, today()).unwrap();
        assert_eq!(nearest.days_left, 0);
        assert_eq!(nearest.to_string(), "Essay Today!");
        assert!(!nearest.to_string().contains("0 days left"));
    }

    #[test]
    fn nearest_deadline_picks_minimum_and_first_on_ties() {
        let tasks = vec![
            pending_task(1, "Later", "2026-03-25", Priority::High),
            done_task(2, "Overdue but done"),
            pending_task(3, "Soon", "2026-03-18", Priority::Low),
            pending_task(4, "Also soon", "2026-03-18", Priority::High),
        ];

        let nearest = nearest_deadline(&tasks, today()).unwrap();
        assert_eq!(nearest.task_id, 3);
        assert_eq!(nearest.to_string(), "Soon (3 days left)");
    }

    #[test]
    fn overdue_counts_as_nearest() {
        let tasks = vec![
            pending_task(1, "Soon", "2026-03-16", Priority::Low),
            pending_task(2, "Late", "2026-03-13", Priority::Low),
        ];

        assert_eq!(
            nearest_deadline(&tasks, today()).unwrap().to_string(),
            "Late (-2 days left)"
        );
    }

    #[test]
    fn focus_prefers_first_pending_high() {
        let tasks = vec![
            done_task(1, "Done high"),
            pending_task(2, "Low", "2026-03-16", Priority::Low),
            pending_task(3, "High", "2026-03-30", Priority::High),
            pending_task(4, "High too", "2026-03-16", Priority::High),
        ];
        assert_eq!(focus_task(&tasks).map(|t| t.id), Some(3));

        let no_high = vec![
            done_task(1, "Done"),
            pending_task(2, "Medium", "2026-03-16", Priority::Medium),
            pending_task(3, "Low", "2026-03-16", Priority::Low),
        ];
        assert_eq!(focus_task(&no_high).map(|t| t.id), Some(2));

        assert!(focus_task(&[done_task(1, "Done")]).is_none());
    }

    #[test]
    fn suggestion_decision_table() {
        assert_eq!(suggestion_text(&[], 0), Suggestion::StartAdding);

        let all_done = vec![done_task(1, "a")];
        assert_eq!(suggestion_text(&all_done, 100), Suggestion::AllCompleted);

        let some_pending = vec![done_task(1, "a"), pending_task(2, "b", "2026-03-20", Priority::Low)];
        assert_eq!(suggestion_text(&some_pending, 49), Suggestion::LowEfficiency);
        assert_eq!(suggestion_text(&some_pending, 50), Suggestion::GoodPace);
    }

    #[test]
    fn quick_notes_split_and_truncate() {
        let mut tasks = Vec::new();
        for id in 0..5 {
            tasks.push(pending_task(id, &format!("high {}", id), "2026-03-20", Priority::High));
        }
        tasks.push(pending_task(10, "medium", "2026-03-20", Priority::Medium));
        tasks.push(task(11, "done low", "2026-03-20", Priority::Low, Status::Done));
        tasks.push(pending_task(12, "low", "2026-03-20", Priority::Low));

        let notes = quick_note_buckets(&tasks);
        assert_eq!(notes.do_urgent, vec!["high 0", "high 1", "high 2"]);
        assert_eq!(notes.plan_later, vec!["medium", "low"]);

        assert_eq!(quick_note_buckets(&[]), QuickNotes::default());
    }

    #[test]
    fn skip_simulation() {
        assert_eq!(simulate_skip(&[done_task(1, "a")], today()), SkipRisk::SafeBreak);

        let high = vec![pending_task(1, "a", "2026-04-01", Priority::High)];
        assert_eq!(simulate_skip(&high, today()), SkipRisk::CriticalBacklog);

        let due_today = vec![pending_task(1, "a", "2026-03-15", Priority::Low)];
        assert_eq!(simulate_skip(&due_today, today()), SkipRisk::CriticalBacklog);

        let one = vec![pending_task(1, "a", "2026-04-01", Priority::Low)];
        assert_eq!(simulate_skip(&one, today()), SkipRisk::OneMinorTask);

        let two = vec![
            pending_task(1, "a", "2026-04-01", Priority::Low),
            pending_task(2, "b", "2026-04-02", Priority::Medium),
        ];
        assert_eq!(simulate_skip(&two, today()), SkipRisk::SmallRisk);

        let mut three = two.clone();
        three.push(pending_task(3, "c", "2026-04-03", Priority::Low));
        assert_eq!(simulate_skip(&three, today()), SkipRisk::TooManyPending);
        assert_eq!(SkipRisk::TooManyPending.severity(), Severity::Error);
    }

    #[test]
    fn malformed_due_date_counts_as_critical() {
        let malformed = vec![pending_task(1, "a", "someday", Priority::Low)];
        assert_eq!(simulate_skip(&malformed, today()), SkipRisk::CriticalBacklog);

        let mixed = vec![
            pending_task(1, "a", "2026-04-01", Priority::Low),
            pending_task(2, "b", "2026/04/02", Priority::Medium),
        ];
        assert_eq!(simulate_skip(&mixed, today()), SkipRisk::CriticalBacklog);
    }

    #[test]
    fn greeting_by_hour() {
        assert_eq!(greeting(0), "Good Morning!");
        assert_eq!(greeting(11), "Good Morning!");
        assert_eq!(greeting(12), "Good Afternoon!");
        assert_eq!(greeting(16), "Good Afternoon!");
        assert_eq!(greeting(17), "Good Evening!");
    }

    #[test]
    fn empty_summary() {
        let now = today().and_hms_opt(9, 30, 0).unwrap();
        let summary = summarize(&[], now);

        assert_eq!(summary.greeting, "Good Morning!");
        assert_eq!(summary.total, 0);
        assert_eq!(summary.efficiency, 0);
        assert_eq!(summary.badge, None);
        assert_eq!(summary.badge_text, "None");
        assert_eq!(summary.nearest_deadline_text, "None");
        assert_eq!(summary.focus_task_id, None);
        assert_eq!(summary.focus_text, NOTHING_TO_FOCUS);
        assert_eq!(summary.suggestion, Suggestion::StartAdding);
        assert_eq!(summary.quick_notes, QuickNotes::default());
    }

    #[test]
    fn populated_summary() {
        let now = today().and_hms_opt(18, 0, 0).unwrap();
        let tasks = vec![
            done_task(1, "a"),
            done_task(2, "b"),
            done_task(3, "c"),
            pending_task(4, "Essay", "2026-03-15", Priority::Medium),
        ];
        let summary = summarize(&tasks, now);

        assert_eq!(summary.greeting, "Good Evening!");
        assert_eq!(summary.total, 4);
        assert_eq!(summary.done, 3);
        assert_eq!(summary.efficiency, 75);
        assert_eq!(summary.badge, Some(Badge::Consistent));
        assert_eq!(summary.nearest_deadline_text, "Essay Today!");
        assert_eq!(summary.focus_task_id, Some(4));
        assert_eq!(summary.suggestion_text, "Good pace! Keep it up.");
        assert_eq!(summary.quick_notes.plan_later, vec!["Essay"]);
    }
}
