use mailboard_shared::TaskRecord;

use crate::deadline::display_deadline;

pub const UNKNOWN_SENDER: &str = "Unknown sender";
pub const NO_SUBJECT: &str = "No subject";
pub const NO_DETAILS: &str = "No additional details.";

/// The fields copied into the detail modal, placeholders already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    pub from: String,
    pub subject: String,
    pub detailed_tasks: String,
}

impl TaskDetails {
    pub fn from_record(record: &TaskRecord) -> Self {
        Self {
            from: or_placeholder(record.from.as_deref(), UNKNOWN_SENDER),
            subject: or_placeholder(record.subject.as_deref(), NO_SUBJECT),
            detailed_tasks: or_placeholder(record.detailed_tasks.as_deref(), NO_DETAILS),
        }
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

/// A rendered row. It has no identity beyond its position in the
/// last-rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub index: usize,
    pub summary: String,
    pub deadline: String,
    pub details: TaskDetails,
    completed: bool,
}

impl TaskItem {
    pub fn from_record(index: usize, record: &TaskRecord) -> Self {
        Self {
            index,
            summary: record.summary.clone(),
            deadline: display_deadline(record.deadline.as_deref()),
            details: TaskDetails::from_record(record),
            completed: false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Both presentation markers derive from this one flag, so they
    /// cannot drift apart.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn container_class(&self) -> &'static str {
        if self.completed {
            "task completed"
        } else {
            "task"
        }
    }

    pub fn summary_class(&self) -> &'static str {
        if self.completed {
            "summary crossed"
        } else {
            "summary"
        }
    }
}

pub fn render_items(records: &[TaskRecord]) -> Vec<TaskItem> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| TaskItem::from_record(index, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(summary: &str) -> TaskRecord {
        TaskRecord {
            summary: summary.to_string(),
            ..TaskRecord::default()
        }
    }

    #[test]
    fn items_follow_input_order_and_start_unchecked() {
        let records = vec![record("Reply to Bob"), record("Review PR"), record("Submit report")];
        let items = render_items(&records);

        assert_eq!(items.len(), 3);
        for (position, item) in items.iter().enumerate() {
            assert_eq!(item.index, position);
            assert_eq!(item.summary, records[position].summary);
            assert!(!item.is_completed());
        }
    }

    #[test]
    fn toggle_on_then_off_restores_classes() {
        let mut item = TaskItem::from_record(0, &record("Review PR"));
        let before = (item.container_class(), item.summary_class());

        item.set_completed(true);
        assert_eq!(item.container_class(), "task completed");
        assert_eq!(item.summary_class(), "summary crossed");

        item.set_completed(false);
        assert_eq!((item.container_class(), item.summary_class()), before);
    }

    #[test]
    fn missing_detail_fields_get_placeholders() {
        let mut with_details = record("Review PR");
        with_details.detailed_tasks = Some("Look at the parser changes".to_string());
        with_details.from = Some(String::new());

        let details = TaskDetails::from_record(&with_details);
        assert_eq!(details.from, UNKNOWN_SENDER);
        assert_eq!(details.subject, NO_SUBJECT);
        assert_eq!(details.detailed_tasks, "Look at the parser changes");

        let bare = TaskDetails::from_record(&record("x"));
        assert_eq!(bare.detailed_tasks, NO_DETAILS);
    }
}
