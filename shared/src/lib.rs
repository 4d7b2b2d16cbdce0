use serde::{Deserialize, Serialize};

/// A task record as the backend returns it. `id`, `created_at` and
/// `updated_at` are server-assigned and never sent back by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// ISO-8601 timestamp, or `None` for "no due date".
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Parses a form control value; the empty string means "no priority".
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            _ => None,
        }
    }
}

/// Submission payload shared by create (POST) and update (PUT).
///
/// Optional fields left unset are omitted from the JSON entirely rather
/// than sent as empty strings or nulls. `completed` is deliberately not
/// here: completion changes only go through the dedicated transition
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskData {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_parses_full_record() {
        let task: Task = serde_json::from_value(json!({
            "id": 7,
            "title": "Buy milk",
            "description": "Two liters",
            "due_date": "2025-06-01T00:00:00Z",
            "priority": "High",
            "completed": false,
            "created_at": "2025-05-30T09:00:00",
            "updated_at": "2025-05-30T09:00:00"
        }))
        .unwrap();

        assert_eq!(task.id, 7);
        assert_eq!(task.priority, Some(Priority::High));
        assert!(!task.completed);
    }

    #[test]
    fn task_parses_nullable_fields() {
        let task: Task = serde_json::from_value(json!({
            "id": 1,
            "title": "Buy milk",
            "description": null,
            "due_date": null,
            "priority": null,
            "completed": false,
            "created_at": "2025-05-30T09:00:00",
            "updated_at": "2025-05-30T09:00:00"
        }))
        .unwrap();

        assert_eq!(task.description, None);
        assert_eq!(task.due_date, None);
        assert_eq!(task.priority, None);
    }

    #[test]
    fn payload_omits_unset_fields() {
        let data = TaskData {
            title: "Buy milk".to_string(),
            description: None,
            due_date: None,
            priority: None,
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value, json!({"title": "Buy milk"}));
    }

    #[test]
    fn payload_keeps_set_fields() {
        let data = TaskData {
            title: "Buy milk".to_string(),
            description: Some("Two liters".to_string()),
            due_date: Some("2025-06-01T00:00:00Z".to_string()),
            priority: Some(Priority::Low),
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Buy milk",
                "description": "Two liters",
                "due_date": "2025-06-01T00:00:00Z",
                "priority": "Low"
            })
        );
    }

    #[test]
    fn priority_round_trips_through_form_values() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::from_value(priority.as_str()), Some(priority));
        }
        assert_eq!(Priority::from_value(""), None);
        assert_eq!(Priority::from_value("Urgent"), None);
    }
}
