use chrono::{DateTime, Utc};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

// The three task priorities. Serialized as the literal strings
// "high"/"medium"/"low" in the stored payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    // Display rank: High sorts before Medium sorts before Low
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    // The next value in the fixed cycle High -> Medium -> Low -> High
    pub fn next(self) -> Priority {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }

    // Single shared table of display metadata; every widget that shows a
    // priority goes through this mapping
    pub fn meta(self) -> PriorityMeta {
        match self {
            Priority::High => PriorityMeta {
                label: "high",
                color: Color::Red,
            },
            Priority::Medium => PriorityMeta {
                label: "medium",
                color: Color::Yellow,
            },
            Priority::Low => PriorityMeta {
                label: "low",
                color: Color::Green,
            },
        }
    }
}

pub struct PriorityMeta {
    pub label: &'static str,
    pub color: Color,
}

// A single todo entry. Field names in the persisted JSON are camelCase
// (id, text, completed, createdAt, priority).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub priority: Priority,
}
