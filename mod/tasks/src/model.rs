use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TaskState
// ---------------------------------------------------------------------------

/// Completion state of a task.
///
/// Persisted as a small integer code (`OPEN=0`, `COMPLETED=1`) for a
/// compact, stable on-disk representation. Decoding any other code is a
/// corruption error handled by the store, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Open,
    Completed,
}

impl TaskState {
    /// Integer code stored in the `state` column.
    pub fn code(&self) -> i64 {
        match self {
            Self::Open => 0,
            Self::Completed => 1,
        }
    }

    /// Decode a stored integer code. Returns `None` for anything outside
    /// the two defined codes.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Open),
            1 => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Task: the core data model, maps 1:1 to SQL columns
// ---------------------------------------------------------------------------

/// A single to-do item.
///
/// All fields map directly to SQL columns. Values handed out by queries
/// are snapshots; nothing aliases the persisted representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned identity. Unique for the store's lifetime; never
    /// reused after deletion.
    pub id: i64,

    /// Non-empty label (enforced at the service boundary).
    pub name: String,

    /// Free text, may be empty.
    #[serde(default)]
    pub description: String,

    /// Higher means more urgent. No fixed bound.
    pub priority: i64,

    /// Due date as `YYYY-MM-DD` text, or empty when unset.
    #[serde(default)]
    pub end_date: String,

    pub state: TaskState,
}

/// Caller-supplied task fields: everything except the store-assigned id.
///
/// Input shape for create and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub priority: i64,

    #[serde(default)]
    pub end_date: String,
}

impl TaskDraft {
    /// Attach an id and state to form a full record.
    pub fn into_task(self, id: i64, state: TaskState) -> Task {
        Task {
            id,
            name: self.name,
            description: self.description,
            priority: self.priority,
            end_date: self.end_date,
            state,
        }
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Field used to order a listed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Descending priority, ties in enumeration order.
    Priority,
    /// Ascending `YYYY-MM-DD` text order, empty dates first.
    EndDate,
    /// No ordering; results keep store enumeration order.
    Unsorted,
}

impl SortKey {
    /// Map a caller-supplied key string to a sort key.
    ///
    /// Unrecognized keys fall back to `Unsorted` rather than erroring,
    /// a deliberately permissive policy carried over from the original
    /// list views.
    pub fn from_key(key: &str) -> Self {
        match key {
            "priority" => Self::Priority,
            "endDate" => Self::EndDate,
            _ => Self::Unsorted,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_code_roundtrip() {
        for s in &[TaskState::Open, TaskState::Completed] {
            assert_eq!(TaskState::from_code(s.code()), Some(*s));
        }
        assert_eq!(TaskState::Open.code(), 0);
        assert_eq!(TaskState::Completed.code(), 1);
    }

    #[test]
    fn state_rejects_unknown_codes() {
        assert_eq!(TaskState::from_code(2), None);
        assert_eq!(TaskState::from_code(-1), None);
    }

    #[test]
    fn state_serde_names() {
        assert_eq!(serde_json::to_string(&TaskState::Open).unwrap(), "\"OPEN\"");
        assert_eq!(
            serde_json::to_string(&TaskState::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }

    #[test]
    fn task_json_roundtrip() {
        let task = Task {
            id: 3,
            name: "water plants".into(),
            description: String::new(),
            priority: 2,
            end_date: "2026-09-01".into(),
            state: TaskState::Open,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"endDate\":\"2026-09-01\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn draft_into_task() {
        let draft = TaskDraft {
            name: "pack bags".into(),
            description: "for the trip".into(),
            priority: 5,
            end_date: String::new(),
        };
        let task = draft.into_task(9, TaskState::Open);
        assert_eq!(task.id, 9);
        assert_eq!(task.name, "pack bags");
        assert_eq!(task.state, TaskState::Open);
    }

    #[test]
    fn sort_key_parsing_is_permissive() {
        assert_eq!(SortKey::from_key("priority"), SortKey::Priority);
        assert_eq!(SortKey::from_key("endDate"), SortKey::EndDate);
        assert_eq!(SortKey::from_key("enddate"), SortKey::Unsorted);
        assert_eq!(SortKey::from_key(""), SortKey::Unsorted);
        assert_eq!(SortKey::from_key("banana"), SortKey::Unsorted);
    }
}
