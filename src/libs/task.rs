//! Care task entity, its closed enumerations, and input validation.

use crate::libs::care_date::CareDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound on task notes, in characters.
pub const MAX_NOTE_LEN: usize = 500;

/// A named field constraint violated by task input. The task is rejected
/// and the collection left unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("plant id must be a positive identifier")]
    MissingPlantId,
    #[error("unknown task kind '{0}'")]
    UnknownKind(String),
    #[error("unknown priority '{0}'")]
    UnknownPriority(String),
    #[error("'{0}' is not a valid calendar date (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("note is {0} characters long, the limit is {MAX_NOTE_LEN}")]
    NoteTooLong(usize),
}

/// The closed set of care actions a task can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Water,
    Mist,
    Fertilize,
    Prune,
    Repot,
}

impl TaskKind {
    pub const ALL: [TaskKind; 5] = [
        TaskKind::Water,
        TaskKind::Mist,
        TaskKind::Fertilize,
        TaskKind::Prune,
        TaskKind::Repot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Water => "WATER",
            TaskKind::Mist => "MIST",
            TaskKind::Fertilize => "FERTILIZE",
            TaskKind::Prune => "PRUNE",
            TaskKind::Repot => "REPOT",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WATER" => Ok(TaskKind::Water),
            "MIST" => Ok(TaskKind::Mist),
            "FERTILIZE" => Ok(TaskKind::Fertilize),
            "PRUNE" => Ok(TaskKind::Prune),
            "REPOT" => Ok(TaskKind::Repot),
            _ => Err(ValidationError::UnknownKind(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            _ => Err(ValidationError::UnknownPriority(s.trim().to_string())),
        }
    }
}

/// A scheduled or completed care action tied to a plant and a calendar date.
///
/// The task holds a weak reference to its plant: `plant_id` is for lookup
/// only and says nothing about the plant's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub plant_id: i64,
    pub kind: TaskKind,
    pub date: CareDate,
    pub completed: bool,
    pub note: Option<String>,
    pub priority: Option<Priority>,
}

/// User-supplied input for a new task, carrying the textual fields exactly
/// as entered so validation happens in one place.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub plant_id: i64,
    pub kind: String,
    pub date: String,
    pub note: Option<String>,
    pub priority: Option<String>,
}

impl NewTask {
    /// Checks every field constraint and returns the parsed parts.
    ///
    /// Fails with the first violated constraint; nothing is mutated on
    /// failure.
    pub fn validate(&self) -> Result<(TaskKind, CareDate, Option<Priority>), ValidationError> {
        if self.plant_id < 1 {
            return Err(ValidationError::MissingPlantId);
        }
        let kind: TaskKind = self.kind.parse()?;
        let date: CareDate = self
            .date
            .parse()
            .map_err(|_| ValidationError::InvalidDate(self.date.trim().to_string()))?;
        if let Some(note) = &self.note {
            let len = note.chars().count();
            if len > MAX_NOTE_LEN {
                return Err(ValidationError::NoteTooLong(len));
            }
        }
        let priority = match &self.priority {
            Some(p) => Some(p.parse()?),
            None => None,
        };
        Ok((kind, date, priority))
    }
}

/// A raw task row as read back from a store. Untrusted until
/// [`TaskRecord::into_task`] revalidates every field.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub id: i64,
    pub plant_id: i64,
    pub kind: String,
    pub date: String,
    pub completed: bool,
    pub note: Option<String>,
    pub priority: Option<String>,
}

impl TaskRecord {
    /// Revalidates the record through the same constraints as fresh input.
    pub fn into_task(self) -> Result<Task, ValidationError> {
        let input = NewTask {
            plant_id: self.plant_id,
            kind: self.kind,
            date: self.date,
            note: self.note,
            priority: self.priority,
        };
        let (kind, date, priority) = input.validate()?;
        Ok(Task {
            id: self.id,
            plant_id: input.plant_id,
            kind,
            date,
            completed: self.completed,
            note: input.note,
            priority,
        })
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        TaskRecord {
            id: task.id,
            plant_id: task.plant_id,
            kind: task.kind.to_string(),
            date: task.date.to_string(),
            completed: task.completed,
            note: task.note.clone(),
            priority: task.priority.map(|p| p.to_string()),
        }
    }
}
