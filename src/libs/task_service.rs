//! Session-scoped owner of the care task collection.
//!
//! A [`TaskService`] is built once per command invocation from a
//! [`TaskStore`] snapshot and is the only component that mutates tasks for
//! its lifetime. Queries are value-based and side-effect free; mutations
//! are all-or-nothing per call and followed by a best-effort write back to
//! the store.
//!
//! Loaded records are treated as untrusted input: every record is
//! revalidated and corrupt ones are skipped one by one, so a single bad row
//! can never take the rest of the dataset down with it.

use crate::libs::care_date::CareDate;
use crate::libs::plant::PlantRegistry;
use crate::libs::task::{NewTask, Task, TaskKind, TaskRecord, ValidationError};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use std::collections::BTreeSet;

/// Persistence boundary for tasks. The service reads one snapshot at
/// construction and hands the full collection back after each mutation.
pub trait TaskStore {
    /// Raw, unvalidated records as last persisted.
    fn load(&mut self) -> Result<Vec<TaskRecord>>;

    /// Replaces the persisted snapshot with `tasks`.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}

/// Vec-backed store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    records: Vec<TaskRecord>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw records, valid or not.
    pub fn with_records(records: Vec<TaskRecord>) -> Self {
        Self { records }
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&mut self) -> Result<Vec<TaskRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        self.records = tasks.iter().map(TaskRecord::from).collect();
        Ok(())
    }
}

pub struct TaskService<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
    next_id: i64,
}

impl<S: TaskStore> TaskService<S> {
    /// Loads the store snapshot, keeping every record that still validates
    /// and logging the ones that do not.
    pub fn new(mut store: S) -> Result<Self> {
        let records = store.load()?;
        let mut tasks = Vec::with_capacity(records.len());
        for record in records {
            let id = record.id;
            match record.into_task() {
                Ok(task) => tasks.push(task),
                // Silent per-record discard; the rest of the dataset loads
                Err(err) => msg_debug!(Message::SkippedCorruptTask(id, err.to_string())),
            }
        }
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Ok(TaskService { store, tasks, next_id })
    }

    pub fn all_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks scheduled on `date`, incomplete ones first. The sort is stable,
    /// so relative order within each group is preserved.
    pub fn tasks_for_date(&self, date: CareDate) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.iter().filter(|t| t.date == date).cloned().collect();
        tasks.sort_by_key(|t| t.completed);
        tasks
    }

    /// Distinct dates that have at least one task, for calendar marking.
    pub fn due_dates(&self) -> BTreeSet<CareDate> {
        self.tasks.iter().map(|t| t.date).collect()
    }

    /// Flips a task's completion flag and returns the updated task.
    ///
    /// An unknown id is a no-op returning `None`; the UI may hold a stale id
    /// for a task that no longer exists, and that is not an error.
    pub fn toggle_complete(&mut self, id: i64) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        let updated = task.clone();
        self.persist();
        Some(updated)
    }

    /// Validates `input`, assigns a fresh id, and appends the task.
    ///
    /// On a validation failure nothing is added and the collection is
    /// unchanged.
    pub fn add_task(&mut self, input: &NewTask) -> Result<Task, ValidationError> {
        let (kind, date, priority) = input.validate()?;
        let task = Task {
            id: self.next_id,
            plant_id: input.plant_id,
            kind,
            date,
            completed: false,
            note: input.note.clone(),
            priority,
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Derived watering tasks for every plant whose care is due on `today`.
    ///
    /// These are recomputed on each call and never persisted; their ids are
    /// negative so they cannot collide with stored tasks.
    pub fn due_care_tasks<R: PlantRegistry>(&self, registry: &mut R, today: CareDate) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        for plant in registry.all_plants()? {
            let Some(plant_id) = plant.id else { continue };
            if plant.needs_water(today) {
                tasks.push(Task {
                    id: -(tasks.len() as i64) - 1,
                    plant_id,
                    kind: TaskKind::Water,
                    date: today,
                    completed: false,
                    note: None,
                    priority: None,
                });
            }
        }
        Ok(tasks)
    }

    /// Store writes are best-effort: a failure is logged, never surfaced.
    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.tasks) {
            msg_warning!(Message::TaskStoreWriteFailed(err.to_string()));
        }
    }
}
