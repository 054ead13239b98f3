use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskRecord};
use crate::libs::task_service::TaskStore;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY,
    plant_id INTEGER NOT NULL,
    kind TEXT NOT NULL,
    date TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    note TEXT,
    priority TEXT
)";
const SELECT_TASKS: &str = "SELECT id, plant_id, kind, date, completed, note, priority FROM tasks ORDER BY id";
const INSERT_TASK: &str =
    "INSERT INTO tasks (id, plant_id, kind, date, completed, note, priority) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const DELETE_ALL_TASKS: &str = "DELETE FROM tasks";

/// SQLite-backed task store. Loads hand back raw rows for the service to
/// revalidate; saves replace the whole snapshot in one transaction.
pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // Migrations create the table, but we ensure here too
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Self { conn: db.conn })
    }
}

impl TaskStore for Tasks {
    fn load(&mut self) -> Result<Vec<TaskRecord>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let record_iter = stmt.query_map([], |row| {
            Ok(TaskRecord {
                id: row.get(0)?,
                plant_id: row.get(1)?,
                kind: row.get(2)?,
                date: row.get(3)?,
                completed: row.get::<_, i64>(4)? != 0,
                note: row.get(5)?,
                priority: row.get(6)?,
            })
        })?;

        let mut records = Vec::new();
        for record in record_iter {
            match record {
                Ok(record) => records.push(record),
                // A row too mangled to even read as text is dropped here;
                // rows that read but fail validation are dropped by the
                // service.
                Err(err) => msg_debug!(Message::SkippedUnreadableRow(err.to_string())),
            }
        }
        Ok(records)
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_ALL_TASKS, [])?;
        for task in tasks {
            tx.execute(
                INSERT_TASK,
                params![
                    task.id,
                    task.plant_id,
                    task.kind.to_string(),
                    task.date.to_string(),
                    task.completed as i64,
                    task.note,
                    task.priority.map(|p| p.to_string()),
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}
