use crate::db::db::Db;
use crate::libs::care_date::CareDate;
use crate::libs::task::TaskKind;
use anyhow::Result;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

const SCHEMA_CARE_LOGS: &str = "CREATE TABLE IF NOT EXISTS care_logs (
    id INTEGER PRIMARY KEY,
    plant_id INTEGER NOT NULL,
    date TEXT NOT NULL,
    action TEXT NOT NULL,
    note TEXT
)";
const INSERT_LOG: &str = "INSERT INTO care_logs (plant_id, date, action, note) VALUES (?1, ?2, ?3, ?4)";
const SELECT_LOGS: &str = "SELECT id, plant_id, date, action, note FROM care_logs ORDER BY date DESC, id DESC";
const SELECT_LOGS_BY_PLANT: &str =
    "SELECT id, plant_id, date, action, note FROM care_logs WHERE plant_id = ?1 ORDER BY date DESC, id DESC";

/// One recorded care action in a plant's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareLog {
    pub id: Option<i64>,
    pub plant_id: i64,
    pub date: CareDate,
    pub action: TaskKind,
    pub note: Option<String>,
}

impl CareLog {
    pub fn new(plant_id: i64, date: CareDate, action: TaskKind, note: Option<String>) -> Self {
        Self {
            id: None,
            plant_id,
            date,
            action,
            note,
        }
    }
}

pub struct CareLogs {
    conn: Connection,
}

impl CareLogs {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // Migration v1 creates the table, but we ensure here too
        db.conn.execute(SCHEMA_CARE_LOGS, [])?;
        Ok(Self { conn: db.conn })
    }

    fn map_row(row: &Row) -> rusqlite::Result<Option<CareLog>> {
        let date: String = row.get(2)?;
        let action: String = row.get(3)?;
        // History rows are append-only and weakly referenced; one that no
        // longer parses is skipped rather than failing the whole listing.
        let (Ok(date), Ok(action)) = (date.parse::<CareDate>(), action.parse::<TaskKind>()) else {
            return Ok(None);
        };
        Ok(Some(CareLog {
            id: row.get(0)?,
            plant_id: row.get(1)?,
            date,
            action,
            note: row.get(4)?,
        }))
    }

    pub fn insert(&mut self, log: &CareLog) -> Result<i64> {
        self.conn.execute(
            INSERT_LOG,
            params![log.plant_id, log.date.to_string(), log.action.to_string(), log.note],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Full history, newest first.
    pub fn fetch_all(&mut self) -> Result<Vec<CareLog>> {
        let mut stmt = self.conn.prepare(SELECT_LOGS)?;
        let log_iter = stmt.query_map([], Self::map_row)?;

        let mut logs = Vec::new();
        for log in log_iter {
            if let Some(log) = log? {
                logs.push(log);
            }
        }
        Ok(logs)
    }

    /// History for one plant, newest first.
    pub fn fetch_by_plant(&mut self, plant_id: i64) -> Result<Vec<CareLog>> {
        let mut stmt = self.conn.prepare(SELECT_LOGS_BY_PLANT)?;
        let log_iter = stmt.query_map(params![plant_id], Self::map_row)?;

        let mut logs = Vec::new();
        for log in log_iter {
            if let Some(log) = log? {
                logs.push(log);
            }
        }
        Ok(logs)
    }
}
