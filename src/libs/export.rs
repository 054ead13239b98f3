//! Data export to CSV and JSON.
//!
//! Exports flatten tasks or care history into serializable row structures
//! with string-typed fields, so the same rows feed both the CSV writer and
//! the pretty-printed JSON output.

use crate::db::care_logs::CareLogs;
use crate::db::tasks::Tasks;
use crate::libs::care_date::CareDate;
use crate::libs::messages::Message;
use crate::libs::task_service::TaskService;
use crate::{msg_info, msg_success};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and scripts.
    Csv,
    /// Pretty-printed JSON for programmatic use.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportTarget {
    /// Scheduled and completed care tasks.
    Tasks,
    /// The care action history.
    Logs,
}

impl ExportTarget {
    fn stem(&self) -> &'static str {
        match self {
            ExportTarget::Tasks => "tasks",
            ExportTarget::Logs => "care_logs",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTaskRow {
    pub id: i64,
    pub plant_id: i64,
    pub kind: String,
    pub date: String,
    pub completed: bool,
    pub priority: String,
    pub note: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportLogRow {
    pub date: String,
    pub plant_id: i64,
    pub action: String,
    pub note: String,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Builds an exporter for `target`, deriving a date-stamped default
    /// file name when no output path is given.
    pub fn new(format: ExportFormat, target: ExportTarget, output: Option<PathBuf>) -> Self {
        let output_path = output.unwrap_or_else(|| {
            PathBuf::from(format!(
                "frond_{}_{}.{}",
                target.stem(),
                CareDate::today(),
                format.extension()
            ))
        });
        Self { format, output_path }
    }

    pub fn export(&self, target: ExportTarget) -> Result<()> {
        match target {
            ExportTarget::Tasks => self.export_tasks(),
            ExportTarget::Logs => self.export_logs(),
        }
    }

    fn export_tasks(&self) -> Result<()> {
        let service = TaskService::new(Tasks::new()?)?;
        let rows: Vec<ExportTaskRow> = service
            .all_tasks()
            .iter()
            .map(|t| ExportTaskRow {
                id: t.id,
                plant_id: t.plant_id,
                kind: t.kind.to_string(),
                date: t.date.to_string(),
                completed: t.completed,
                priority: t.priority.map(|p| p.to_string()).unwrap_or_default(),
                note: t.note.clone().unwrap_or_default(),
            })
            .collect();

        if rows.is_empty() {
            msg_info!(Message::ExportEmpty);
            return Ok(());
        }

        self.write_rows(&rows)?;
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_logs(&self) -> Result<()> {
        let logs = CareLogs::new()?.fetch_all()?;
        let rows: Vec<ExportLogRow> = logs
            .into_iter()
            .map(|log| ExportLogRow {
                date: log.date.to_string(),
                plant_id: log.plant_id,
                action: log.action.to_string(),
                note: log.note.unwrap_or_default(),
            })
            .collect();

        if rows.is_empty() {
            msg_info!(Message::ExportEmpty);
            return Ok(());
        }

        self.write_rows(&rows)?;
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_rows<T: Serialize>(&self, rows: &[T]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&self.output_path)?;
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }
        Ok(())
    }
}
