use crate::db::care_logs::CareLog;
use crate::libs::calendar::MonthGrid;
use crate::libs::plant::Plant;
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Row, Table};

pub struct View {}

impl View {
    pub fn plants(plants: &[Plant]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "SPECIES", "LOCATION", "EVERY (DAYS)", "LAST WATERED"]);
        for plant in plants {
            table.add_row(row![
                plant.id.unwrap_or(0),
                plant.name,
                plant.species.as_deref().unwrap_or("-"),
                plant.location.as_deref().unwrap_or("-"),
                plant.watering_interval_days,
                plant.last_watered.map(|d| d.to_string()).unwrap_or_else(|| "never".to_string())
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Task listing with plant names resolved by the caller.
    pub fn tasks_with_names(tasks: &[(String, Task)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PLANT", "KIND", "DATE", "PRIORITY", "DONE", "NOTE"]);
        for (name, task) in tasks {
            table.add_row(Self::task_row(task, name));
        }
        table.printstd();

        Ok(())
    }

    fn task_row(task: &Task, plant: &str) -> Row {
        row![
            // Derived tasks carry synthetic ids and are shown unnumbered
            if task.id > 0 { task.id.to_string() } else { "-".to_string() },
            plant,
            task.kind,
            task.date,
            task.priority.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
            if task.completed { "x" } else { " " },
            task.note.as_deref().unwrap_or("")
        ]
    }

    pub fn care_logs(logs: &[(String, CareLog)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "PLANT", "ACTION", "NOTE"]);
        for (name, log) in logs {
            table.add_row(row![log.date, name, log.action, log.note.as_deref().unwrap_or("")]);
        }
        table.printstd();

        Ok(())
    }

    pub fn calendar(grid: &MonthGrid) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"]);
        for week in grid.weeks() {
            let cells: Vec<String> = week
                .iter()
                .map(|cell| match cell {
                    Some(cell) if cell.has_task => format!("{:>2} •", cell.day),
                    Some(cell) => format!("{:>2}", cell.day),
                    None => String::new(),
                })
                .collect();
            table.add_row(Row::from(cells));
        }
        table.printstd();

        Ok(())
    }
}
