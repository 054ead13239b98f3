//! Database schema migrations.
//!
//! Schema changes are versioned and applied in order inside transactions
//! during database initialization. Applied versions are recorded in a
//! `migrations` table so each change runs exactly once per database file.

use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: base tables
        self.migrations.push(Migration {
            version: 1,
            name: "create_base_tables",
            up: |tx| {
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS plants (
                        id INTEGER PRIMARY KEY,
                        name TEXT NOT NULL,
                        species TEXT,
                        location TEXT,
                        watering_interval_days INTEGER NOT NULL,
                        last_watered TEXT,
                        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS tasks (
                        id INTEGER PRIMARY KEY,
                        plant_id INTEGER NOT NULL,
                        kind TEXT NOT NULL,
                        date TEXT NOT NULL,
                        completed INTEGER NOT NULL DEFAULT 0,
                        note TEXT
                    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS care_logs (
                        id INTEGER PRIMARY KEY,
                        plant_id INTEGER NOT NULL,
                        date TEXT NOT NULL,
                        action TEXT NOT NULL,
                        note TEXT
                    )",
                    [],
                )?;
                Ok(())
            },
        });

        // Version 2: task priority and date lookup index
        self.migrations.push(Migration {
            version: 2,
            name: "add_task_priority_and_date_index",
            up: |tx| {
                tx.execute("ALTER TABLE tasks ADD COLUMN priority TEXT", [])?;
                tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_date ON tasks(date)", [])?;
                tx.execute("CREATE INDEX IF NOT EXISTS idx_care_logs_plant ON care_logs(plant_id)", [])?;
                Ok(())
            },
        });
    }

    /// Applies every migration newer than the database's recorded version.
    pub fn migrate(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let current = current_version(conn)?;

        for migration in &self.migrations {
            if migration.version <= current {
                continue;
            }
            msg_debug!(format!("applying migration v{} ({})", migration.version, migration.name));
            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;
        }
        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

fn current_version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row("SELECT COALESCE(MAX(version), 0) FROM migrations", [], |row| {
        row.get::<_, u32>(0)
    })?;
    Ok(version)
}

/// Ensures the schema is current. Called from [`Db::new`](crate::db::db::Db).
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().migrate(conn)
}

/// Current schema version, 0 for a fresh database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    current_version(conn)
}
