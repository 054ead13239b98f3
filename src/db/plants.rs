use crate::db::db::Db;
use crate::libs::care_date::CareDate;
use crate::libs::plant::{Plant, PlantRegistry};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_PLANTS: &str = "CREATE TABLE IF NOT EXISTS plants (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    species TEXT,
    location TEXT,
    watering_interval_days INTEGER NOT NULL,
    last_watered TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_PLANT: &str =
    "INSERT INTO plants (name, species, location, watering_interval_days, last_watered) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_PLANTS: &str =
    "SELECT id, name, species, location, watering_interval_days, last_watered FROM plants ORDER BY name";
const SELECT_PLANT_BY_ID: &str =
    "SELECT id, name, species, location, watering_interval_days, last_watered FROM plants WHERE id = ?1";
const SELECT_PLANT_BY_NAME: &str =
    "SELECT id, name, species, location, watering_interval_days, last_watered FROM plants WHERE name = ?1";
const SELECT_BY_LOCATION: &str =
    "SELECT id, name, species, location, watering_interval_days, last_watered FROM plants WHERE location = ?1 ORDER BY name";
const SELECT_LOCATIONS: &str =
    "SELECT DISTINCT location FROM plants WHERE location IS NOT NULL ORDER BY location";
const UPDATE_LAST_WATERED: &str = "UPDATE plants SET last_watered = ?2 WHERE id = ?1";
const DELETE_PLANT: &str = "DELETE FROM plants WHERE id = ?1";

pub struct Plants {
    conn: Connection,
}

impl Plants {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // Migration v1 creates the table, but we ensure here too
        db.conn.execute(SCHEMA_PLANTS, [])?;
        Ok(Self { conn: db.conn })
    }

    fn map_row(row: &Row) -> rusqlite::Result<Plant> {
        Ok(Plant {
            id: row.get(0)?,
            name: row.get(1)?,
            species: row.get(2)?,
            location: row.get(3)?,
            watering_interval_days: row.get(4)?,
            // An unreadable date means the watering state is unknown,
            // which the schedule treats the same as never watered.
            last_watered: row.get::<_, Option<String>>(5)?.and_then(|s| s.parse::<CareDate>().ok()),
        })
    }

    /// Stores a validated plant and returns its assigned id.
    pub fn insert(&mut self, plant: &Plant) -> Result<i64> {
        self.conn.execute(
            INSERT_PLANT,
            params![
                plant.name,
                plant.species,
                plant.location,
                plant.watering_interval_days,
                plant.last_watered.map(|d| d.to_string()),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn list(&mut self) -> Result<Vec<Plant>> {
        let mut stmt = self.conn.prepare(SELECT_PLANTS)?;
        let plant_iter = stmt.query_map([], Self::map_row)?;

        let mut plants = Vec::new();
        for plant in plant_iter {
            plants.push(plant?);
        }
        Ok(plants)
    }

    pub fn list_by_location(&mut self, location: &str) -> Result<Vec<Plant>> {
        let mut stmt = self.conn.prepare(SELECT_BY_LOCATION)?;
        let plant_iter = stmt.query_map(params![location], Self::map_row)?;

        let mut plants = Vec::new();
        for plant in plant_iter {
            plants.push(plant?);
        }
        Ok(plants)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Plant>> {
        self.conn
            .query_row(SELECT_PLANT_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Plant>> {
        self.conn
            .query_row(SELECT_PLANT_BY_NAME, params![name], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Distinct locations that have at least one plant.
    pub fn locations(&mut self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_LOCATIONS)?;
        let location_iter = stmt.query_map([], |row| row.get(0))?;

        let mut locations = Vec::new();
        for location in location_iter {
            locations.push(location?);
        }
        Ok(locations)
    }

    /// Records a watering date. Returns the number of affected rows, 0 for
    /// an unknown id.
    pub fn set_last_watered(&mut self, id: i64, date: CareDate) -> Result<usize> {
        let affected = self.conn.execute(UPDATE_LAST_WATERED, params![id, date.to_string()])?;
        Ok(affected)
    }

    /// Deletes a plant. Care history rows are kept; they reference the
    /// plant weakly.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_PLANT, params![id])?;
        Ok(affected)
    }
}

impl PlantRegistry for Plants {
    fn plant_by_id(&mut self, id: i64) -> Result<Option<Plant>> {
        self.get_by_id(id)
    }

    fn all_plants(&mut self) -> Result<Vec<Plant>> {
        self.list()
    }
}
