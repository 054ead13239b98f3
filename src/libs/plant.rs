//! Plant entity and the registry boundary the scheduler reads from.

use crate::libs::care_date::CareDate;
use crate::libs::due::is_care_due;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction-time validation failures. Fatal to the call only; no
/// existing state is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlantError {
    #[error("watering interval must be at least 1 day, got {0}")]
    InvalidInterval(i64),
    #[error("plant name must not be empty")]
    EmptyName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: Option<i64>,
    pub name: String,
    pub species: Option<String>,
    pub location: Option<String>,
    pub watering_interval_days: u32,
    pub last_watered: Option<CareDate>,
}

impl Plant {
    /// Validates and builds a new, not-yet-stored plant.
    ///
    /// `interval_days` below 1 fails with [`PlantError::InvalidInterval`];
    /// a blank name fails with [`PlantError::EmptyName`].
    pub fn new(
        name: &str,
        species: Option<String>,
        location: Option<String>,
        interval_days: i64,
        last_watered: Option<CareDate>,
    ) -> Result<Self, PlantError> {
        if name.trim().is_empty() {
            return Err(PlantError::EmptyName);
        }
        if interval_days < 1 {
            return Err(PlantError::InvalidInterval(interval_days));
        }
        Ok(Plant {
            id: None,
            name: name.trim().to_string(),
            species: species.filter(|s| !s.trim().is_empty()),
            location: location.filter(|s| !s.trim().is_empty()),
            watering_interval_days: interval_days as u32,
            last_watered,
        })
    }

    /// Whether watering is due on `today`, per the schedule interval.
    pub fn needs_water(&self, today: CareDate) -> bool {
        is_care_due(self.last_watered, self.watering_interval_days, today)
    }
}

/// Read access to the plant collection. The task scheduler depends on this
/// boundary only, never on a concrete storage type.
pub trait PlantRegistry {
    fn plant_by_id(&mut self, id: i64) -> Result<Option<Plant>>;
    fn all_plants(&mut self) -> Result<Vec<Plant>>;
}

/// Vec-backed registry for tests and derived-task computation without a
/// database.
#[derive(Debug, Default)]
pub struct MemoryPlants {
    plants: Vec<Plant>,
}

impl MemoryPlants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plant, assigning the next free id, and returns the id.
    pub fn add(&mut self, mut plant: Plant) -> i64 {
        let id = self.plants.iter().filter_map(|p| p.id).max().unwrap_or(0) + 1;
        plant.id = Some(id);
        self.plants.push(plant);
        id
    }
}

impl PlantRegistry for MemoryPlants {
    fn plant_by_id(&mut self, id: i64) -> Result<Option<Plant>> {
        Ok(self.plants.iter().find(|p| p.id == Some(id)).cloned())
    }

    fn all_plants(&mut self) -> Result<Vec<Plant>> {
        Ok(self.plants.clone())
    }
}
