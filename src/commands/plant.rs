use crate::db::care_logs::{CareLog, CareLogs};
use crate::db::plants::Plants;
use crate::libs::care_date::CareDate;
use crate::libs::messages::Message;
use crate::libs::plant::Plant;
use crate::libs::task::TaskKind;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct PlantArgs {
    #[command(subcommand)]
    command: PlantCommand,
}

#[derive(Debug, Subcommand)]
enum PlantCommand {
    /// Register a new plant
    Add {
        /// Plant name; prompted for when omitted
        name: Option<String>,
        /// Scientific name
        #[arg(short, long)]
        species: Option<String>,
        /// Room or placement
        #[arg(short, long)]
        location: Option<String>,
        /// Days between waterings
        #[arg(short, long)]
        interval: Option<i64>,
    },
    /// List plants
    List {
        /// Only plants in this location
        #[arg(short, long)]
        location: Option<String>,
    },
    /// Record a watering
    Water {
        /// Plant name or id
        plant: String,
        /// Date of the watering, today when omitted
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove a plant from the registry
    Remove {
        /// Plant name or id
        plant: String,
    },
}

pub fn cmd(args: PlantArgs) -> Result<()> {
    match args.command {
        PlantCommand::Add {
            name,
            species,
            location,
            interval,
        } => handle_add(name, species, location, interval),
        PlantCommand::List { location } => handle_list(location),
        PlantCommand::Water { plant, date } => handle_water(plant, date),
        PlantCommand::Remove { plant } => handle_remove(plant),
    }
}

fn handle_add(name: Option<String>, species: Option<String>, location: Option<String>, interval: Option<i64>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPlantName.to_string())
            .interact_text()?,
    };
    let interval = match interval {
        Some(days) => days,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWateringInterval.to_string())
            .default(7)
            .interact_text()?,
    };

    let plant = match Plant::new(&name, species, location, interval, None) {
        Ok(plant) => plant,
        Err(err) => {
            msg_error!(Message::PlantRejected(err.to_string()));
            return Ok(());
        }
    };

    Plants::new()?.insert(&plant)?;
    msg_success!(Message::PlantAdded(plant.name));
    Ok(())
}

fn handle_list(location: Option<String>) -> Result<()> {
    let mut plants_db = Plants::new()?;
    let plants = match location {
        Some(location) => plants_db.list_by_location(&location)?,
        None => plants_db.list()?,
    };

    if plants.is_empty() {
        msg_info!(Message::NoPlantsFound);
        return Ok(());
    }

    msg_print!(Message::PlantsHeader, true);
    View::plants(&plants)?;
    Ok(())
}

fn handle_water(identifier: String, date: Option<String>) -> Result<()> {
    let mut plants_db = Plants::new()?;
    let Some(plant) = find_plant(&mut plants_db, &identifier)? else {
        msg_error!(Message::PlantNotFound(identifier));
        return Ok(());
    };

    let date = match date {
        Some(raw) => match raw.parse::<CareDate>() {
            Ok(date) => date,
            Err(_) => {
                msg_error!(Message::TaskRejected(format!("'{}' is not a valid calendar date", raw)));
                return Ok(());
            }
        },
        None => CareDate::today(),
    };

    let Some(plant_id) = plant.id else {
        msg_error!(Message::PlantNotFound(identifier));
        return Ok(());
    };
    plants_db.set_last_watered(plant_id, date)?;
    CareLogs::new()?.insert(&CareLog::new(plant_id, date, TaskKind::Water, None))?;

    msg_success!(Message::PlantWatered(plant.name, date.to_string()));
    Ok(())
}

fn handle_remove(identifier: String) -> Result<()> {
    let mut plants_db = Plants::new()?;
    let Some(plant) = find_plant(&mut plants_db, &identifier)? else {
        msg_error!(Message::PlantNotFound(identifier));
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmRemovePlant(plant.name.clone()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::RemovalCancelled);
        return Ok(());
    }

    if let Some(id) = plant.id {
        plants_db.delete(id)?;
    }
    msg_success!(Message::PlantRemoved(plant.name));
    Ok(())
}

/// Looks a plant up by numeric id first, then by exact name.
fn find_plant(plants_db: &mut Plants, identifier: &str) -> Result<Option<Plant>> {
    if let Ok(id) = identifier.parse::<i64>() {
        if let Some(plant) = plants_db.get_by_id(id)? {
            return Ok(Some(plant));
        }
    }
    plants_db.get_by_name(identifier)
}
