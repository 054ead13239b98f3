use crate::db::care_logs::{CareLog, CareLogs};
use crate::db::plants::Plants;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Only history for this plant (name or id)
    #[arg(short, long)]
    plant: Option<String>,
}

pub fn cmd(args: LogArgs) -> Result<()> {
    let mut plants_db = Plants::new()?;
    let mut logs_db = CareLogs::new()?;

    let logs = match &args.plant {
        Some(identifier) => {
            let plant = if let Ok(id) = identifier.parse::<i64>() {
                plants_db.get_by_id(id)?
            } else {
                plants_db.get_by_name(identifier)?
            };
            let Some(plant) = plant else {
                msg_error!(Message::PlantNotFound(identifier.clone()));
                return Ok(());
            };
            match plant.id {
                Some(id) => logs_db.fetch_by_plant(id)?,
                None => Vec::new(),
            }
        }
        None => logs_db.fetch_all()?,
    };

    if logs.is_empty() {
        msg_info!(Message::NoCareLogged);
        return Ok(());
    }

    let named: Vec<(String, CareLog)> = logs
        .into_iter()
        .map(|log| {
            let name = plants_db
                .get_by_id(log.plant_id)
                .ok()
                .flatten()
                .map(|p| p.name)
                .unwrap_or_else(|| format!("#{}", log.plant_id));
            (name, log)
        })
        .collect();

    msg_print!(Message::CareLogHeader, true);
    View::care_logs(&named)?;
    Ok(())
}
