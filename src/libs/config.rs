//! Configuration management.
//!
//! Settings live in a JSON file in the platform data directory and are
//! grouped into optional modules, so a fresh install works with no file at
//! all and `frond init` only writes the sections the user opted into.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::Priority;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Defaults applied when creating tasks.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleConfig {
    /// Priority assigned to new tasks when none is given, as its canonical
    /// uppercase name.
    pub default_priority: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            default_priority: Priority::Medium.to_string(),
        }
    }
}

/// Listing and table rendering options.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Whether completed tasks appear in `today` and `task list` output.
    pub show_completed: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { show_completed: true }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults;
    /// modules the user skips keep their current state.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Schedule", "Display"];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Schedule" => {
                    let default = config.schedule.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleSchedule);
                    config.schedule = Some(ScheduleConfig {
                        default_priority: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultPriority.to_string())
                            .default(default.default_priority)
                            .validate_with(|input: &String| input.parse::<Priority>().map(|_| ()).map_err(|e| e.to_string()))
                            .interact_text()?,
                    });
                }
                "Display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        show_completed: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowCompleted.to_string())
                            .default(default.show_completed)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// The priority for tasks created without one, if configured and valid.
    pub fn default_priority(&self) -> Option<Priority> {
        self.schedule.as_ref().and_then(|s| s.default_priority.parse().ok())
    }

    /// Whether listings should include completed tasks.
    pub fn show_completed(&self) -> bool {
        self.display.as_ref().map(|d| d.show_completed).unwrap_or(true)
    }
}
