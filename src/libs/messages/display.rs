//! Display implementation for frond application messages.
//!
//! Single source of truth for all user-facing text. Each `Message` variant
//! maps to one string here, so wording stays consistent across commands
//! and parameters are interpolated type-safely.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === PLANT MESSAGES ===
            Message::PlantAdded(name) => format!("Plant '{}' added", name),
            Message::PlantRemoved(name) => format!("Plant '{}' removed", name),
            Message::PlantNotFound(what) => format!("No plant matches '{}'", what),
            Message::PlantRejected(reason) => format!("Plant rejected: {}", reason),
            Message::PlantWatered(name, date) => format!("Watered '{}' on {}", name, date),
            Message::PlantsHeader => "🌿 Plants".to_string(),
            Message::NoPlantsFound => "No plants registered yet. Add one with 'frond plant add'".to_string(),
            Message::ConfirmRemovePlant(name) => format!("Remove plant '{}' and keep its history?", name),
            Message::RemovalCancelled => "Removal cancelled".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created", id),
            Message::TaskRejected(reason) => format!("Task rejected: {}", reason),
            Message::TaskCompleted(id) => format!("Task #{} completed", id),
            Message::TaskReopened(id) => format!("Task #{} reopened", id),
            Message::TaskNotFoundWithId(id) => format!("Task #{} not found, nothing to do", id),
            Message::TasksHeader(date) => format!("📋 Tasks for {}", date),
            Message::AllTasksHeader => "📋 All tasks".to_string(),
            Message::NoTasksForDate(date) => format!("No tasks scheduled for {}", date),
            Message::NoTasksFound => "No tasks yet".to_string(),
            Message::SkippedCorruptTask(id, reason) => {
                format!("Skipping stored task #{}: {}", id, reason)
            }
            Message::SkippedUnreadableRow(reason) => {
                format!("Skipping unreadable task row: {}", reason)
            }
            Message::TaskStoreWriteFailed(reason) => {
                format!("Could not write tasks to storage: {}", reason)
            }

            // === TODAY / DUE MESSAGES ===
            Message::DueHeader(date) => format!("💧 Care due on {}", date),
            Message::ScheduledHeader(date) => format!("📋 Scheduled for {}", date),
            Message::NothingDueToday => "Nothing is due today. Your jungle is happy".to_string(),

            // === SCHEDULE MESSAGES ===
            Message::CalendarHeader(month) => format!("📅 {}", month),
            Message::InvalidMonth(month) => format!("'{}' is not a calendar month", month),

            // === CARE LOG MESSAGES ===
            Message::CareLogged(name) => format!("Care action logged for '{}'", name),
            Message::CareLogHeader => "📖 Care history".to_string(),
            Message::NoCareLogged => "No care actions logged yet".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleSchedule => "Schedule defaults".to_string(),
            Message::ConfigModuleDisplay => "Display options".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportEmpty => "Nothing to export".to_string(),
            Message::ExportDirectoryMissing(path) => {
                format!("Output directory '{}' does not exist", path)
            }

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptPlantName => "Plant name".to_string(),
            Message::PromptSpecies => "Species (optional)".to_string(),
            Message::PromptLocation => "Location (optional)".to_string(),
            Message::PromptWateringInterval => "Watering interval in days".to_string(),
            Message::PromptTaskPlantId => "Plant id".to_string(),
            Message::PromptTaskKind => "Task kind".to_string(),
            Message::PromptTaskDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskNote => "Note (optional)".to_string(),
            Message::PromptTaskPriority => "Priority (optional)".to_string(),
            Message::PromptDefaultPriority => "Default priority for new tasks".to_string(),
            Message::PromptShowCompleted => "Show completed tasks in listings".to_string(),
        };
        write!(f, "{}", text)
    }
}
