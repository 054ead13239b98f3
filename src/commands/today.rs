use crate::commands::task::with_plant_names;
use crate::db::plants::Plants;
use crate::db::tasks::Tasks;
use crate::libs::care_date::CareDate;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::task_service::TaskService;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

/// Shows what needs attention today: watering derived from each plant's
/// schedule, followed by explicitly scheduled tasks.
pub fn cmd() -> Result<()> {
    let today = CareDate::today();
    let config = Config::read()?;
    let service = TaskService::new(Tasks::new()?)?;
    let mut plants_db = Plants::new()?;

    let due = service.due_care_tasks(&mut plants_db, today)?;
    let scheduled: Vec<Task> = service
        .tasks_for_date(today)
        .into_iter()
        .filter(|t| config.show_completed() || !t.completed)
        .collect();

    if due.is_empty() && scheduled.is_empty() {
        msg_info!(Message::NothingDueToday);
        return Ok(());
    }

    if !due.is_empty() {
        msg_print!(Message::DueHeader(today.to_string()), true);
        let named = with_plant_names(&due)?;
        View::tasks_with_names(&named)?;
    }

    if !scheduled.is_empty() {
        msg_print!(Message::ScheduledHeader(today.to_string()), true);
        let named = with_plant_names(&scheduled)?;
        View::tasks_with_names(&named)?;
    }

    Ok(())
}
