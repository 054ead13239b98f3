use crate::db::plants::Plants;
use crate::db::tasks::Tasks;
use crate::libs::care_date::CareDate;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Task, TaskKind};
use crate::libs::task_service::TaskService;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Schedule a care task
    Add {
        /// Owning plant id; prompted for when omitted
        #[arg(short, long)]
        plant: Option<i64>,
        /// Care action (water, mist, fertilize, prune, repot)
        #[arg(short, long)]
        kind: Option<String>,
        /// Scheduled date, YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note, at most 500 characters
        #[arg(short, long)]
        note: Option<String>,
        /// Priority (low, medium, high)
        #[arg(long)]
        priority: Option<String>,
    },
    /// Toggle a task's completion
    Done {
        /// Task id
        id: i64,
    },
    /// List tasks
    List {
        /// Only tasks on this date, YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
        /// The whole collection regardless of date
        #[arg(short, long)]
        all: bool,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Add {
            plant,
            kind,
            date,
            note,
            priority,
        } => handle_add(plant, kind, date, note, priority),
        TaskCommand::Done { id } => handle_done(id),
        TaskCommand::List { date, all } => handle_list(date, all),
    }
}

fn handle_add(
    plant: Option<i64>,
    kind: Option<String>,
    date: Option<String>,
    note: Option<String>,
    priority: Option<String>,
) -> Result<()> {
    let plant_id = match plant {
        Some(id) => id,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskPlantId.to_string())
            .interact_text()?,
    };
    let kind = match kind {
        Some(kind) => kind,
        None => {
            let items: Vec<&str> = TaskKind::ALL.iter().map(|k| k.as_str()).collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskKind.to_string())
                .items(&items)
                .default(0)
                .interact()?;
            items[selection].to_string()
        }
    };
    let date = match date {
        Some(date) => date,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDate.to_string())
            .default(CareDate::today().to_string())
            .interact_text()?,
    };

    let config = Config::read()?;
    let priority = priority.or_else(|| config.default_priority().map(|p| p.to_string()));

    let input = NewTask {
        plant_id,
        kind,
        date,
        note,
        priority,
    };

    let mut service = TaskService::new(Tasks::new()?)?;
    match service.add_task(&input) {
        Ok(task) => msg_success!(Message::TaskCreated(task.id)),
        Err(err) => msg_error!(Message::TaskRejected(err.to_string())),
    }
    Ok(())
}

fn handle_done(id: i64) -> Result<()> {
    let mut service = TaskService::new(Tasks::new()?)?;
    match service.toggle_complete(id) {
        Some(task) if task.completed => msg_success!(Message::TaskCompleted(task.id)),
        Some(task) => msg_success!(Message::TaskReopened(task.id)),
        None => msg_info!(Message::TaskNotFoundWithId(id)),
    }
    Ok(())
}

fn handle_list(date: Option<String>, all: bool) -> Result<()> {
    let service = TaskService::new(Tasks::new()?)?;
    let config = Config::read()?;

    let (header, tasks) = if all {
        (Message::AllTasksHeader, service.all_tasks().to_vec())
    } else {
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
        (Message::TasksHeader(date.to_string()), service.tasks_for_date(date))
    };

    let tasks: Vec<Task> = if config.show_completed() {
        tasks
    } else {
        tasks.into_iter().filter(|t| !t.completed).collect()
    };

    if tasks.is_empty() {
        match header {
            Message::TasksHeader(date) => msg_info!(Message::NoTasksForDate(date)),
            _ => msg_info!(Message::NoTasksFound),
        }
        return Ok(());
    }

    msg_print!(header, true);
    let named = with_plant_names(&tasks)?;
    View::tasks_with_names(&named)?;
    Ok(())
}

/// Resolves plant names for display, falling back to the raw id when the
/// plant has since been removed.
pub fn with_plant_names(tasks: &[Task]) -> Result<Vec<(String, Task)>> {
    let mut plants_db = Plants::new()?;
    let mut named = Vec::with_capacity(tasks.len());
    for task in tasks {
        let name = plants_db
            .get_by_id(task.plant_id)?
            .map(|p| p.name)
            .unwrap_or_else(|| format!("#{}", task.plant_id));
        named.push((name, task.clone()));
    }
    Ok(named)
}
