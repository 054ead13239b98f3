use crate::db::tasks::Tasks;
use crate::libs::calendar::month_grid;
use crate::libs::care_date::CareDate;
use crate::libs::messages::Message;
use crate::libs::task_service::TaskService;
use crate::libs::view::View;
use crate::{msg_error, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Calendar year, current when omitted
    #[arg(short, long)]
    year: Option<i32>,
    /// Calendar month 1-12, current when omitted
    #[arg(short, long)]
    month: Option<u32>,
}

pub fn cmd(args: ScheduleArgs) -> Result<()> {
    let today = CareDate::today();
    let year = args.year.unwrap_or_else(|| today.year());
    let month = args.month.unwrap_or_else(|| today.month());

    let service = TaskService::new(Tasks::new()?)?;
    let due_dates = service.due_dates();

    let Some(grid) = month_grid(year, month, &due_dates) else {
        msg_error!(Message::InvalidMonth(month));
        return Ok(());
    };

    // Month header like "May 2024"; day 1 always exists once the grid does
    if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
        msg_print!(Message::CalendarHeader(first.format("%B %Y").to_string()), true);
    }
    View::calendar(&grid)?;
    Ok(())
}
