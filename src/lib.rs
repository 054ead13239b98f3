//! # Frond - Houseplant Care Tracking
//!
//! A command-line tracker for houseplants, their watering schedules, care
//! tasks, and care history.
//!
//! ## Features
//!
//! - **Plant Registry**: Register plants with watering intervals and locations
//! - **Due Calculation**: Know which plants need water today, by calendar date
//! - **Care Tasks**: Schedule, list, and complete care actions per plant
//! - **Care History**: Append-only log of everything done to each plant
//! - **Schedule Calendar**: Monthly grid marking days with scheduled care
//! - **Data Export**: Export tasks and history to CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use frond::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
