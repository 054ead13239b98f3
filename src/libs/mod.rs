//! Core library modules for the frond application.
//!
//! Domain types and rules (plants, tasks, due dates, calendar bucketing)
//! plus the infrastructure they lean on: configuration, data directory
//! resolution, messaging, table views, and export.

pub mod calendar;
pub mod care_date;
pub mod config;
pub mod data_storage;
pub mod due;
pub mod export;
pub mod messages;
pub mod plant;
pub mod task;
pub mod task_service;
pub mod view;
