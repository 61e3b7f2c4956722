pub mod alarms;
pub mod config;
pub mod cr;
pub mod student;
pub mod ui;
