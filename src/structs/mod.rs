pub mod analysis;
pub mod change;
pub mod cli;
pub mod config;
pub mod detection_report;
pub mod parsed_note;
