pub mod analysis_scheduler;
pub mod controller;
pub mod journal_api;
