pub mod config;
pub mod model;
pub mod providers;
pub mod report;
pub mod runner;
pub mod scoring;
