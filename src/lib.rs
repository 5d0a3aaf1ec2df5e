// Library exports for integration tests and reusable components

pub mod attendees;
pub mod config;
pub mod query_store;
pub mod relative_time;
pub mod ui;

pub use config::Config;
