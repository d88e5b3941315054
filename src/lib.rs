pub mod app;
pub mod booking;
pub mod config;
pub mod content;
pub mod filters;
pub mod mailto;
pub mod resume;
