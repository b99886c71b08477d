pub mod config;

pub mod data;
pub use data::DataError;

pub mod event_handler;
pub mod logging;
pub mod poise;
