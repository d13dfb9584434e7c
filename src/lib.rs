pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod state;
pub mod store;
