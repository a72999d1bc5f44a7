pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod query;
pub mod store;
pub mod utils;
