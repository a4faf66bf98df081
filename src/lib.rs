pub mod api;
pub mod commands;
pub mod error;
pub mod layers;
pub mod models;
pub mod output;
pub mod poller;
pub mod summary;
