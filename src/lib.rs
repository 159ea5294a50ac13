// replygen - tweet reply relay for the Fireworks completion API

pub mod cli;
pub mod config;
pub mod error;
pub mod fireworks;
pub mod models;
pub mod server;
pub mod translation;
pub mod utils;
