pub mod app;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod output;
pub mod pipeline;
pub mod prefs;
pub mod record;
pub mod sample;
pub mod store;
pub mod utils;

#[cfg(test)]
mod tests;
