//! Integration tests for the Cadence plan generator

mod catalog_loading;
mod cli_commands;
mod config_integration;
mod generator_scenarios;
mod store_integration;
