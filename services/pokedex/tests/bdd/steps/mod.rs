//! BDD step definitions for the pokedex host service

pub mod config_steps;
pub mod shell_steps;
