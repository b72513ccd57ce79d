pub mod commands;
pub mod config;
pub mod error;
pub mod hg;
pub mod szz;
pub mod utils;
