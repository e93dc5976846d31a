// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod csv;
pub mod data;
pub mod error;
pub mod loader;
pub mod net;
pub mod progress;
pub mod specs;
pub mod state;

#[cfg(feature = "cli")]
pub mod cli;
