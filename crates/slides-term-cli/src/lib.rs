//! Library side of the `slides-term` binary: configuration, JSON file I/O,
//! and the `extract`, `rank`, and `select` batch steps.

pub mod config;
pub mod io;
pub mod run;

pub use config::{AppConfig, CONFIG_ENV};
pub use run::{extract, rank, select};
