//! Configuration loading for the payroll service.
//!
//! This module loads the server settings and the optional demo seed data
//! from YAML files in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Seeding {} employees", config.seed().employees.len());
//! ```

mod loader;
mod seed;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, SeedAttendance, SeedData, ServerConfig};
