//! Generation defaults loading and management.
//!
//! The engine ships a defaults profile (the values a form client should
//! pre-populate) and can load an overriding profile from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use timesynth::config::DefaultsLoader;
//!
//! let loader = DefaultsLoader::load("./config/defaults.yaml").unwrap();
//! println!("Default employees: {}", loader.defaults().num_employees);
//! ```

mod loader;
mod types;

pub use loader::DefaultsLoader;
pub use types::GenerationDefaults;
