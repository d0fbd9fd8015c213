pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::RosterConfig;
pub use core::roster::{swim_each, Roster};
pub use domain::model::{Duck, Fish, Swimmer};
pub use domain::ports::Swimmable;
pub use utils::error::{Result, SwimError};
