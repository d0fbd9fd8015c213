#[cfg(feature = "cli")]
pub mod cli;
pub mod roster_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};
pub use roster_config::RosterConfig;
