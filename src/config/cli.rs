use crate::config::roster_config::RosterConfig;
use crate::core::{Duck, Fish, Swimmer};
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "swimmers")]
#[command(about = "Make ducks and fish swim")]
pub struct CliConfig {
    /// Add a duck with the given breed (repeatable)
    #[arg(long = "duck", value_name = "BREED")]
    pub ducks: Vec<String>,

    /// Add a fish with the given species (repeatable)
    #[arg(long = "fish", value_name = "SPECIES")]
    pub fish: Vec<String>,

    /// Path to a TOML roster file
    #[arg(long, value_name = "PATH")]
    pub roster: Option<String>,

    /// How many times each swimmer swims (overrides the roster file)
    #[arg(long)]
    pub repeat: Option<usize>,

    /// Reject empty or whitespace-only breeds and species
    #[arg(long)]
    pub strict: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

impl CliConfig {
    /// Roster file first, then `--duck` and `--fish` in that order.
    pub fn resolve(&self) -> Result<RosterConfig> {
        let mut config = match &self.roster {
            Some(path) => {
                tracing::info!("📁 Loading roster from: {}", path);
                RosterConfig::from_file(path)?
            }
            None => RosterConfig::default(),
        };

        config
            .swimmers
            .extend(self.ducks.iter().map(|breed| Swimmer::Duck(Duck::new(breed.as_str()))));
        config
            .swimmers
            .extend(self.fish.iter().map(|species| Swimmer::Fish(Fish::new(species.as_str()))));

        if let Some(repeat) = self.repeat {
            config.set_repeat(repeat);
        }
        if self.strict {
            config.set_strict(true);
        }

        Ok(config)
    }
}
