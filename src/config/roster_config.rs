use crate::core::roster::Roster;
use crate::core::{Duck, Fish, Swimmer};
use crate::utils::error::{Result, SwimError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ROSTER_NAME: &str = "pond";
pub const MAX_REPEAT: usize = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    pub roster: Option<RosterSection>,
    #[serde(default)]
    pub swimmers: Vec<Swimmer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterSection {
    pub name: Option<String>,
    pub strict: Option<bool>,
    pub repeat: Option<usize>,
}

impl RosterConfig {
    /// 從 TOML 檔案載入名單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析名單, 解析後才替換環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.substitute_env_vars()?;
        Ok(config)
    }

    /// 替換字串欄位中的環境變數 (例如 ${FISH_SPECIES}), 找不到的變數保持原樣
    fn substitute_env_vars(&mut self) -> Result<()> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SwimError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        if let Some(name) = self.roster.as_mut().and_then(|r| r.name.as_mut()) {
            *name = expand_env_vars(&re, name);
        }

        for swimmer in &mut self.swimmers {
            *swimmer = match swimmer {
                Swimmer::Duck(duck) => Duck::new(expand_env_vars(&re, duck.breed())).into(),
                Swimmer::Fish(fish) => Fish::new(expand_env_vars(&re, fish.species())).into(),
            };
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        self.roster
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .unwrap_or(DEFAULT_ROSTER_NAME)
    }

    pub fn strict(&self) -> bool {
        self.roster.as_ref().and_then(|r| r.strict).unwrap_or(false)
    }

    pub fn repeat(&self) -> usize {
        self.roster.as_ref().and_then(|r| r.repeat).unwrap_or(1)
    }

    fn section_mut(&mut self) -> &mut RosterSection {
        self.roster.get_or_insert_with(RosterSection::default)
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.section_mut().strict = Some(strict);
    }

    pub fn set_repeat(&mut self, repeat: usize) {
        self.section_mut().repeat = Some(repeat);
    }

    pub fn build_roster(&self) -> Roster {
        let mut roster = Roster::new(self.name()).with_repeat(self.repeat());
        roster.extend(self.swimmers.iter().cloned());
        roster
    }
}

// Values are inserted as-is and never re-scanned.
fn expand_env_vars(re: &Regex, value: &str) -> String {
    re.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validate_range("roster.repeat", self.repeat(), 1, MAX_REPEAT)?;

        if self.strict() {
            for (index, swimmer) in self.swimmers.iter().enumerate() {
                let field = format!("swimmers[{}].{}", index, swimmer.name_field());
                validate_non_empty_string(&field, swimmer.name())?;
            }
        }

        Ok(())
    }
}
