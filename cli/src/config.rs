use grid_snake::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use grid_snake::{EngineSettings, InputSettings};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "grid_snake.yaml";

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub engine: EngineSettings,
    pub input: InputSettings,
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.engine.validate()?;
        self.input.validate()?;
        Ok(())
    }
}
