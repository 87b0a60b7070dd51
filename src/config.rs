use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

use crate::engine::{BotType, Mark};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
}

pub struct YamlConfigSerializer;

impl Default for YamlConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }
}

pub fn load_config<TConfig>(
    provider: &impl ConfigContentProvider,
    serializer: &impl ConfigSerializer<TConfig>,
) -> Result<TConfig, String>
where
    TConfig: Default + Validate,
{
    let config = match provider.get_config_content()? {
        Some(content) => serializer.deserialize(&content)?,
        None => TConfig::default(),
    };

    config.validate()?;

    Ok(config)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub human_mark: Mark,
    pub bot_type: BotType,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            bot_type: BotType::Minimax,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn bot_mark(&self) -> Mark {
        match self.human_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        }
    }

    pub fn from_yaml_file(file_path: &str) -> Result<Self, String> {
        let provider = FileContentConfigProvider::new(file_path.to_string());
        let serializer = YamlConfigSerializer::new();
        load_config(&provider, &serializer)
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("Human mark must be X or O".to_string());
        }
        Ok(())
    }
}
