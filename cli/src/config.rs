use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use tictactoe_agent::Mark;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstMove {
    Human,
    Agent,
    Random,
}

pub fn parse_first_move(text: &str) -> Result<FirstMove, String> {
    match text {
        "human" => Ok(FirstMove::Human),
        "agent" => Ok(FirstMove::Agent),
        "random" => Ok(FirstMove::Random),
        other => Err(format!(
            "Unknown first-move option '{}', expected human, agent or random",
            other
        )),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CliConfig {
    pub board_size: usize,
    pub agent_mark: char,
    pub first_move: String,
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            agent_mark: 'O',
            first_move: "human".to_string(),
            seed: None,
        }
    }
}

impl CliConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size < 2 || self.board_size > 20 {
            return Err("Board size must be between 2 and 20".to_string());
        }
        if Mark::from_char(self.agent_mark)? == Mark::Empty {
            return Err("Agent mark must be X or O".to_string());
        }
        parse_first_move(&self.first_move)?;
        Ok(())
    }

    pub fn agent_mark(&self) -> Mark {
        Mark::from_char(self.agent_mark).unwrap_or(Mark::O)
    }
}

fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// Reads the config file, falling back to defaults when it does not exist.
/// A file that exists but fails to parse or validate is an error, not a
/// silent fallback.
pub fn load(path: Option<&str>) -> Result<CliConfig, String> {
    let path = path.map_or_else(default_config_path, str::to_string);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(CliConfig::default()),
        Err(err) => return Err(format!("Failed to read config file {}: {}", path, err)),
    };

    let config: CliConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config.validate()?;
    Ok(config)
}

pub fn save(config: &CliConfig, path: Option<&str>) -> Result<(), String> {
    config.validate()?;
    let path = path.map_or_else(default_config_path, str::to_string);
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(&path, content).map_err(|e| format!("Failed to write config file {}: {}", path, e))
}
