use serde::{Deserialize, Serialize};
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_engine::snake::{Cell, ControlMode, Grid};

const CONFIG_FILE_NAME: &str = "snake_runner_config.yaml";

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, RunnerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub grid_size: u32,
    pub start_x: u32,
    pub start_y: u32,
    pub tick_interval_ms: u32,
    pub mode: ControlMode,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub max_ticks: Option<u64>,
    pub rounds: u32,
}

impl RunnerConfig {
    pub fn grid(&self) -> Result<Grid, String> {
        Grid::new(self.grid_size as usize)
    }

    pub fn start(&self) -> Cell {
        Cell::new(self.start_x as usize, self.start_y as usize)
    }
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < 4 {
            return Err("grid_size must be at least 4".to_string());
        }
        if self.grid_size > 100 {
            return Err("grid_size must not exceed 100".to_string());
        }
        if self.start_x >= self.grid_size || self.start_y >= self.grid_size {
            return Err("start cell must lie inside the grid".to_string());
        }
        if self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must not exceed 5000".to_string());
        }
        if self.rounds < 1 {
            return Err("rounds must be at least 1".to_string());
        }
        if self.max_ticks == Some(0) {
            return Err("max_ticks must be greater than 0 when set".to_string());
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            start_x: 10,
            start_y: 10,
            tick_interval_ms: 100,
            mode: ControlMode::Autonomous,
            seed: None,
            max_ticks: None,
            rounds: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_runner_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = RunnerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid().unwrap().size(), 20);
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let config = RunnerConfig::default();
        let serializer = YamlConfigSerializer::new();
        let text = serializer.serialize(&config).unwrap();
        let parsed: RunnerConfig = serializer.deserialize(&text).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_manager_file_round_trip() {
        let config = RunnerConfig {
            mode: ControlMode::Manual,
            seed: Some(1234),
            max_ticks: Some(500),
            ..RunnerConfig::default()
        };
        let path = get_temp_file_path();
        let manager = get_config_manager(&path);

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh = get_config_manager(&path);
        assert_eq!(fresh.get_config().unwrap(), config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager = get_config_manager("this_snake_config_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), RunnerConfig::default());
    }

    #[test]
    fn test_optional_fields_may_be_omitted() {
        let content = "grid_size: 8\nstart_x: 2\nstart_y: 2\ntick_interval_ms: 0\nmode: Manual\nrounds: 2\n";
        let serializer = YamlConfigSerializer::new();
        let config: RunnerConfig = serializer.deserialize(content).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.max_ticks, None);
        assert_eq!(config.mode, ControlMode::Manual);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let content = "grid_size: 8\nstart_x: 9\nstart_y: 2\ntick_interval_ms: 100\nmode: Autonomous\nrounds: 1\n";
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content(content).unwrap();

        let manager = get_config_manager(&path);
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("start cell"));
        let _ = std::fs::remove_file(&path);
    }
}
