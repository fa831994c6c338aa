use crate::config::config::resolve_mode;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：僅指定輸入與輸出，其餘使用預設值
pub struct DefaultConfigAdapter {
    input: String,
    output: Option<String>,
}

impl DefaultConfigAdapter {
    pub fn new(input: String, output: Option<String>) -> Self {
        DefaultConfigAdapter { input, output }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        crate::config::config::validate_input_path(&self.input, None)?;
        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            mode: resolve_mode(None, &self.input),
            recursive: false,
            keep_intermediate: false,
            include: vec!["*".to_string()],
            exclude: None,
            no_progress: false,
            report: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::Mode;
    use crate::error::Error;

    #[test]
    fn test_default_config_infers_mode() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().to_string_lossy().to_string();

        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new(input.clone(), None)));
        let config = service.get_config().unwrap();

        assert_eq!(config.mode, Mode::Batch);
        assert!(!config.recursive);
        assert!(!config.keep_intermediate);
        assert_eq!(config.batch_request().input_dir, dir.path());
    }

    #[test]
    fn test_default_config_rejects_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.zst").to_string_lossy().to_string();

        let service = ConfigService::new(Box::new(DefaultConfigAdapter::new(missing, None)));
        assert!(matches!(service.get_config(), Err(Error::NotFound { .. })));
    }
}
