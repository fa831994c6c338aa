use std::path::PathBuf;
use log::Level;
use crate::config::config::Mode;
use crate::error::Result;
use crate::models::batch::BatchRequest;
use crate::models::conversion::{ConversionRequest, RunOutcome};

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: String,
    pub output: Option<String>,
    pub mode: Mode,
    pub recursive: bool,
    pub keep_intermediate: bool,
    pub include: Vec<String>,
    pub exclude: Option<Vec<String>>,
    pub no_progress: bool,
    pub report: Option<String>,
}

impl AppConfig {
    pub fn conversion_request(&self) -> ConversionRequest {
        ConversionRequest {
            input_path: PathBuf::from(&self.input),
            output_path: self.output.as_ref().map(PathBuf::from),
            keep_intermediate: self.keep_intermediate,
        }
    }

    pub fn batch_request(&self) -> BatchRequest {
        BatchRequest {
            input_dir: PathBuf::from(&self.input),
            output_dir: self.output.as_ref().map(PathBuf::from),
            recursive: self.recursive,
            keep_intermediate: self.keep_intermediate,
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            no_progress: self.no_progress,
        }
    }
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> Result<RunOutcome>;
}

// 日誌輸出的 Port，由呼叫端注入
pub trait LogPort: Send + Sync {
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}
