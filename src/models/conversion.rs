use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::error::Error;
use crate::models::batch::BatchReport;
use crate::models::table::TableSummary;

// 單檔轉換請求，每次呼叫建立一次
#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub keep_intermediate: bool,
}

impl ConversionRequest {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        ConversionRequest {
            input_path: input_path.into(),
            output_path: None,
            keep_intermediate: false,
        }
    }

    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn keep_intermediate(mut self, keep: bool) -> Self {
        self.keep_intermediate = keep;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub output_path: PathBuf,
    pub summary: TableSummary,
    pub file_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    Success,
    Failed,
}

// 批次報告中的單檔結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub status: ConversionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResult {
    pub fn success(input: &Path, output: &Path) -> Self {
        ConversionResult {
            input: input.to_path_buf(),
            output: Some(output.to_path_buf()),
            status: ConversionStatus::Success,
            error: None,
        }
    }

    pub fn failed(input: &Path, error: &Error) -> Self {
        ConversionResult {
            input: input.to_path_buf(),
            output: None,
            status: ConversionStatus::Failed,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ConversionStatus::Success
    }
}

// 一次執行的結果，依模式而定
#[derive(Debug)]
pub enum RunOutcome {
    Single(ConversionOutput),
    Batch(BatchReport),
}
