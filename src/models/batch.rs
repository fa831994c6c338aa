use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::error::Result;
use crate::models::conversion::ConversionResult;

#[derive(Clone, Debug)]
pub struct BatchRequest {
    pub input_dir: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub recursive: bool,
    pub keep_intermediate: bool,
    pub include: Vec<String>,
    pub exclude: Option<Vec<String>>,
    pub no_progress: bool,
}

impl BatchRequest {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        BatchRequest {
            input_dir: input_dir.into(),
            output_dir: None,
            recursive: false,
            keep_intermediate: false,
            include: vec!["*".to_string()],
            exclude: None,
            no_progress: false,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn keep_intermediate(mut self, keep: bool) -> Self {
        self.keep_intermediate = keep;
        self
    }

    pub fn no_progress(mut self, no_progress: bool) -> Self {
        self.no_progress = no_progress;
        self
    }
}

/// 批次轉換報告
///
/// 每個被發現的輸入檔案都恰好對應一筆結果，順序即處理順序。
#[derive(Debug, Default, Clone, Serialize)]
pub struct BatchReport {
    pub success: usize,
    pub failed: usize,
    pub files: Vec<ConversionResult>,
}

impl BatchReport {
    pub fn record(&mut self, result: ConversionResult) {
        if result.is_success() {
            self.success += 1;
        } else {
            self.failed += 1;
        }
        self.files.push(result);
    }

    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    pub fn successes(&self) -> impl Iterator<Item = &ConversionResult> {
        self.files.iter().filter(|r| r.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ConversionResult> {
        self.files.iter().filter(|r| !r.is_success())
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
