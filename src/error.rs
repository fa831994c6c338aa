//! 轉換流程的錯誤型別
//!
//! 單檔層級的錯誤會在批次轉換時被記錄為失敗結果，
//! 目錄層級與頂層錯誤則直接回傳給呼叫端。

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 單檔錯誤
    // ========================================================================
    #[error("輸入檔案不存在：{}", path.display())]
    NotFound { path: PathBuf },

    #[error("輸入檔案必須為 .zst 副檔名，實際為 '{extension}'：{}", path.display())]
    InvalidExtension { path: PathBuf, extension: String },

    #[error("解壓縮失敗 {}：{source}", path.display())]
    Decompression {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV 處理失敗 {}：{message}", path.display())]
    Processing { path: PathBuf, message: String },

    // ========================================================================
    // 目錄錯誤
    // ========================================================================
    #[error("目錄不存在：{}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("路徑不是目錄：{}", path.display())]
    NotADirectory { path: PathBuf },

    // ========================================================================
    // 頂層錯誤
    // ========================================================================
    #[error("配置錯誤：{message}")]
    Config { message: String },

    #[error("IO 錯誤：{0}")]
    Io(#[from] io::Error),

    #[error("報告序列化失敗：{0}")]
    Report(#[from] serde_json::Error),
}

impl Error {
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn invalid_extension(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        Self::InvalidExtension {
            path: path.to_path_buf(),
            extension,
        }
    }

    pub fn decompression(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Decompression {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn processing(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Processing {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 批次轉換中可記錄為單檔失敗並繼續處理的錯誤
    pub fn is_file_level(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. }
                | Error::InvalidExtension { .. }
                | Error::Decompression { .. }
                | Error::Processing { .. }
        )
    }

    /// 批次根目錄無效，整批中止
    pub fn is_directory_level(&self) -> bool {
        matches!(
            self,
            Error::DirectoryNotFound { .. } | Error::NotADirectory { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
