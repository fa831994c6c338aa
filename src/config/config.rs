use clap::{Parser, ValueEnum};
use std::path::Path;
use crate::error::{Error, Result};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "zst_to_csv",
    about = "將 Zstandard (.zst) 壓縮的行情資料轉換為 CSV 格式",
    long_about = "將 Zstandard (.zst) 壓縮的行情資料轉換為 CSV 格式，支援單一檔案轉換或批次轉換整個目錄。\n輸入為目錄時預設使用批次模式，輸入為檔案時使用單檔模式。\n不帶任何參數執行會進入互動模式。\n使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    pub input: String,
    /// 單檔模式為輸出 CSV 檔案，批次模式為輸出目錄
    #[arg(short, long)]
    pub output: Option<String>,
    #[arg(long)]
    pub mode: Option<Mode>,
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
    #[arg(long, default_value_t = false)]
    pub keep_intermediate: bool,
    #[arg(long, default_value = "*", value_delimiter = ',')]
    pub include: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    /// 將批次報告以 JSON 寫入指定路徑
    #[arg(long)]
    pub report: Option<String>,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug)]
pub enum Mode {
    Single,
    Batch,
}

// 未指定模式時依輸入路徑推斷
pub fn resolve_mode(mode: Option<Mode>, input: &str) -> Mode {
    match mode {
        Some(mode) => mode,
        None if Path::new(input).is_dir() => Mode::Batch,
        None => Mode::Single,
    }
}

pub fn effective_log_level(log_level: &str, verbose: bool) -> &str {
    if verbose {
        "debug"
    } else {
        log_level
    }
}

// 明確指定批次模式時，缺少的輸入視為目錄
pub fn validate_input_path(input: &str, mode: Option<Mode>) -> Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(match mode {
            Some(Mode::Batch) => Error::DirectoryNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::not_found(path),
        });
    }
    Ok(path)
}

pub fn validate_mode(mode: Mode, input: &str) -> Result<()> {
    if mode == Mode::Single && Path::new(input).is_dir() {
        return Err(Error::config(format!(
            "單檔模式需要檔案輸入，'{}' 是目錄，請改用 --mode batch",
            input
        )));
    }
    Ok(())
}

pub fn is_valid_pattern(pattern: &str) -> bool {
    let invalid_chars = ['/', '\\', ':', '?', '"', '<', '>', '|'];
    !pattern.is_empty() && !pattern.contains(&invalid_chars[..])
}

pub fn validate_file_patterns(include: &[String], exclude: &Option<Vec<String>>) -> Result<()> {
    for pattern in include {
        if !is_valid_pattern(pattern) {
            return Err(Error::config(format!("無效的包含模式: {}", pattern)));
        }
    }
    if let Some(exclude_patterns) = exclude {
        for pattern in exclude_patterns {
            if !is_valid_pattern(pattern) {
                return Err(Error::config(format!("無效的排除模式: {}", pattern)));
            }
        }
    }
    Ok(())
}
