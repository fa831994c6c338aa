use dialoguer::{Confirm, Input, Select};
use std::path::Path;

use crate::config::config::{resolve_mode, validate_file_patterns, validate_mode, Mode};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::error::{Error, Result};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::RunOutcome;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::utils::setup_logging;

fn prompt_error(what: &str, e: dialoguer::Error) -> Error {
    Error::config(format!("{}失敗: {}", what, e))
}

pub fn process_interactive_mode() -> Result<RunOutcome> {
    setup_logging("info");
    println!("=== 歡迎使用互動模式 ===");
    let use_default_config = get_default_config_option()?;
    let input = get_input_path()?;
    let output = get_output_path()?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：依輸入路徑判斷模式，不遞迴，不保留中間檔");
        Box::new(DefaultConfigAdapter::new(input, output))
    } else {
        Box::new(InteractiveConfigAdapter::new(input, output))
    };

    let config = ConfigService::new(config_port).get_config()?;
    println!("實際使用的配置：{:#?}", config);

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

pub fn get_default_config_option() -> Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（僅需指定輸入和輸出路徑）")
        .default(true)
        .interact()
        .map_err(|e| prompt_error("預設配置選擇", e))
}

pub fn get_input_path() -> Result<String> {
    Input::new()
        .with_prompt("請輸入 .zst 檔案或目錄路徑（例如：./Data/raw/prices.csv.zst 或 ./Data/raw）")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if Path::new(input).exists() { Ok(()) } else { Err(format!("路徑 '{}' 不存在", input)) }
        })
        .interact_text()
        .map_err(|e| prompt_error("輸入路徑", e))
}

pub fn get_output_path() -> Result<Option<String>> {
    let output: String = Input::new()
        .with_prompt("輸入輸出檔案或目錄（留空則輸出至輸入檔案旁）")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| prompt_error("輸出路徑", e))?;
    let output = output.trim().to_string();
    Ok(if output.is_empty() { None } else { Some(output) })
}

pub fn get_conversion_mode(input: &str) -> Result<Mode> {
    let default = match resolve_mode(None, input) {
        Mode::Single => 0,
        Mode::Batch => 1,
    };
    let selected = Select::new()
        .with_prompt("選擇轉換模式（使用方向鍵選擇，按 Enter 確認）")
        .items(&["單檔 - 轉換單一 .zst 檔案", "批次 - 轉換目錄下所有 .zst 檔案"])
        .default(default)
        .interact()
        .map_err(|e| prompt_error("轉換模式選擇", e))?;
    Ok(if selected == 1 { Mode::Batch } else { Mode::Single })
}

pub fn get_batch_options() -> Result<(bool, Option<Vec<String>>, Option<String>)> {
    let recursive = Confirm::new()
        .with_prompt("是否遞迴搜尋子目錄？")
        .default(false)
        .interact()
        .map_err(|e| prompt_error("遞迴選項輸入", e))?;

    let exclude = Input::<String>::new()
        .with_prompt("輸入排除模式（例如：tmp_*,*.old.zst，預設為空）")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| prompt_error("排除模式輸入", e))?
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<String>>();

    let report = Input::<String>::new()
        .with_prompt("批次報告 JSON 路徑（留空則不輸出）")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| prompt_error("報告路徑輸入", e))?;
    let report = report.trim().to_string();

    Ok((
        recursive,
        if exclude.is_empty() { None } else { Some(exclude) },
        if report.is_empty() { None } else { Some(report) },
    ))
}

pub fn get_keep_intermediate_option() -> Result<bool> {
    Confirm::new()
        .with_prompt("是否保留解壓縮後的中間檔案？")
        .default(false)
        .interact()
        .map_err(|e| prompt_error("中間檔選項輸入", e))
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    input: String,
    output: Option<String>,
}

impl InteractiveConfigAdapter {
    pub fn new(input: String, output: Option<String>) -> Self {
        InteractiveConfigAdapter { input, output }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let mode = get_conversion_mode(&self.input)?;
        validate_mode(mode, &self.input)?;
        let (recursive, exclude, report) = if mode == Mode::Batch {
            get_batch_options()?
        } else {
            (false, None, None)
        };
        let keep_intermediate = get_keep_intermediate_option()?;
        let include = vec!["*".to_string()];
        validate_file_patterns(&include, &exclude)?;

        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            mode,
            recursive,
            keep_intermediate,
            include,
            exclude,
            no_progress: false,
            report,
        })
    }
}
