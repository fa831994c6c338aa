use std::fs;
use std::path::{Path, PathBuf};
use pathdiff::diff_paths;
use crate::config::config::Mode;
use crate::config::ports::{AppConfig, ConversionPort, LogPort};
use crate::error::Result;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::batch::{BatchReport, BatchRequest};
use crate::models::conversion::{ConversionOutput, ConversionRequest, ConversionResult, RunOutcome};
use crate::models::file::FileCollectInput;
use crate::models::table::TableSummary;
use crate::service::decompress::ZstdService;
use crate::service::file::{
    batch_output_path, default_output_path, intermediate_path, is_same_path, validate_zst_input,
    FileService,
};
use crate::service::log_sink::LogAdapter;
use crate::service::table::CsvService;
use crate::service::traits::i_service::{DecompressServiceTrait, FileServiceTrait, TableServiceTrait};
use crate::utils::utils::{format_file_size, ProgressManager};

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    decompress_service: Box<dyn DecompressServiceTrait>,
    table_service: Box<dyn TableServiceTrait>,
    log: Box<dyn LogPort>,
}

impl ConversionFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        decompress_service: Box<dyn DecompressServiceTrait>,
        table_service: Box<dyn TableServiceTrait>,
        log: Box<dyn LogPort>,
    ) -> Self {
        ConversionFacade {
            file_service,
            decompress_service,
            table_service,
            log,
        }
    }

    /// 使用預設服務，日誌輸出至注入的 sink
    pub fn with_log(log: Box<dyn LogPort>) -> Self {
        Self::new(
            Box::new(FileService::new()),
            Box::new(ZstdService::new()),
            Box::new(CsvService::new()),
            log,
        )
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn convert(&self, request: &ConversionRequest) -> Result<ConversionOutput> {
        let input_path = request.input_path.as_path();
        validate_zst_input(input_path)?;

        let output_path = request
            .output_path
            .clone()
            .unwrap_or_else(|| default_output_path(input_path));
        let decompressed_path = intermediate_path(input_path);

        self.log.info(&format!(
            "解壓縮 {} 至 {}",
            input_path.display(),
            decompressed_path.display()
        ));
        match self.decompress_service.decompress(input_path, &decompressed_path) {
            Ok(bytes) => self.log.info(&format!(
                "解壓縮完成：{}（{}）",
                decompressed_path.display(),
                format_file_size(bytes)
            )),
            Err(e) => {
                self.log.error(&format!("解壓縮過程發生錯誤：{}", e));
                return Err(e);
            }
        }

        let processed = self.process_table(&decompressed_path, &output_path);
        let cleanup = !request.keep_intermediate;
        match processed {
            Ok((final_path, summary)) => {
                if cleanup && !is_same_path(&decompressed_path, &final_path) {
                    self.remove_intermediate(&decompressed_path);
                }
                let file_size = fs::metadata(&final_path).map(|m| m.len()).unwrap_or(0);
                Ok(ConversionOutput {
                    output_path: final_path,
                    summary,
                    file_size,
                })
            }
            Err(e) => {
                self.log.error(&format!("處理 CSV 資料時發生錯誤：{}", e));
                if cleanup && decompressed_path.exists() {
                    self.remove_intermediate(&decompressed_path);
                }
                Err(e)
            }
        }
    }

    fn batch_convert(&self, request: &BatchRequest) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        let collected = self.file_service.collect_files(FileCollectInput {
            input_dir: request.input_dir.clone(),
            recursive: request.recursive,
            include_patterns: request.include.clone(),
            exclude_patterns: request.exclude.clone(),
        })?;
        let files = collected.files;
        self.log.info(&format!(
            "在 {} 中找到 {} 個 ZST 檔案，總大小：{}",
            request.input_dir.display(),
            files.len(),
            format_file_size(collected.total_size)
        ));
        if collected.skipped_entries > 0 {
            self.log.warn(&format!("跳過 {} 個無法讀取的目錄項目", collected.skipped_entries));
        }

        if files.is_empty() {
            self.log.warn("沒有找到可轉換的 ZST 檔案");
            return Ok(report);
        }

        if let Some(output_dir) = &request.output_dir {
            fs::create_dir_all(output_dir)?;
            self.log.info(&format!("輸出目錄：{}", output_dir.display()));
        }

        let total_files = files.len();
        let pm = ProgressManager::new(total_files as u64, request.no_progress);
        for (i, file_path) in files.iter().enumerate() {
            let display_name = diff_paths(file_path, &request.input_dir)
                .unwrap_or_else(|| file_path.clone())
                .display()
                .to_string();
            self.log.info(&format!("處理檔案 {}/{}：{}", i + 1, total_files, display_name));

            let conversion = ConversionRequest {
                input_path: file_path.clone(),
                output_path: request
                    .output_dir
                    .as_ref()
                    .map(|dir| batch_output_path(dir, file_path)),
                keep_intermediate: request.keep_intermediate,
            };

            match self.convert(&conversion) {
                Ok(output) => {
                    self.log.info(&format!("✅ 轉換成功：{}", display_name));
                    report.record(ConversionResult::success(file_path, &output.output_path));
                }
                Err(e) if e.is_file_level() => {
                    self.log.error(&format!("❌ 轉換失敗 {}：{}", display_name, e));
                    report.record(ConversionResult::failed(file_path, &e));
                }
                Err(e) => {
                    pm.abandon();
                    return Err(e);
                }
            }
            pm.update((i + 1) as u64, &display_name);
        }
        pm.finish(report.success, report.failed);

        Ok(report)
    }
}

impl ConversionFacade {
    fn process_table(&self, csv_path: &Path, output_path: &Path) -> Result<(PathBuf, TableSummary)> {
        self.log.info(&format!("處理 CSV 資料：{}", csv_path.display()));

        let table = self.table_service.load(csv_path)?;
        let summary = table.summary();
        self.log_summary(&summary);

        if !is_same_path(output_path, csv_path) {
            if let Err(e) = self.table_service.write(&table, output_path) {
                self.remove_partial_output(output_path);
                return Err(e);
            }
            self.log.info(&format!("處理後資料已儲存至 {}", output_path.display()));
            Ok((output_path.to_path_buf(), summary))
        } else {
            self.log.info(&format!("資料處理完成：{}", csv_path.display()));
            Ok((csv_path.to_path_buf(), summary))
        }
    }

    fn log_summary(&self, summary: &TableSummary) {
        let (rows, columns) = summary.shape();
        self.log.info(&format!("資料形狀：({}, {})", rows, columns));
        self.log.info(&format!("欄位：{:?}", summary.columns));
        self.log.info(&format!("前 {} 列：\n{}", summary.preview.len(), summary.render_preview()));
        if !summary.matches_ohlcv() {
            self.log.warn("欄位與 OHLCV-1m 結構不符，載入資料庫前請確認");
        }
    }

    fn remove_partial_output(&self, path: &Path) {
        if !path.exists() {
            return;
        }
        match fs::remove_file(path) {
            Ok(()) => self.log.warn(&format!("已移除寫入不完整的輸出檔案：{}", path.display())),
            Err(e) => self.log.warn(&format!("無法移除不完整的輸出檔案 {}：{}", path.display(), e)),
        }
    }

    fn remove_intermediate(&self, path: &Path) {
        match fs::remove_file(path) {
            Ok(()) => self.log.info(&format!("已移除中間檔案：{}", path.display())),
            Err(e) => self.log.warn(&format!("無法移除中間檔案 {}：{}", path.display(), e)),
        }
    }
}

// 依配置執行單檔或批次轉換
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> Result<RunOutcome> {
        let facade = ConversionFacade::with_log(Box::new(LogAdapter));
        match config.mode {
            Mode::Single => {
                log::info!("開始單檔轉換，輸入檔案：{}", config.input);
                if config.report.is_some() {
                    log::warn!("--report 僅適用於批次模式，已忽略");
                }
                let output = facade.convert(&config.conversion_request())?;
                Ok(RunOutcome::Single(output))
            }
            Mode::Batch => {
                log::info!(
                    "開始批次轉換，輸入目錄：{}，輸出目錄：{:?}，遞迴：{}",
                    config.input,
                    config.output,
                    config.recursive
                );
                let report = facade.batch_convert(&config.batch_request())?;
                if let Some(report_path) = &config.report {
                    report.write_json(Path::new(report_path))?;
                    log::info!("批次報告已寫入 {}", report_path);
                }
                Ok(RunOutcome::Batch(report))
            }
        }
    }
}
