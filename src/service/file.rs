use std::ffi::OsString;
use std::path::{Path, PathBuf};
use regex::RegexSet;
use walkdir::WalkDir;
use crate::error::{Error, Result};
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::service::traits::i_service::FileServiceTrait;
use crate::utils::utils::create_regex_sets;

pub const ZST_EXTENSION: &str = "zst";
pub const CSV_EXTENSION: &str = "csv";

fn extension_is(path: &Path, expected: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}

pub fn has_zst_extension(path: &Path) -> bool {
    extension_is(path, ZST_EXTENSION)
}

// 驗證需在任何檔案寫入之前完成
pub fn validate_zst_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::not_found(path));
    }
    if !has_zst_extension(path) {
        return Err(Error::invalid_extension(path));
    }
    Ok(())
}

/// 解壓縮的中間檔：與輸入同目錄，去掉 .zst
pub fn intermediate_path(input: &Path) -> PathBuf {
    input.with_extension("")
}

/// 去掉 .zst 後確保以 .csv 結尾，`x.csv.zst -> x.csv`、`x.zst -> x.csv`
pub fn default_output_path(input: &Path) -> PathBuf {
    let stripped = input.with_extension("");
    if extension_is(&stripped, CSV_EXTENSION) {
        return stripped;
    }
    let mut name: OsString = stripped.into_os_string();
    name.push(".");
    name.push(CSV_EXTENSION);
    PathBuf::from(name)
}

/// 批次模式下的輸出路徑：輸出目錄 + 原檔名轉換後的 CSV 檔名
pub fn batch_output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let file_name = input.file_name().map(Path::new).unwrap_or(input);
    let csv_name = default_output_path(file_name);
    match csv_name.file_name() {
        Some(name) => output_dir.join(name),
        None => output_dir.join(csv_name),
    }
}

// 同一檔案可能以不同寫法出現（相對/絕對路徑），存在時以實際路徑比較
pub fn is_same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

pub fn is_file_valid(path: &Path, include_set: &RegexSet, exclude_set: &RegexSet) -> bool {
    if !has_zst_extension(path) {
        return false;
    }
    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return false,
    };
    include_set.is_match(&file_name) && !exclude_set.is_match(&file_name)
}

pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput> {
        let dir = &input.input_dir;
        if !dir.exists() {
            return Err(Error::DirectoryNotFound { path: dir.clone() });
        }
        if !dir.is_dir() {
            return Err(Error::NotADirectory { path: dir.clone() });
        }

        let exclude = input.exclude_patterns.clone().unwrap_or_default();
        let (include_set, exclude_set) = create_regex_sets(&input.include_patterns, &exclude);
        let max_depth = if input.recursive { usize::MAX } else { 1 };

        let mut files = Vec::new();
        let mut total_size = 0u64;
        let mut skipped_entries = 0u64;
        for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("無法讀取目錄項目：{}，跳過", e);
                    skipped_entries += 1;
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_file_valid(entry.path(), &include_set, &exclude_set) {
                continue;
            }
            total_size += entry.metadata().map(|m| m.len()).unwrap_or(0);
            files.push(entry.into_path());
        }

        // 目錄列舉順序依檔案系統而定，排序後報告才可重現
        files.sort();

        Ok(FileCollectOutput {
            files,
            total_size,
            skipped_entries,
        })
    }
}
