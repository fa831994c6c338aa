use std::path::Path;
use csv::StringRecord;
use crate::error::{Error, Result};
use crate::models::table::{TableSummary, PREVIEW_ROWS};
use crate::service::traits::i_service::TableServiceTrait;

/// 完整載入記憶體的 CSV 表格
#[derive(Debug, Clone)]
pub struct Table {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Table {
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            rows: self.row_count(),
            columns: self.headers.iter().map(String::from).collect(),
            preview: self
                .records
                .iter()
                .take(PREVIEW_ROWS)
                .map(|record| record.iter().map(String::from).collect())
                .collect(),
        }
    }
}

pub struct CsvService;

impl CsvService {
    pub fn new() -> Self {
        CsvService
    }
}

impl Default for CsvService {
    fn default() -> Self {
        Self::new()
    }
}

impl TableServiceTrait for CsvService {
    fn load(&self, path: &Path) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| Error::processing(path, e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| Error::processing(path, e.to_string()))?
            .clone();
        if headers.is_empty() {
            return Err(Error::processing(path, "檔案沒有可解析的欄位"));
        }

        // 欄位不足的列補空值，欄位過多則視為解析失敗
        let width = headers.len();
        let mut records = Vec::new();
        for result in reader.records() {
            let mut record = result.map_err(|e| Error::processing(path, e.to_string()))?;
            if record.len() > width {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                return Err(Error::processing(
                    path,
                    format!("第 {} 行有 {} 個欄位，超過標頭的 {} 個欄位", line, record.len(), width),
                ));
            }
            while record.len() < width {
                record.push_field("");
            }
            records.push(record);
        }

        Ok(Table { headers, records })
    }

    fn write(&self, table: &Table, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| Error::processing(path, e.to_string()))?;
        writer
            .write_record(table.headers())
            .map_err(|e| Error::processing(path, e.to_string()))?;
        for record in table.records() {
            writer
                .write_record(record)
                .map_err(|e| Error::processing(path, e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| Error::processing(path, e.to_string()))?;
        Ok(())
    }
}
