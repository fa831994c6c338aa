/// 下游資料庫載入時預期的 OHLCV-1m 欄位順序
pub const OHLCV_COLUMNS: [&str; 10] = [
    "ts_event",
    "rtype",
    "publisher_id",
    "instrument_id",
    "open",
    "high",
    "low",
    "close",
    "volume",
    "symbol",
];

pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub rows: usize,
    pub columns: Vec<String>,
    pub preview: Vec<Vec<String>>,
}

impl TableSummary {
    /// (列數, 欄數)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns.len())
    }

    pub fn matches_ohlcv(&self) -> bool {
        self.columns.len() == OHLCV_COLUMNS.len()
            && self
                .columns
                .iter()
                .zip(OHLCV_COLUMNS.iter())
                .all(|(actual, expected)| actual.trim() == *expected)
    }

    // 以固定欄寬輸出表頭與前幾列，供日誌檢視
    pub fn render_preview(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.preview {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let format_row = |cells: &[String]| -> String {
            cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let width = widths.get(i).copied().unwrap_or(0);
                    format!("{:<width$}", cell, width = width)
                })
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![format_row(self.columns.as_slice())];
        lines.extend(self.preview.iter().map(|row| format_row(row.as_slice())));
        lines.join("\n")
    }
}
