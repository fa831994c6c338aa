use std::path::Path;
use crate::models::batch::BatchReport;
use crate::models::conversion::ConversionOutput;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn render_single_summary(output: &ConversionOutput) -> String {
    let (rows, columns) = output.summary.shape();
    let mut lines = vec![
        "✅ 轉換完成！".to_string(),
        format!("📄 輸出檔案：{}", output.output_path.display()),
        format!("📊 檔案大小：{:.2} MB", output.file_size as f64 / BYTES_PER_MB),
        format!("資料形狀：{} 列 × {} 欄", rows, columns),
    ];
    if !output.summary.matches_ohlcv() {
        lines.push("⚠️ 欄位與 OHLCV-1m 結構不符".to_string());
    }
    lines.join("\n")
}

pub fn render_batch_summary(report: &BatchReport) -> String {
    let mut lines = vec![
        "📊 批次轉換摘要：".to_string(),
        format!("處理檔案總數：{}", report.total()),
        format!("✅ 成功轉換：{}", report.success),
        format!("❌ 轉換失敗：{}", report.failed),
    ];

    if report.failed > 0 {
        lines.push(String::new());
        lines.push("❌ 失敗檔案：".to_string());
        for result in report.failures() {
            lines.push(format!(
                "  - {}: {}",
                file_name(&result.input),
                result.error.as_deref().unwrap_or("未知錯誤")
            ));
        }
    }

    if report.success > 0 {
        lines.push(String::new());
        lines.push("✅ 成功轉換的檔案：".to_string());
        for result in report.successes() {
            let output = result
                .output
                .as_deref()
                .map(file_name)
                .unwrap_or_default();
            lines.push(format!("  - {} → {}", file_name(&result.input), output));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::conversion::ConversionResult;
    use crate::models::table::TableSummary;
    use std::path::PathBuf;

    #[test]
    fn test_batch_summary_lists_failures_and_mappings() {
        let mut report = BatchReport::default();
        report.record(ConversionResult::success(
            Path::new("raw/a.csv.zst"),
            Path::new("processed/a.csv"),
        ));
        report.record(ConversionResult::failed(
            Path::new("raw/b.csv.zst"),
            &Error::processing("raw/b.csv", "欄位數不一致"),
        ));

        let text = render_batch_summary(&report);

        assert!(text.contains("處理檔案總數：2"));
        assert!(text.contains("✅ 成功轉換：1"));
        assert!(text.contains("❌ 轉換失敗：1"));
        assert!(text.contains("  - b.csv.zst: "));
        assert!(text.contains("欄位數不一致"));
        assert!(text.contains("  - a.csv.zst → a.csv"));
    }

    #[test]
    fn test_empty_batch_summary_has_only_counts() {
        let text = render_batch_summary(&BatchReport::default());
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("處理檔案總數：0"));
    }

    #[test]
    fn test_single_summary() {
        let output = ConversionOutput {
            output_path: PathBuf::from("data/x.csv"),
            summary: TableSummary {
                rows: 3,
                columns: vec!["a".to_string(), "b".to_string()],
                preview: vec![],
            },
            file_size: 2048,
        };
        let text = render_single_summary(&output);
        assert!(text.contains("data/x.csv"));
        assert!(text.contains("📊 檔案大小：0.00 MB"));
        assert!(text.contains("3 列 × 2 欄"));
        assert!(text.contains("OHLCV-1m"));
    }

    #[test]
    fn test_single_summary_reports_megabytes() {
        let output = ConversionOutput {
            output_path: PathBuf::from("data/x.csv"),
            summary: TableSummary {
                rows: 1,
                columns: vec!["a".to_string()],
                preview: vec![],
            },
            file_size: 5 * 1024 * 1024 + 512 * 1024,
        };
        let text = render_single_summary(&output);
        assert!(text.contains("📊 檔案大小：5.50 MB"));
        assert!(!text.contains("KB"));
    }
}
