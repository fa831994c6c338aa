use std::process;

use zst_to_csv::action::cli::process_args;
use zst_to_csv::models::conversion::RunOutcome;
use zst_to_csv::utils::summary::{render_batch_summary, render_single_summary};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(RunOutcome::Single(output)) => {
            log::info!("程式執行完成，輸出檔案：{}", output.output_path.display());
            println!("{}", render_single_summary(&output));
        }
        Ok(RunOutcome::Batch(report)) => {
            log::info!("程式執行完成，成功 {} 個，失敗 {} 個", report.success, report.failed);
            println!("\n{}", render_batch_summary(&report));
        }
        Err(e) => {
            log::error!("轉換失敗：{}", e);
            process::exit(1);
        }
    }
}
