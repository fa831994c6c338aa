use crate::error::Result;
use crate::models::batch::{BatchReport, BatchRequest};
use crate::models::conversion::{ConversionOutput, ConversionRequest};

// Facade 接口，負責協調 ZST 至 CSV 的轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 轉換單一 .zst 檔案
    /// # 參數
    /// - request: 輸入路徑、選用的輸出路徑與是否保留中間檔
    /// # 回傳
    /// - 成功時返回最終 CSV 路徑與資料摘要；中間檔已依設定清除
    fn convert(&self, request: &ConversionRequest) -> Result<ConversionOutput>;

    /// 批次轉換目錄下的所有 .zst 檔案
    /// # 回傳
    /// - 單檔失敗記錄於報告中；僅在根目錄無效時返回錯誤
    fn batch_convert(&self, request: &BatchRequest) -> Result<BatchReport>;
}
