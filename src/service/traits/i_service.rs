use std::path::Path;
use crate::error::Result;
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::service::table::Table;

// File 服務接口，負責探索待轉換的壓縮檔
pub trait FileServiceTrait: Send + Sync {
    /// 收集目錄下符合條件的 .zst 檔案
    /// # 參數
    /// - input: 檔案收集的輸入參數
    /// # 回傳
    /// - 成功時返回排序後的檔案列表與總大小，根目錄無效時返回目錄錯誤
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput>;
}

// 解壓縮服務接口
pub trait DecompressServiceTrait: Send + Sync {
    /// 以串流方式將壓縮檔解壓至指定路徑
    /// # 回傳
    /// - 成功時返回寫入的位元組數；失敗時已刪除部分寫入的輸出檔
    fn decompress(&self, input: &Path, output: &Path) -> Result<u64>;
}

// 表格服務接口，負責 CSV 的讀取與寫出
pub trait TableServiceTrait: Send + Sync {
    fn load(&self, path: &Path) -> Result<Table>;
    fn write(&self, table: &Table, path: &Path) -> Result<()>;
}
