// ==========================================
// 社宅活動報名匯入系統 - 重複偵測器
// ==========================================
// 職責: 依內容雜湊查詢報名歷史,任一吻合即為重複提交
// 雜湊由上游表單工具產生;本元件不產生也不驗證其結構
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::repository::RegistrationRepository;

pub struct DuplicateDetector;

impl DuplicateDetector {
    /// 檢查內容雜湊是否已有報名紀錄
    pub async fn is_duplicate<H>(repo: &H, content_hash: &str) -> ImportResult<bool>
    where
        H: RegistrationRepository + ?Sized,
    {
        repo.exists_by_hash(content_hash)
            .await
            .map_err(|e| ImportError::StoreError(e.to_string()))
    }
}
