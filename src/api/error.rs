// ==========================================
// 社宅活動報名匯入系統 - API 層錯誤類型
// ==========================================
// 職責: 將儲存層/匯入層錯誤轉為呼叫端可讀的錯誤訊息
// ==========================================

use thiserror::Error;

/// API 層錯誤類型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("無效輸入: {0}")]
    InvalidInput(String),

    #[error("匯入失敗: {0}")]
    ImportError(String),

    #[error("資料庫錯誤: {0}")]
    DatabaseError(String),

    #[error("內部錯誤: {0}")]
    InternalError(String),
}
