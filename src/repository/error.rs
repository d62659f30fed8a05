// ==========================================
// 社宅活動報名匯入系統 - 儲存層錯誤類型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 儲存層錯誤類型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 資料庫錯誤 =====
    #[error("紀錄未找到: {entity} id={id}")]
    NotFound { entity: String, id: String },

    #[error("資料庫連線失敗: {0}")]
    DatabaseConnectionError(String),

    #[error("資料庫鎖取得失敗: {0}")]
    LockError(String),

    #[error("資料庫查詢失敗: {0}")]
    DatabaseQueryError(String),

    #[error("外鍵約束違反: {0}")]
    ForeignKeyViolation(String),

    // ===== 通用錯誤 =====
    #[error("內部錯誤: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 實作 From<rusqlite::Error>
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("FOREIGN KEY") => {
                RepositoryError::ForeignKeyViolation(msg)
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result 類型別名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
