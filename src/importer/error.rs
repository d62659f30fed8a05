// ==========================================
// 社宅活動報名匯入系統 - 匯入模組錯誤類型
// ==========================================
// 工具: thiserror 派生宏
// 傳播策略: 只有解碼失敗中止整批;其餘錯誤在列邊界吸收
// ==========================================

use thiserror::Error;

/// 匯入模組錯誤類型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 解碼錯誤(整批致命)=====
    #[error("檔案不存在: {0}")]
    FileNotFound(String),

    #[error("檔案格式不支援: {0}(僅支援 .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("Excel 解析失敗: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失敗: {0}")]
    CsvParseError(String),

    #[error("上傳內容 base64 解碼失敗: {0}")]
    PayloadDecodeError(String),

    #[error("檔案讀取失敗: {0}")]
    IoError(String),

    // ===== 單列錯誤(列邊界吸收,計入略過)=====
    #[error("儲存層操作失敗: {0}")]
    StoreError(String),

    // ===== 通用錯誤 =====
    #[error("內部錯誤: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportError {
    /// 是否為整批致命的解碼錯誤(其餘錯誤僅影響單列)
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ImportError::FileNotFound(_)
                | ImportError::UnsupportedFormat(_)
                | ImportError::ExcelParseError(_)
                | ImportError::CsvParseError(_)
                | ImportError::PayloadDecodeError(_)
                | ImportError::IoError(_)
        )
    }
}

// 實作 From<std::io::Error>
// 僅 NotFound 對應到 FileNotFound,其餘(如權限不足)保留 IO 錯誤語意
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ImportError::FileNotFound(err.to_string()),
            _ => ImportError::IoError(err.to_string()),
        }
    }
}

// 實作 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 實作 From<calamine::XlsxError>
impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 類型別名
pub type ImportResult<T> = Result<T, ImportError>;
