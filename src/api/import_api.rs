// ==========================================
// 報名匯入 API
// ==========================================
// 職責: 封裝上傳匯入功能,供網路入口呼叫
// 契約: 呼叫端必定拿到報告;僅解碼失敗回傳 success=false
// ==========================================

use crate::api::error::ApiError;
use crate::db::open_and_init;
use crate::domain::ImportReport;
use crate::importer::{ImportError, SignupImporter};
use crate::repository::{RegistrantRepositoryImpl, RegistrationRepositoryImpl};
use base64::{engine::general_purpose, Engine as _};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// 報名匯入 API
pub struct ImportApi {
    db_path: String,
}

impl ImportApi {
    /// 建立新的 ImportApi 實例
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }

    /// 匯入報名試算表
    ///
    /// # 參數
    /// - payload_base64: xlsx 內容的 base64 編碼文字
    /// - file_name: 顯示用檔名(選填,僅用於日誌)
    ///
    /// # 回傳
    /// - Ok(ImportReport): 匯入結果;base64 或試算表解碼失敗時
    ///   為單一失敗報告(success=false,計數全零)
    /// - Err(ApiError): 儲存層初始化失敗
    pub async fn import_signups(
        &self,
        payload_base64: &str,
        file_name: Option<&str>,
    ) -> Result<ImportReport, ApiError> {
        let display_name = file_name.unwrap_or("(未命名)");
        info!(file_name = %display_name, "收到報名匯入請求");

        let payload = match general_purpose::STANDARD.decode(payload_base64.trim()) {
            Ok(bytes) => bytes,
            Err(e) => {
                let err = ImportError::PayloadDecodeError(e.to_string());
                warn!(file_name = %display_name, error = %err, "上傳內容 base64 解碼失敗");
                return Ok(ImportReport::failure(err.to_string()));
            }
        };

        let importer = self
            .create_importer()
            .map_err(|e| ApiError::DatabaseError(format!("建立匯入器失敗: {}", e)))?;

        match importer.import_xlsx_bytes(&payload).await {
            Ok(report) => Ok(report),
            // 解碼失敗對整批致命:單一失敗報告,無部分計數
            Err(e) if e.is_fatal() => {
                warn!(file_name = %display_name, error = %e, "試算表解碼失敗");
                Ok(ImportReport::failure(format!("檔案解析失敗: {}", e)))
            }
            Err(e) => Err(ApiError::ImportError(e.to_string())),
        }
    }

    /// 建立 SignupImporter 實例
    ///
    /// 兩個 Repository 共用同一條連線(同一個資料庫檔案)
    fn create_importer(
        &self,
    ) -> Result<
        SignupImporter<RegistrantRepositoryImpl, RegistrationRepositoryImpl>,
        Box<dyn std::error::Error>,
    > {
        let conn = Arc::new(Mutex::new(open_and_init(&self.db_path)?));
        let registrant_repo = RegistrantRepositoryImpl::with_connection(Arc::clone(&conn));
        let registration_repo = RegistrationRepositoryImpl::with_connection(conn);
        Ok(SignupImporter::new(registrant_repo, registration_repo))
    }
}
