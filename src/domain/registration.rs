// ==========================================
// 社宅活動報名匯入系統 - 報名領域模型
// ==========================================
// 實體: Registrant(報名者) / RegistrationRecord(報名紀錄)
// 暫態: SpreadsheetRow / NormalizedRow / ImportReport
// ==========================================

use crate::domain::types::ResidentStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 試算表原始列:以原始欄位標題為鍵,值一律轉為字串
///
/// 僅存活於單次匯入流程,不落庫
pub type SpreadsheetRow = HashMap<String, String>;

// ==========================================
// NormalizedRow - 正規化列
// ==========================================
// 用途: 匯入管線中間產物(解碼 → 欄位對應 → 此結構)
// 除報名時間與身分別分類外,所有欄位皆為字串;缺格為空字串
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub activity_name: String,        // 活動名稱
    pub name: String,                 // 姓名
    pub email: String,                // 電子郵件
    pub phone: String,                // 聯絡電話
    pub gender: String,               // 性別
    pub age: String,                  // 年齡
    pub line_id: String,              // LINE ID
    pub children_count: String,       // 陪同子女人數
    pub resident_status_text: String, // 身分別(原始片語,供完整性檢核)
    pub resident_status: ResidentStatus, // 身分別(受控詞彙轉換結果)
    pub housing_location: String,     // 居住地區
    pub sports_experience: String,    // 運動經驗
    pub injury_history: String,       // 傷病史
    pub info_source: String,          // 得知活動管道
    pub suggestions: String,          // 建議事項
    pub content_hash: String,         // 內容雜湊(上游表單工具產生)
    pub submitted_at: DateTime<Utc>,  // 填寫時間(無法解析時以匯入當下時間代入)
}

// ==========================================
// Registrant - 報名者
// ==========================================
// 自然鍵: (姓名, 聯絡電話),由 RegistrantResolver 查詢後建立
// 本管線只建立、不更新、不刪除
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registrant {
    pub registrant_id: String, // 儲存層配發的識別碼(UUID)
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub age: String,
    pub line_id: String,
    pub resident_status: ResidentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>, // 僅於建立時設定,本核心無後續更新路徑
}

/// 建立報名者所需欄位(識別碼與時間戳由儲存層填入)
#[derive(Debug, Clone)]
pub struct NewRegistrant {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub age: String,
    pub line_id: String,
    pub resident_status: ResidentStatus,
}

// ==========================================
// RegistrationRecord - 報名紀錄
// ==========================================
// 自然鍵: content_hash,一個雜湊至多一筆(盡力而為,見 DESIGN.md)
// 落庫後不可變
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub record_id: String,
    pub registrant_id: String, // 關聯 Registrant
    pub content_hash: String,
    pub activity_name: String,

    // ===== 報名當下的反正規化欄位 =====
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub resident_status: ResidentStatus,

    // ===== 選填欄位(空值以「未填寫」標記落庫)=====
    pub age: String,
    pub line_id: String,
    pub children_count: String,
    pub housing_location: String,
    pub sports_experience: String,
    pub injury_history: String,
    pub info_source: String,
    pub suggestions: String,

    pub submitted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// 建立報名紀錄所需欄位(識別碼與 created_at 由儲存層填入)
#[derive(Debug, Clone)]
pub struct NewRegistrationRecord {
    pub registrant_id: String,
    pub content_hash: String,
    pub activity_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub resident_status: ResidentStatus,
    pub age: String,
    pub line_id: String,
    pub children_count: String,
    pub housing_location: String,
    pub sports_experience: String,
    pub injury_history: String,
    pub info_source: String,
    pub suggestions: String,
    pub submitted_at: DateTime<Utc>,
}

// ==========================================
// ImportReport - 匯入結果報告
// ==========================================
// 三個計數器之和恆等於解碼出的資料列數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub success: bool,
    pub message: String,
    pub processed_count: usize,
    pub skipped_count: usize,
    pub duplicate_count: usize,
}

impl ImportReport {
    /// 解碼失敗時的單一失敗報告(無部分計數)
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            processed_count: 0,
            skipped_count: 0,
            duplicate_count: 0,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.processed_count + self.skipped_count + self.duplicate_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_camel_case() {
        let report = ImportReport {
            success: true,
            message: "成功匯入 2 筆報名資料".to_string(),
            processed_count: 2,
            skipped_count: 0,
            duplicate_count: 1,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["processedCount"], 2);
        assert_eq!(json["skippedCount"], 0);
        assert_eq!(json["duplicateCount"], 1);
        assert_eq!(json["success"], true);
    }

    #[test]
    fn test_failure_report_has_zero_counts() {
        let report = ImportReport::failure("檔案解析失敗");
        assert!(!report.success);
        assert_eq!(report.total_rows(), 0);
    }
}
