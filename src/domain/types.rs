// ==========================================
// 社宅活動報名匯入系統 - 領域類型定義
// ==========================================
// 身分別為封閉枚舉,未知詞彙一律落入 Other
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 身分別 (Resident Status)
// ==========================================
// 表單「身分別」欄位的受控詞彙,對應社宅社群關係
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResidentStatus {
    SocialHousingTenant, // 社會住宅住戶
    NearbyResident,      // 周邊社區居民
    Waitlisted,          // 社宅候補戶
    Other,               // 未知/未填寫
}

impl ResidentStatus {
    /// 受控詞彙轉換:完全吻合的片語才會對應到已知分類
    ///
    /// 任何其他輸入(含空字串)一律回傳 Other
    pub fn from_phrase(phrase: &str) -> Self {
        match phrase.trim() {
            "社會住宅住戶" => ResidentStatus::SocialHousingTenant,
            "周邊社區居民" => ResidentStatus::NearbyResident,
            "社宅候補戶" => ResidentStatus::Waitlisted,
            _ => ResidentStatus::Other,
        }
    }

    /// 資料庫儲存格式(與 serde 序列化一致)
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ResidentStatus::SocialHousingTenant => "SOCIAL_HOUSING_TENANT",
            ResidentStatus::NearbyResident => "NEARBY_RESIDENT",
            ResidentStatus::Waitlisted => "WAITLISTED",
            ResidentStatus::Other => "OTHER",
        }
    }

    /// 資料庫讀取:未知字串降級為 Other,不視為錯誤
    pub fn from_db_str(raw: &str) -> Self {
        match raw {
            "SOCIAL_HOUSING_TENANT" => ResidentStatus::SocialHousingTenant,
            "NEARBY_RESIDENT" => ResidentStatus::NearbyResident,
            "WAITLISTED" => ResidentStatus::Waitlisted,
            _ => ResidentStatus::Other,
        }
    }
}

impl fmt::Display for ResidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}

// ==========================================
// 略過原因 (Skip Reason)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// 必填欄位缺漏(整列全有或全無,不做部分匯入)
    Incomplete { missing_fields: Vec<String> },
    /// 單列處理過程發生例外(含資料庫暫時不可用)
    RowError { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Incomplete { missing_fields } => {
                write!(f, "欄位不完整: {}", missing_fields.join("、"))
            }
            SkipReason::RowError { message } => write!(f, "處理失敗: {}", message),
        }
    }
}

// ==========================================
// 單列處理結果 (Row Outcome)
// ==========================================
// 每列恰好產生一個結果,由 ImportAggregator 歸約為三個計數器
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowOutcome {
    /// 已建立報名紀錄
    Processed,
    /// 已略過(驗證不通過或單列失敗)
    Skipped(SkipReason),
    /// 內容雜湊已存在,視為重複提交
    Duplicate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resident_status_known_phrases() {
        assert_eq!(
            ResidentStatus::from_phrase("社會住宅住戶"),
            ResidentStatus::SocialHousingTenant
        );
        assert_eq!(
            ResidentStatus::from_phrase("周邊社區居民"),
            ResidentStatus::NearbyResident
        );
        assert_eq!(
            ResidentStatus::from_phrase("社宅候補戶"),
            ResidentStatus::Waitlisted
        );
    }

    #[test]
    fn test_resident_status_unknown_falls_back_to_other() {
        assert_eq!(ResidentStatus::from_phrase("路過民眾"), ResidentStatus::Other);
        assert_eq!(ResidentStatus::from_phrase(""), ResidentStatus::Other);
    }

    #[test]
    fn test_resident_status_trims_before_match() {
        assert_eq!(
            ResidentStatus::from_phrase("  社會住宅住戶  "),
            ResidentStatus::SocialHousingTenant
        );
    }

    #[test]
    fn test_resident_status_db_roundtrip() {
        for status in [
            ResidentStatus::SocialHousingTenant,
            ResidentStatus::NearbyResident,
            ResidentStatus::Waitlisted,
            ResidentStatus::Other,
        ] {
            assert_eq!(ResidentStatus::from_db_str(status.as_db_str()), status);
        }
    }
}
