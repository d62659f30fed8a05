// ==========================================
// 社宅活動報名匯入系統 - 報名紀錄寫入器
// ==========================================
// 職責: 建構並落庫 RegistrationRecord
// 反正規化報名當下的身分欄位;選填欄位空值以「未填寫」標記
// ==========================================

use crate::domain::{NewRegistrationRecord, NormalizedRow};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::schema::NOT_PROVIDED_MARKER;
use crate::repository::RegistrationRepository;

pub struct RecordWriter;

impl RecordWriter {
    /// 寫入一筆報名紀錄,回傳 record_id
    pub async fn write<H>(
        repo: &H,
        row: &NormalizedRow,
        registrant_id: &str,
    ) -> ImportResult<String>
    where
        H: RegistrationRepository + ?Sized,
    {
        repo.insert(Self::build_record(row, registrant_id))
            .await
            .map_err(|e| ImportError::StoreError(e.to_string()))
    }

    /// 由正規化列建構落庫紀錄
    pub fn build_record(row: &NormalizedRow, registrant_id: &str) -> NewRegistrationRecord {
        NewRegistrationRecord {
            registrant_id: registrant_id.to_string(),
            content_hash: row.content_hash.clone(),
            activity_name: row.activity_name.clone(),

            // 身分欄位直接反正規化,不套用標記
            name: row.name.clone(),
            email: row.email.clone(),
            phone: row.phone.clone(),
            gender: row.gender.clone(),
            resident_status: row.resident_status,

            // 選填欄位:區分「未提供」與空字串
            age: or_marker(&row.age),
            line_id: or_marker(&row.line_id),
            children_count: or_marker(&row.children_count),
            housing_location: or_marker(&row.housing_location),
            sports_experience: or_marker(&row.sports_experience),
            injury_history: or_marker(&row.injury_history),
            info_source: or_marker(&row.info_source),
            suggestions: or_marker(&row.suggestions),

            submitted_at: row.submitted_at,
        }
    }
}

fn or_marker(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_PROVIDED_MARKER.to_string()
    } else {
        value.to_string()
    }
}
