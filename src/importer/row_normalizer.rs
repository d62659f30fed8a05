// ==========================================
// 社宅活動報名匯入系統 - 列正規化器
// ==========================================
// 職責: 原始列 → NormalizedRow(欄位結構表驅動)
// 契約: 正規化定義為永不失敗;缺格為空字串,
//       時間無法解析時以匯入當下時間代入
// ==========================================

use crate::domain::{NormalizedRow, ResidentStatus, SpreadsheetRow};
use crate::importer::schema::{Field, COLUMN_SCHEMA};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub struct RowNormalizer;

impl RowNormalizer {
    /// 將原始列對應為固定欄位集
    ///
    /// 欄位標題完全吻合才取值;缺格或標題不符一律視為空字串
    pub fn normalize(row: &SpreadsheetRow) -> NormalizedRow {
        let get = |field: Field| -> String {
            COLUMN_SCHEMA
                .iter()
                .find(|spec| spec.field == field)
                .and_then(|spec| row.get(spec.header))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let resident_status_text = get(Field::ResidentStatus);
        let resident_status = ResidentStatus::from_phrase(&resident_status_text);
        let submitted_at = Self::parse_submitted_at(&get(Field::SubmittedAt));

        NormalizedRow {
            activity_name: get(Field::ActivityName),
            name: get(Field::Name),
            email: get(Field::Email),
            phone: get(Field::Phone),
            gender: get(Field::Gender),
            age: get(Field::Age),
            line_id: get(Field::LineId),
            children_count: get(Field::ChildrenCount),
            resident_status_text,
            resident_status,
            housing_location: get(Field::HousingLocation),
            sports_experience: get(Field::SportsExperience),
            injury_history: get(Field::InjuryHistory),
            info_source: get(Field::InfoSource),
            suggestions: get(Field::Suggestions),
            content_hash: get(Field::ContentHash),
            submitted_at,
        }
    }

    /// 解析填寫時間;失敗或空值以目前牆鐘時間代入
    ///
    /// 依序嘗試: RFC 3339 / YYYY/MM/DD HH:MM:SS / YYYY-MM-DD HH:MM:SS /
    /// 僅日期(YYYY/MM/DD、YYYY-MM-DD,時間補 00:00:00)
    fn parse_submitted_at(value: &str) -> DateTime<Utc> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Utc::now();
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return dt.with_timezone(&Utc);
        }

        let datetime_formats = ["%Y/%m/%d %H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M"];
        for fmt in datetime_formats {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc);
            }
        }

        let date_formats = ["%Y/%m/%d", "%Y-%m-%d"];
        for fmt in date_formats {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
                if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                    return DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc);
                }
            }
        }

        Utc::now()
    }
}
