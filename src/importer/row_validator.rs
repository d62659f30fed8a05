// ==========================================
// 社宅活動報名匯入系統 - 列驗證器
// ==========================================
// 契約: 全有或全無 - 十五個必填欄位任一為空即整列略過
// 與正規化共用同一張欄位結構表
// ==========================================

use crate::domain::NormalizedRow;
use crate::importer::schema::{Field, COLUMN_SCHEMA};

pub struct RowValidator;

impl RowValidator {
    /// 完整性檢核
    ///
    /// # 回傳
    /// - Ok(()): 全部必填欄位非空
    /// - Err(Vec<String>): 缺漏欄位的原始標題清單(依結構表順序)
    pub fn validate(row: &NormalizedRow) -> Result<(), Vec<String>> {
        let missing: Vec<String> = COLUMN_SCHEMA
            .iter()
            .filter(|spec| spec.required && Self::field_value(row, spec.field).is_empty())
            .map(|spec| spec.header.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    // 身分別以原始片語檢核:空字串經詞彙轉換會落入 Other,
    // 但「未填寫」仍應視為缺漏
    fn field_value(row: &NormalizedRow, field: Field) -> &str {
        match field {
            Field::ActivityName => &row.activity_name,
            Field::Name => &row.name,
            Field::Email => &row.email,
            Field::Phone => &row.phone,
            Field::Gender => &row.gender,
            Field::Age => &row.age,
            Field::LineId => &row.line_id,
            Field::ChildrenCount => &row.children_count,
            Field::ResidentStatus => &row.resident_status_text,
            Field::HousingLocation => &row.housing_location,
            Field::SportsExperience => &row.sports_experience,
            Field::InjuryHistory => &row.injury_history,
            Field::InfoSource => &row.info_source,
            Field::Suggestions => &row.suggestions,
            Field::ContentHash => &row.content_hash,
            Field::SubmittedAt => "",
        }
    }
}
