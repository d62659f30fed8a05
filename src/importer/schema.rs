// ==========================================
// 社宅活動報名匯入系統 - 欄位結構表
// ==========================================
// 與上游表單匯出工具的欄位契約:固定中文欄位標題
// 同一張表同時驅動欄位對應與完整性檢核;
// 更換語言/欄位組合時只需替換此表
// ==========================================

/// 正規化欄位識別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ActivityName,
    Name,
    Email,
    Phone,
    Gender,
    Age,
    LineId,
    ChildrenCount,
    ResidentStatus,
    HousingLocation,
    SportsExperience,
    InjuryHistory,
    InfoSource,
    Suggestions,
    ContentHash,
    SubmittedAt,
}

/// 欄位規格: (原始欄位標題, 欄位, 是否必填)
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub field: Field,
    pub required: bool,
}

/// 靜態欄位結構表(依表單欄位順序)
///
/// 填寫時間不列為必填:空值或無法解析時以匯入當下時間代入
pub const COLUMN_SCHEMA: &[ColumnSpec] = &[
    ColumnSpec { header: "活動名稱", field: Field::ActivityName, required: true },
    ColumnSpec { header: "姓名", field: Field::Name, required: true },
    ColumnSpec { header: "電子郵件", field: Field::Email, required: true },
    ColumnSpec { header: "聯絡電話", field: Field::Phone, required: true },
    ColumnSpec { header: "性別", field: Field::Gender, required: true },
    ColumnSpec { header: "年齡", field: Field::Age, required: true },
    ColumnSpec { header: "LINE ID", field: Field::LineId, required: true },
    ColumnSpec { header: "陪同子女人數", field: Field::ChildrenCount, required: true },
    ColumnSpec { header: "身分別", field: Field::ResidentStatus, required: true },
    ColumnSpec { header: "居住地區", field: Field::HousingLocation, required: true },
    ColumnSpec { header: "運動經驗", field: Field::SportsExperience, required: true },
    ColumnSpec { header: "傷病史", field: Field::InjuryHistory, required: true },
    ColumnSpec { header: "得知活動管道", field: Field::InfoSource, required: true },
    ColumnSpec { header: "建議事項", field: Field::Suggestions, required: true },
    ColumnSpec { header: "Hash", field: Field::ContentHash, required: true },
    ColumnSpec { header: "填寫時間", field: Field::SubmittedAt, required: false },
];

/// 選填欄位落庫時的「未提供」標記
///
/// 區分「未提供」與「提供了空值」,供下游報表使用
pub const NOT_PROVIDED_MARKER: &str = "未填寫";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schema_has_fifteen_required_columns() {
        let required = COLUMN_SCHEMA.iter().filter(|c| c.required).count();
        assert_eq!(required, 15);
    }

    #[test]
    fn test_schema_headers_are_unique() {
        let headers: HashSet<_> = COLUMN_SCHEMA.iter().map(|c| c.header).collect();
        assert_eq!(headers.len(), COLUMN_SCHEMA.len());
    }

    #[test]
    fn test_submitted_at_is_optional() {
        let spec = COLUMN_SCHEMA
            .iter()
            .find(|c| c.field == Field::SubmittedAt)
            .unwrap();
        assert!(!spec.required);
        assert_eq!(spec.header, "填寫時間");
    }
}
