// ==========================================
// 社宅活動報名匯入系統 - 領域模型層
// ==========================================
// 職責: 定義領域實體與類型
// 紅線: 不含資料存取邏輯,不含匯入管線邏輯
// ==========================================

pub mod registration;
pub mod types;

// 重導出核心類型
pub use registration::{
    ImportReport, NewRegistrant, NewRegistrationRecord, NormalizedRow, Registrant,
    RegistrationRecord, SpreadsheetRow,
};
pub use types::{ResidentStatus, RowOutcome, SkipReason};
