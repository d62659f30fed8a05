// ==========================================
// 社宅活動報名匯入系統 - 核心庫
// ==========================================
// 技術棧: Rust + SQLite
// 系統定位: 報名資料對帳匯入(可重複上傳,不產生重複紀錄)
// ==========================================

// ==========================================
// 模組宣告
// ==========================================

// 領域層 - 實體與類型
pub mod domain;

// 資料儲存層 - 資料存取
pub mod repository;

// 匯入層 - 列對帳管線
pub mod importer;

// 資料庫基礎設施(連線初始化/PRAGMA/資料表)
pub mod db;

// 日誌系統
pub mod logging;

// API 層 - 業務介面
pub mod api;

// ==========================================
// 重導出核心類型
// ==========================================

// 領域類型
pub use domain::{
    ImportReport, NormalizedRow, Registrant, RegistrationRecord, ResidentStatus, RowOutcome,
    SkipReason, SpreadsheetRow,
};

// 匯入管線
pub use importer::{ImportError, SheetDecoder, SignupImporter};

// 儲存介面
pub use repository::{
    RegistrantRepository, RegistrantRepositoryImpl, RegistrationRepository,
    RegistrationRepositoryImpl,
};

// API
pub use api::ImportApi;

// ==========================================
// 常量定義
// ==========================================

// 系統版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系統名稱
pub const APP_NAME: &str = "社宅活動報名匯入系統";
