// ==========================================
// 社宅活動報名匯入系統 - API 層
// ==========================================
// 職責: 對外業務介面(網路入口/CLI 共用)
// ==========================================

pub mod error;
pub mod import_api;

pub use error::ApiError;
pub use import_api::ImportApi;
