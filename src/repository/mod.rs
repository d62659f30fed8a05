// ==========================================
// 社宅活動報名匯入系統 - 資料儲存層
// ==========================================
// 職責: 提供資料存取介面,遮蔽資料庫細節
// 約束: 所有查詢使用參數化,防止 SQL 注入
// 紅線: Repository 不含業務邏輯
// ==========================================

pub mod error;
pub mod registrant_repo;
pub mod registrant_repo_impl;
pub mod registration_repo;
pub mod registration_repo_impl;

// 重導出核心儲存介面
pub use error::{RepositoryError, RepositoryResult};
pub use registrant_repo::RegistrantRepository;
pub use registrant_repo_impl::RegistrantRepositoryImpl;
pub use registration_repo::RegistrationRepository;
pub use registration_repo_impl::RegistrationRepositoryImpl;
