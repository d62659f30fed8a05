// ==========================================
// 社宅活動報名匯入系統 - 報名紀錄 Repository Trait
// ==========================================
// 職責: 定義報名歷史資料存取介面(不含實作)
// 紅線: Repository 不含業務規則,只做資料 CRUD
// ==========================================

use crate::domain::{NewRegistrationRecord, RegistrationRecord};
use async_trait::async_trait;
use std::error::Error;

// ==========================================
// RegistrationRepository Trait
// ==========================================
// 用途: 報名歷史資料存取(append-mostly)
// 實作者: RegistrationRepositoryImpl(使用 rusqlite)
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// 檢查內容雜湊是否已有報名紀錄(重複偵測用)
    async fn exists_by_hash(&self, content_hash: &str) -> Result<bool, Box<dyn Error>>;

    /// 依內容雜湊等值查詢
    async fn find_by_hash(
        &self,
        content_hash: &str,
    ) -> Result<Vec<RegistrationRecord>, Box<dyn Error>>;

    /// 查詢某報名者的全部報名紀錄
    async fn find_by_registrant(
        &self,
        registrant_id: &str,
    ) -> Result<Vec<RegistrationRecord>, Box<dyn Error>>;

    /// 插入新報名紀錄,識別碼由儲存層配發
    ///
    /// # 回傳
    /// - Ok(String): 配發的 record_id
    async fn insert(&self, new: NewRegistrationRecord) -> Result<String, Box<dyn Error>>;

    /// 統計 registration_history 表紀錄數
    async fn count(&self) -> Result<usize, Box<dyn Error>>;
}
