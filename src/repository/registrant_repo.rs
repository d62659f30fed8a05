// ==========================================
// 社宅活動報名匯入系統 - 報名者 Repository Trait
// ==========================================
// 職責: 定義報名者資料存取介面(不含實作)
// 紅線: Repository 不含業務規則,只做資料 CRUD
// ==========================================

use crate::domain::{NewRegistrant, Registrant};
use async_trait::async_trait;
use std::error::Error;

// ==========================================
// RegistrantRepository Trait
// ==========================================
// 用途: 報名者資料存取(僅等值查詢 + 配發識別碼的插入)
// 實作者: RegistrantRepositoryImpl(使用 rusqlite)
#[async_trait]
pub trait RegistrantRepository: Send + Sync {
    /// 依自然鍵 (姓名, 聯絡電話) 等值查詢
    ///
    /// # 回傳
    /// - Ok(Vec<Registrant>): 所有吻合的報名者(可能多筆,呼叫端取第一筆)
    async fn find_by_name_phone(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Vec<Registrant>, Box<dyn Error>>;

    /// 依電子郵件等值查詢
    async fn find_by_email(&self, email: &str) -> Result<Vec<Registrant>, Box<dyn Error>>;

    /// 依識別碼讀取
    async fn find_by_id(&self, registrant_id: &str)
        -> Result<Option<Registrant>, Box<dyn Error>>;

    /// 插入新報名者,識別碼由儲存層配發
    ///
    /// # 回傳
    /// - Ok(String): 配發的 registrant_id
    async fn insert(&self, new: NewRegistrant) -> Result<String, Box<dyn Error>>;

    /// 統計 registrant 表紀錄數
    async fn count(&self) -> Result<usize, Box<dyn Error>>;
}
