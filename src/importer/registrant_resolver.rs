// ==========================================
// 社宅活動報名匯入系統 - 報名者解析器
// ==========================================
// 職責: 依自然鍵 (姓名, 聯絡電話) 先查後建
// 注意: 查詢與插入之間無原子性保證(見 DESIGN.md)
// ==========================================

use crate::domain::{NewRegistrant, NormalizedRow};
use crate::importer::error::{ImportError, ImportResult};
use crate::repository::RegistrantRepository;
use tracing::debug;

pub struct RegistrantResolver;

impl RegistrantResolver {
    /// 解析或建立報名者,回傳 registrant_id
    ///
    /// 多筆吻合時沿用第一筆,不做消歧
    pub async fn resolve_or_create<R>(repo: &R, row: &NormalizedRow) -> ImportResult<String>
    where
        R: RegistrantRepository + ?Sized,
    {
        let existing = repo
            .find_by_name_phone(&row.name, &row.phone)
            .await
            .map_err(|e| ImportError::StoreError(e.to_string()))?;

        if let Some(registrant) = existing.first() {
            debug!(
                registrant_id = %registrant.registrant_id,
                name = %row.name,
                "沿用既有報名者"
            );
            return Ok(registrant.registrant_id.clone());
        }

        let registrant_id = repo
            .insert(NewRegistrant {
                name: row.name.clone(),
                email: row.email.clone(),
                phone: row.phone.clone(),
                gender: row.gender.clone(),
                age: row.age.clone(),
                line_id: row.line_id.clone(),
                resident_status: row.resident_status,
            })
            .await
            .map_err(|e| ImportError::StoreError(e.to_string()))?;

        debug!(registrant_id = %registrant_id, name = %row.name, "建立新報名者");
        Ok(registrant_id)
    }
}
