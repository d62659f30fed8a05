// ==========================================
// 社宅活動報名匯入系統 - 報名紀錄 Repository 實作
// ==========================================
// 實作: rusqlite + Arc<Mutex<Connection>>
// ==========================================

use crate::db::open_and_init;
use crate::domain::{NewRegistrationRecord, RegistrationRecord, ResidentStatus};
use crate::repository::registration_repo::RegistrationRepository;
use crate::repository::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ==========================================
// RegistrationRepositoryImpl
// ==========================================
pub struct RegistrationRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl RegistrationRepositoryImpl {
    /// 建立新的 Repository 實例
    ///
    /// # 參數
    /// - db_path: 資料庫檔案路徑
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_and_init(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 共用既有連線(與報名者 Repository 共用同一個資料庫)
    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<RegistrationRecord> {
        let status_raw: String = row.get("resident_status")?;
        Ok(RegistrationRecord {
            record_id: row.get("record_id")?,
            registrant_id: row.get("registrant_id")?,
            content_hash: row.get("content_hash")?,
            activity_name: row.get("activity_name")?,
            name: row.get("name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            gender: row.get("gender")?,
            resident_status: ResidentStatus::from_db_str(&status_raw),
            age: row.get("age")?,
            line_id: row.get("line_id")?,
            children_count: row.get("children_count")?,
            housing_location: row.get("housing_location")?,
            sports_experience: row.get("sports_experience")?,
            injury_history: row.get("injury_history")?,
            info_source: row.get("info_source")?,
            suggestions: row.get("suggestions")?,
            submitted_at: row.get::<_, DateTime<Utc>>("submitted_at")?,
            created_at: row.get::<_, DateTime<Utc>>("created_at")?,
        })
    }

    fn lock_conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>, RepositoryError> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

const SELECT_COLUMNS: &str = "record_id, registrant_id, content_hash, activity_name, name, \
     email, phone, gender, resident_status, age, line_id, children_count, housing_location, \
     sports_experience, injury_history, info_source, suggestions, submitted_at, created_at";

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryImpl {
    async fn exists_by_hash(&self, content_hash: &str) -> Result<bool, Box<dyn Error>> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM registration_history WHERE content_hash = ?1",
            params![content_hash],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    async fn find_by_hash(
        &self,
        content_hash: &str,
    ) -> Result<Vec<RegistrationRecord>, Box<dyn Error>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM registration_history WHERE content_hash = ?1 \
             ORDER BY created_at"
        ))?;
        let rows = stmt
            .query_map(params![content_hash], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    async fn find_by_registrant(
        &self,
        registrant_id: &str,
    ) -> Result<Vec<RegistrationRecord>, Box<dyn Error>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM registration_history WHERE registrant_id = ?1 \
             ORDER BY created_at"
        ))?;
        let rows = stmt
            .query_map(params![registrant_id], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    async fn insert(&self, new: NewRegistrationRecord) -> Result<String, Box<dyn Error>> {
        let record_id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO registration_history (
                record_id, registrant_id, content_hash, activity_name,
                name, email, phone, gender, resident_status,
                age, line_id, children_count, housing_location,
                sports_experience, injury_history, info_source, suggestions,
                submitted_at, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19
            )
            "#,
            params![
                record_id,
                new.registrant_id,
                new.content_hash,
                new.activity_name,
                new.name,
                new.email,
                new.phone,
                new.gender,
                new.resident_status.as_db_str(),
                new.age,
                new.line_id,
                new.children_count,
                new.housing_location,
                new.sports_experience,
                new.injury_history,
                new.info_source,
                new.suggestions,
                new.submitted_at,
                now,
            ],
        )?;

        Ok(record_id)
    }

    async fn count(&self) -> Result<usize, Box<dyn Error>> {
        let conn = self.lock_conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM registration_history", [], |row| {
                row.get(0)
            })?;
        Ok(count as usize)
    }
}
