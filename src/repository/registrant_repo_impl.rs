// ==========================================
// 社宅活動報名匯入系統 - 報名者 Repository 實作
// ==========================================
// 實作: rusqlite + Arc<Mutex<Connection>>
// ==========================================

use crate::db::open_and_init;
use crate::domain::{NewRegistrant, Registrant, ResidentStatus};
use crate::repository::registrant_repo::RegistrantRepository;
use crate::repository::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ==========================================
// RegistrantRepositoryImpl
// ==========================================
pub struct RegistrantRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl RegistrantRepositoryImpl {
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

    /// 共用既有連線(與報名紀錄 Repository 共用同一個資料庫)
    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn row_to_registrant(row: &Row<'_>) -> rusqlite::Result<Registrant> {
        let status_raw: String = row.get("resident_status")?;
        Ok(Registrant {
            registrant_id: row.get("registrant_id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            gender: row.get("gender")?,
            age: row.get("age")?,
            line_id: row.get("line_id")?,
            resident_status: ResidentStatus::from_db_str(&status_raw),
            created_at: row.get::<_, DateTime<Utc>>("created_at")?,
            updated_at: row.get::<_, DateTime<Utc>>("updated_at")?,
        })
    }

    fn lock_conn(&self) -> Result<std::sync::MutexGuard<'_, Connection>, RepositoryError> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

const SELECT_COLUMNS: &str = "registrant_id, name, email, phone, gender, age, line_id, \
     resident_status, created_at, updated_at";

#[async_trait]
impl RegistrantRepository for RegistrantRepositoryImpl {
    async fn find_by_name_phone(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Vec<Registrant>, Box<dyn Error>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM registrant WHERE name = ?1 AND phone = ?2 \
             ORDER BY created_at"
        ))?;
        let rows = stmt
            .query_map(params![name, phone], Self::row_to_registrant)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<Registrant>, Box<dyn Error>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM registrant WHERE email = ?1 ORDER BY created_at"
        ))?;
        let rows = stmt
            .query_map(params![email], Self::row_to_registrant)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    async fn find_by_id(
        &self,
        registrant_id: &str,
    ) -> Result<Option<Registrant>, Box<dyn Error>> {
        use rusqlite::OptionalExtension;

        let conn = self.lock_conn()?;
        let registrant = conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM registrant WHERE registrant_id = ?1"),
                params![registrant_id],
                Self::row_to_registrant,
            )
            .optional()?;
        Ok(registrant)
    }

    async fn insert(&self, new: NewRegistrant) -> Result<String, Box<dyn Error>> {
        let registrant_id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO registrant (
                registrant_id, name, email, phone, gender, age, line_id,
                resident_status, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                registrant_id,
                new.name,
                new.email,
                new.phone,
                new.gender,
                new.age,
                new.line_id,
                new.resident_status.as_db_str(),
                now,
                now,
            ],
        )?;

        Ok(registrant_id)
    }

    async fn count(&self) -> Result<usize, Box<dyn Error>> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM registrant", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
