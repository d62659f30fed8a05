// ==========================================
// 社宅活動報名匯入系統 - SQLite 連線初始化
// ==========================================
// 目標:
// - 統一所有 Connection::open 的 PRAGMA 行為
// - 統一 busy_timeout,減少並發寫入時的偶發 busy 錯誤
// - 建立報名資料表(冪等,可重複執行)
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 預設 busy_timeout(毫秒)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 連線的統一 PRAGMA
///
/// 說明:
/// - foreign_keys 需要「每個連線」單獨開啟
/// - busy_timeout 需要「每個連線」單獨配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 開啟 SQLite 連線並套用統一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 建立報名資料表結構(IF NOT EXISTS,冪等)
///
/// 自然鍵 (name, phone) 與 content_hash 僅建立一般索引:
/// 唯一性由匯入管線「先查後寫」維持,非儲存層約束
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS registrant (
            registrant_id   TEXT PRIMARY KEY,
            name            TEXT NOT NULL,
            email           TEXT NOT NULL,
            phone           TEXT NOT NULL,
            gender          TEXT NOT NULL,
            age             TEXT NOT NULL,
            line_id         TEXT NOT NULL,
            resident_status TEXT NOT NULL,
            created_at      TEXT NOT NULL,
            updated_at      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_registrant_name_phone
            ON registrant (name, phone);
        CREATE INDEX IF NOT EXISTS idx_registrant_email
            ON registrant (email);

        CREATE TABLE IF NOT EXISTS registration_history (
            record_id         TEXT PRIMARY KEY,
            registrant_id     TEXT NOT NULL REFERENCES registrant (registrant_id),
            content_hash      TEXT NOT NULL,
            activity_name     TEXT NOT NULL,
            name              TEXT NOT NULL,
            email             TEXT NOT NULL,
            phone             TEXT NOT NULL,
            gender            TEXT NOT NULL,
            resident_status   TEXT NOT NULL,
            age               TEXT NOT NULL,
            line_id           TEXT NOT NULL,
            children_count    TEXT NOT NULL,
            housing_location  TEXT NOT NULL,
            sports_experience TEXT NOT NULL,
            injury_history    TEXT NOT NULL,
            info_source       TEXT NOT NULL,
            suggestions       TEXT NOT NULL,
            submitted_at      TEXT NOT NULL,
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_registration_content_hash
            ON registration_history (content_hash);
        CREATE INDEX IF NOT EXISTS idx_registration_registrant
            ON registration_history (registrant_id);
        "#,
    )
}

/// 開啟連線並確保資料表存在(匯入入口的慣用起手式)
pub fn open_and_init(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = open_sqlite_connection(db_path)?;
    init_schema(&conn)?;
    Ok(conn)
}
