// ==========================================
// 社宅活動報名匯入系統 - CLI 主入口
// ==========================================
// 技術棧: Rust + SQLite
// 用法: signup-import <試算表路徑> [資料庫路徑]
// ==========================================

use signup_import::importer::SignupImporter;
use signup_import::repository::{RegistrantRepositoryImpl, RegistrationRepositoryImpl};
use std::sync::{Arc, Mutex};

/// 取得預設資料庫路徑
///
/// 優先序: 環境變數 SIGNUP_IMPORT_DB_PATH > 使用者資料目錄 > 目前目錄
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    // 允許透過環境變數顯式指定 DB 路徑(便於除錯/測試/CI)
    if let Ok(path) = std::env::var("SIGNUP_IMPORT_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./signup_import.db");

    // 嘗試取得使用者資料目錄
    if let Some(data_dir) = dirs::data_dir() {
        path = data_dir.join("signup-import");

        // 確保目錄存在
        std::fs::create_dir_all(&path).ok();
        path = path.join("signup_import.db");
    }

    path.to_string_lossy().to_string()
}

#[tokio::main]
async fn main() {
    // 初始化日誌系統
    signup_import::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", signup_import::APP_NAME);
    tracing::info!("系統版本: {}", signup_import::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let file_path = match args.next() {
        Some(p) => p,
        None => {
            eprintln!("用法: signup-import <試算表路徑(.xlsx/.csv)> [資料庫路徑]");
            std::process::exit(2);
        }
    };
    let db_path = args.next().unwrap_or_else(get_default_db_path);

    tracing::info!("使用資料庫: {}", db_path);

    // 建立儲存層(兩個 Repository 共用同一條連線)
    let conn = match signup_import::db::open_and_init(&db_path) {
        Ok(conn) => Arc::new(Mutex::new(conn)),
        Err(e) => {
            tracing::error!("無法初始化資料庫: {}", e);
            std::process::exit(1);
        }
    };
    let registrant_repo = RegistrantRepositoryImpl::with_connection(Arc::clone(&conn));
    let registration_repo = RegistrationRepositoryImpl::with_connection(conn);

    let importer = SignupImporter::new(registrant_repo, registration_repo);

    match importer.import_file(&file_path).await {
        Ok(report) => {
            println!("{}", report.message);
            println!(
                "處理 {} 筆 / 重複 {} 筆 / 略過 {} 筆",
                report.processed_count, report.duplicate_count, report.skipped_count
            );
            if !report.success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(file_path = %file_path, error = %e, "匯入失敗");
            eprintln!("匯入失敗: {}", e);
            std::process::exit(1);
        }
    }
}
