// ==========================================
// SignupImporter 整合測試
// ==========================================
// 測試目標: 驗證完整的報名匯入對帳流程
// ==========================================


use signup_import::importer::{ImportError, SignupImporter};
use signup_import::logging;
use signup_import::repository::{
    RegistrantRepository, RegistrantRepositoryImpl, RegistrationRepository,
    RegistrationRepositoryImpl,
};
use test_helpers::{create_test_db, sample_row, write_csv_fixture};

/// 建立測試用的 SignupImporter 實例
fn create_test_importer(
    db_path: &str,
) -> SignupImporter<RegistrantRepositoryImpl, RegistrationRepositoryImpl> {
    let registrant_repo = RegistrantRepositoryImpl::new(db_path)
        .expect("Failed to create RegistrantRepository");
    let registration_repo = RegistrationRepositoryImpl::new(db_path)
        .expect("Failed to create RegistrationRepository");

    SignupImporter::new(registrant_repo, registration_repo)
}

#[tokio::test]
async fn test_import_rows_basic() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    // 兩列不同 Hash + 一列重複 Hash
    let rows = vec![
        sample_row("王小美", "0912345678", "hash-001"),
        sample_row("陳大文", "0922333444", "hash-002"),
        sample_row("王小美", "0912345678", "hash-001"),
    ];

    let report = importer.import_rows(rows).await;

    assert!(report.success);
    assert_eq!(report.processed_count, 2);
    assert_eq!(report.duplicate_count, 1);
    assert_eq!(report.skipped_count, 0);

    // 驗證實際寫入筆數
    assert_eq!(importer.registration_repo().count().await.unwrap(), 2);
    assert_eq!(importer.registrant_repo().count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_reimport_is_idempotent() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    let rows = vec![
        sample_row("王小美", "0912345678", "hash-101"),
        sample_row("陳大文", "0922333444", "hash-102"),
    ];

    let first = importer.import_rows(rows.clone()).await;
    assert_eq!(first.processed_count, 2);
    assert_eq!(first.duplicate_count, 0);

    // 同一份資料再匯入一次: 全部視為重複,不新增任何紀錄
    let second = importer.import_rows(rows).await;
    assert!(second.success);
    assert_eq!(second.processed_count, 0);
    assert_eq!(second.duplicate_count, 2);
    assert_eq!(second.skipped_count, 0);

    assert_eq!(importer.registration_repo().count().await.unwrap(), 2);
    assert_eq!(importer.registrant_repo().count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_same_registrant_multiple_signups() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    // 同一人(姓名+電話相同)報名兩個不同活動
    let mut second_signup = sample_row("王小美", "0912345678", "hash-202");
    second_signup.insert("活動名稱".to_string(), "健走系列".to_string());

    let rows = vec![
        sample_row("王小美", "0912345678", "hash-201"),
        second_signup,
    ];

    let report = importer.import_rows(rows).await;
    assert_eq!(report.processed_count, 2);

    // 報名者只建一筆,報名紀錄兩筆
    assert_eq!(importer.registrant_repo().count().await.unwrap(), 1);
    assert_eq!(importer.registration_repo().count().await.unwrap(), 2);

    let found = importer
        .registrant_repo()
        .find_by_name_phone("王小美", "0912345678")
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    let records = importer
        .registration_repo()
        .find_by_registrant(&found[0].registrant_id)
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_mixed_batch_scenario() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    // 列 1: 新報名者、新雜湊 / 列 2: 同人不同活動 / 列 3: 與列 1 同雜湊
    let mut second = sample_row("王小美", "0912345678", "hash-702");
    second.insert("活動名稱".to_string(), "親子瑜珈".to_string());

    let rows = vec![
        sample_row("王小美", "0912345678", "hash-701"),
        second,
        sample_row("王小美", "0912345678", "hash-701"),
    ];

    let report = importer.import_rows(rows).await;

    assert_eq!(report.processed_count, 2);
    assert_eq!(report.duplicate_count, 1);
    assert_eq!(report.skipped_count, 0);

    // 只建立一位報名者,兩筆紀錄皆指向同一識別碼
    let found = importer
        .registrant_repo()
        .find_by_name_phone("王小美", "0912345678")
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    let records = importer
        .registration_repo()
        .find_by_registrant(&found[0].registrant_id)
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_incomplete_row_is_skipped() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    // 缺少聯絡電話: 完整性不足,整列略過且不得寫入
    let mut incomplete = sample_row("林小明", "0933111222", "hash-301");
    incomplete.insert("聯絡電話".to_string(), "".to_string());

    let rows = vec![incomplete, sample_row("陳大文", "0922333444", "hash-302")];

    let report = importer.import_rows(rows).await;
    assert!(report.success);
    assert_eq!(report.processed_count, 1);
    assert_eq!(report.skipped_count, 1);
    assert_eq!(report.duplicate_count, 0);

    // 不完整列不得留下任何部分寫入
    assert_eq!(importer.registrant_repo().count().await.unwrap(), 1);
    assert_eq!(importer.registration_repo().count().await.unwrap(), 1);
    assert!(!importer
        .registration_repo()
        .exists_by_hash("hash-301")
        .await
        .unwrap());
}

#[tokio::test]
async fn test_counters_cover_every_row() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    let mut incomplete = sample_row("林小明", "0933111222", "hash-401");
    incomplete.insert("姓名".to_string(), "".to_string());

    let rows = vec![
        sample_row("王小美", "0912345678", "hash-402"),
        sample_row("王小美", "0912345678", "hash-402"),
        incomplete,
        sample_row("陳大文", "0922333444", "hash-403"),
    ];
    let total = rows.len();

    let report = importer.import_rows(rows).await;

    // 每一列必須恰好落入一個計數
    assert_eq!(
        report.processed_count + report.skipped_count + report.duplicate_count,
        total
    );
    assert_eq!(report.processed_count, 2);
    assert_eq!(report.duplicate_count, 1);
    assert_eq!(report.skipped_count, 1);
}

#[tokio::test]
async fn test_unparseable_timestamp_still_processed() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    // 填寫時間格式無法解析: 不算失敗,以匯入當下時間補上
    let mut row = sample_row("王小美", "0912345678", "hash-501");
    row.insert("填寫時間".to_string(), "三月一日上午".to_string());

    let report = importer.import_rows(vec![row]).await;
    assert_eq!(report.processed_count, 1);
    assert_eq!(report.skipped_count, 0);
}

#[tokio::test]
async fn test_import_csv_file() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    let rows = vec![
        sample_row("王小美", "0912345678", "hash-601"),
        sample_row("陳大文", "0922333444", "hash-602"),
    ];
    let (_csv_file, csv_path) = write_csv_fixture(&rows).expect("Failed to write csv");

    let report = importer
        .import_file(&csv_path)
        .await
        .expect("Import should succeed");

    assert!(report.success);
    assert_eq!(report.processed_count, 2);
    assert_eq!(importer.registration_repo().count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_import_missing_file_fails() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    let result = importer.import_file("tests/fixtures/no_such_file.xlsx").await;

    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}
