// ==========================================
// 社宅活動報名匯入系統 - 報名匯入器
// ==========================================
// 職責: 整合匯入流程,從檔案內容到資料庫
// 流程: 解碼 → 正規化 → 驗證 → 解析報名者 → 重複偵測 → 落庫
// 契約: 列與列之間嚴格循序;單列失敗不影響後續列
// ==========================================

use crate::domain::{ImportReport, RowOutcome, SkipReason, SpreadsheetRow};
use crate::importer::duplicate_detector::DuplicateDetector;
use crate::importer::error::ImportResult;
use crate::importer::record_writer::RecordWriter;
use crate::importer::registrant_resolver::RegistrantResolver;
use crate::importer::report::ImportAggregator;
use crate::importer::row_normalizer::RowNormalizer;
use crate::importer::row_validator::RowValidator;
use crate::importer::sheet_decoder::SheetDecoder;
use crate::repository::{RegistrantRepository, RegistrationRepository};
use std::path::Path;
use tracing::{debug, info, warn};

// ==========================================
// SignupImporter - 報名匯入器
// ==========================================
pub struct SignupImporter<R, H>
where
    R: RegistrantRepository,
    H: RegistrationRepository,
{
    registrant_repo: R,
    registration_repo: H,
}

impl<R, H> SignupImporter<R, H>
where
    R: RegistrantRepository,
    H: RegistrationRepository,
{
    /// 建立匯入器
    ///
    /// # 參數
    /// - registrant_repo: 報名者儲存
    /// - registration_repo: 報名歷史儲存
    pub fn new(registrant_repo: R, registration_repo: H) -> Self {
        Self {
            registrant_repo,
            registration_repo,
        }
    }

    /// 匯入記憶體中的 xlsx 內容(上傳情境)
    ///
    /// # 回傳
    /// - Ok(ImportReport): 匯入結果(解碼成功後必定回傳報告)
    /// - Err(ImportError): 內容無法解析為試算表(整批致命)
    pub async fn import_xlsx_bytes(&self, payload: &[u8]) -> ImportResult<ImportReport> {
        debug!("步驟 1: 解碼試算表");
        let rows = SheetDecoder::decode_xlsx_bytes(payload)?;
        Ok(self.import_rows(rows).await)
    }

    /// 匯入磁碟上的檔案(.xlsx/.xls/.csv,依副檔名選擇解碼)
    pub async fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ImportReport> {
        let path = file_path.as_ref();
        debug!(file = %path.display(), "步驟 1: 解碼檔案");
        let rows = SheetDecoder::decode_file(path)?;
        Ok(self.import_rows(rows).await)
    }

    /// 循序處理已解碼的資料列
    ///
    /// 解碼之後的任何狀況都在列邊界吸收,必定產出報告
    pub async fn import_rows(&self, rows: Vec<SpreadsheetRow>) -> ImportReport {
        let total_rows = rows.len();
        info!(total_rows = total_rows, "開始匯入報名資料");

        let mut aggregator = ImportAggregator::new();
        for (idx, row) in rows.into_iter().enumerate() {
            let row_number = idx + 1;
            let outcome = match self.process_row(&row).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    // 單列失敗:記錄後計入略過,不中斷批次
                    warn!(row_number = row_number, error = %e, "單列處理失敗");
                    RowOutcome::Skipped(SkipReason::RowError {
                        message: e.to_string(),
                    })
                }
            };

            if let RowOutcome::Skipped(reason) = &outcome {
                warn!(row_number = row_number, reason = %reason, "略過資料列");
            }

            aggregator.record(&outcome);
        }

        let report = aggregator.finish();
        info!(
            total = total_rows,
            processed = report.processed_count,
            skipped = report.skipped_count,
            duplicate = report.duplicate_count,
            "報名資料匯入完成"
        );
        report
    }

    // 單列狀態機: normalized → (validated | rejected)
    //             → resolved registrant → (duplicate | written)
    async fn process_row(&self, row: &SpreadsheetRow) -> ImportResult<RowOutcome> {
        // 步驟 2: 正規化(定義為永不失敗)
        let normalized = RowNormalizer::normalize(row);

        // 步驟 3: 完整性檢核(全有或全無)
        if let Err(missing_fields) = RowValidator::validate(&normalized) {
            return Ok(RowOutcome::Skipped(SkipReason::Incomplete {
                missing_fields,
            }));
        }

        // 步驟 4: 解析或建立報名者
        let registrant_id =
            RegistrantResolver::resolve_or_create(&self.registrant_repo, &normalized).await?;

        // 步驟 5: 重複偵測(依內容雜湊)
        if DuplicateDetector::is_duplicate(&self.registration_repo, &normalized.content_hash)
            .await?
        {
            debug!(content_hash = %normalized.content_hash, "重複提交,略過落庫");
            return Ok(RowOutcome::Duplicate);
        }

        // 步驟 6: 落庫報名紀錄
        let record_id =
            RecordWriter::write(&self.registration_repo, &normalized, &registrant_id).await?;
        debug!(record_id = %record_id, registrant_id = %registrant_id, "報名紀錄已建立");

        Ok(RowOutcome::Processed)
    }

    pub fn registrant_repo(&self) -> &R {
        &self.registrant_repo
    }

    pub fn registration_repo(&self) -> &H {
        &self.registration_repo
    }
}
