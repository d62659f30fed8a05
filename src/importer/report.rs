// ==========================================
// 社宅活動報名匯入系統 - 匯入結果彙總
// ==========================================
// 職責: 將每列的 RowOutcome 歸約為三個計數器,
//       並組出操作者可讀的摘要訊息
// 不變量: processed + skipped + duplicate == 資料列數
// ==========================================

use crate::domain::{ImportReport, RowOutcome};

// ==========================================
// ImportAggregator
// ==========================================
#[derive(Debug, Default)]
pub struct ImportAggregator {
    processed: usize,
    skipped: usize,
    duplicate: usize,
}

impl ImportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記錄單列結果
    pub fn record(&mut self, outcome: &RowOutcome) {
        match outcome {
            RowOutcome::Processed => self.processed += 1,
            RowOutcome::Skipped(_) => self.skipped += 1,
            RowOutcome::Duplicate => self.duplicate += 1,
        }
    }

    /// 產出最終報告
    ///
    /// 摘要訊息恆報告成功筆數;略過與重複筆數僅在非零時附註
    pub fn finish(self) -> ImportReport {
        let mut message = format!("成功匯入 {} 筆報名資料", self.processed);
        if self.duplicate > 0 {
            message.push_str(&format!(",{} 筆重複提交已略過", self.duplicate));
        }
        if self.skipped > 0 {
            message.push_str(&format!(",{} 筆資料不完整或處理失敗已略過", self.skipped));
        }

        ImportReport {
            success: true,
            message,
            processed_count: self.processed,
            skipped_count: self.skipped,
            duplicate_count: self.duplicate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SkipReason;

    #[test]
    fn test_counters_sum_to_row_count() {
        let outcomes = vec![
            RowOutcome::Processed,
            RowOutcome::Duplicate,
            RowOutcome::Skipped(SkipReason::Incomplete {
                missing_fields: vec!["聯絡電話".to_string()],
            }),
            RowOutcome::Processed,
        ];

        let mut aggregator = ImportAggregator::new();
        for outcome in &outcomes {
            aggregator.record(outcome);
        }
        let report = aggregator.finish();

        assert_eq!(report.total_rows(), outcomes.len());
        assert_eq!(report.processed_count, 2);
        assert_eq!(report.skipped_count, 1);
        assert_eq!(report.duplicate_count, 1);
        assert!(report.success);
    }

    #[test]
    fn test_message_reports_processed_always() {
        let report = ImportAggregator::new().finish();
        assert_eq!(report.message, "成功匯入 0 筆報名資料");
    }

    #[test]
    fn test_message_mentions_nonzero_counts_only() {
        let mut aggregator = ImportAggregator::new();
        aggregator.record(&RowOutcome::Processed);
        aggregator.record(&RowOutcome::Duplicate);
        let report = aggregator.finish();

        assert!(report.message.contains("成功匯入 1 筆"));
        assert!(report.message.contains("1 筆重複提交"));
        assert!(!report.message.contains("不完整"));
    }
}
