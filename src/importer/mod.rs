// ==========================================
// 社宅活動報名匯入系統 - 匯入層
// ==========================================
// 職責: 外部報名資料匯入與對帳
// 支援: Excel, CSV
// ==========================================

// 模組宣告
pub mod duplicate_detector;
pub mod error;
pub mod record_writer;
pub mod registrant_resolver;
pub mod report;
pub mod row_normalizer;
pub mod row_validator;
pub mod schema;
pub mod sheet_decoder;
pub mod signup_importer;

// 重導出核心類型
pub use duplicate_detector::DuplicateDetector;
pub use error::{ImportError, ImportResult};
pub use record_writer::RecordWriter;
pub use registrant_resolver::RegistrantResolver;
pub use report::ImportAggregator;
pub use row_normalizer::RowNormalizer;
pub use row_validator::RowValidator;
pub use schema::{ColumnSpec, Field, COLUMN_SCHEMA, NOT_PROVIDED_MARKER};
pub use sheet_decoder::SheetDecoder;
pub use signup_importer::SignupImporter;
