// ==========================================
// 社宅活動報名匯入系統 - 試算表解碼器
// ==========================================
// 支援: Excel (.xlsx/.xls) / CSV (.csv)
// 假設: 第一個工作表,首列為欄位標題,其後為資料列
// 解碼失敗對整批致命,不做部分解碼
// ==========================================

use crate::domain::SpreadsheetRow;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Data, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

// ==========================================
// 儲存格轉字串
// ==========================================
// 數值格(如電話被 Excel 存成數字)去除無意義的小數尾碼
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

// ==========================================
// SheetDecoder
// ==========================================
pub struct SheetDecoder;

impl SheetDecoder {
    /// 解碼記憶體中的 xlsx 內容(上傳情境)
    ///
    /// # 回傳
    /// - Ok(Vec<SpreadsheetRow>): 依檔案順序的資料列,完全空白列略過
    /// - Err(ImportError::ExcelParseError): 內容不是合法試算表
    pub fn decode_xlsx_bytes(payload: &[u8]) -> ImportResult<Vec<SpreadsheetRow>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(payload.to_vec()))
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;
        Self::decode_first_sheet(&mut workbook)
    }

    /// 解碼磁碟上的 Excel 檔案
    pub fn decode_xlsx_file(file_path: &Path) -> ImportResult<Vec<SpreadsheetRow>> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;
        Self::decode_first_sheet(&mut workbook)
    }

    /// 解碼 CSV 檔案(與 Excel 共用同一套欄位標題契約)
    pub fn decode_csv_file(file_path: &Path) -> ImportResult<Vec<SpreadsheetRow>> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允許列長度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = SpreadsheetRow::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 略過完全空白的列
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }

    /// 依副檔名自動選擇解碼方式
    pub fn decode_file<P: AsRef<Path>>(file_path: P) -> ImportResult<Vec<SpreadsheetRow>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Self::decode_csv_file(path),
            "xlsx" | "xls" => Self::decode_xlsx_file(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    // 讀取第一個工作表:首列為標題,其後每列依標題建映射
    fn decode_first_sheet<R>(workbook: &mut Xlsx<R>) -> ImportResult<Vec<SpreadsheetRow>>
    where
        R: std::io::Read + std::io::Seek,
    {
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError("Excel 檔案無工作表".to_string()));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 檔案無資料列".to_string()))?;

        let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();

        let mut records = Vec::new();
        for data_row in rows {
            let mut row_map = SpreadsheetRow::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell_to_string(cell));
                }
            }

            // 略過完全空白的列
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_decode_xlsx_fixture_maps_headers() {
        let rows = SheetDecoder::decode_file("tests/fixtures/test_signups.xlsx").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("姓名"), Some(&"王小美".to_string()));
        assert_eq!(rows[0].get("Hash"), Some(&"hash-f-001".to_string()));
        assert_eq!(rows[0].get("身分別"), Some(&"社會住宅住戶".to_string()));
        assert_eq!(rows[1].get("聯絡電話"), Some(&"0922333444".to_string()));
    }

    #[test]
    fn test_decode_xlsx_bytes_fixture() {
        let payload = std::fs::read("tests/fixtures/test_signups.xlsx").unwrap();
        let rows = SheetDecoder::decode_xlsx_bytes(&payload).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("姓名"), Some(&"陳大文".to_string()));
        assert_eq!(rows[1].get("身分別"), Some(&"周邊社區居民".to_string()));
    }

    #[test]
    fn test_decode_xlsx_bytes_rejects_garbage() {
        let result = SheetDecoder::decode_xlsx_bytes(b"this is not a spreadsheet");
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }

    #[test]
    fn test_decode_csv_valid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "姓名,聯絡電話").unwrap();
        writeln!(temp_file, "王小明,0912345678").unwrap();
        writeln!(temp_file, "李小華,0987654321").unwrap();

        let rows = SheetDecoder::decode_csv_file(temp_file.path()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("姓名"), Some(&"王小明".to_string()));
        assert_eq!(rows[1].get("聯絡電話"), Some(&"0987654321".to_string()));
    }

    #[test]
    fn test_decode_csv_skips_blank_rows() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "姓名,聯絡電話").unwrap();
        writeln!(temp_file, "王小明,0912345678").unwrap();
        writeln!(temp_file, ",").unwrap(); // 空白列
        writeln!(temp_file, "李小華,0987654321").unwrap();

        let rows = SheetDecoder::decode_csv_file(temp_file.path()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_decode_file_unsupported_extension() {
        let result = SheetDecoder::decode_file("signups.pdf");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_decode_file_missing_csv() {
        let result = SheetDecoder::decode_file("does_not_exist.csv");
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_cell_to_string_strips_float_tail() {
        assert_eq!(cell_to_string(&Data::Float(912345678.0)), "912345678");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
