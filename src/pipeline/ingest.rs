//! 传感器数据读取
//!
//! 带表头的 CSV 读入为字符串表格，按列名取出数值特征矩阵。
//! 空单元格、常见的缺失值标记（`na`、`NaN`、`N/A`、`null` 等）以及非有限数值
//! （`NaN`、`inf`）一律视为缺失值，交给转换器填充。

use crate::error::DataError;
use crate::models::traits::RawRow;
use crate::Result;
use std::io::Read;
use std::path::Path;

/// 缺失值标记
pub const MISSING_VALUE_TOKEN: &str = "na";

/// 其余按缺失值处理的标记（区分大小写）
pub const NA_TOKENS: &[&str] = &[
    MISSING_VALUE_TOKEN,
    "NA",
    "n/a",
    "N/A",
    "#N/A",
    "<NA>",
    "nan",
    "NaN",
    "-nan",
    "-NaN",
    "null",
    "NULL",
    "None",
];

/// 解析单元格：`Ok(None)` 表示缺失值
pub fn parse_cell(cell: &str) -> std::result::Result<Option<f64>, std::num::ParseFloatError> {
    let cell = cell.trim();
    if cell.is_empty() || NA_TOKENS.contains(&cell) {
        return Ok(None);
    }
    let value = cell.parse::<f64>()?;
    Ok(value.is_finite().then_some(value))
}

/// 传感器数据表
#[derive(Debug, Clone, PartialEq)]
pub struct SensorFrame {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl SensorFrame {
    /// 从 CSV 文件读取
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| DataError::InvalidInput(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(file)
    }

    /// 从任意读取器读取 CSV
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader
            .headers()
            .map_err(DataError::from)?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(DataError::from)?;
            records.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, records })
    }

    /// 表头
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// 全部行
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 是否没有数据行
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 列名对应的下标
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()).into())
    }

    /// 按给定列名顺序取出数值矩阵
    pub fn feature_matrix(&self, names: &[String]) -> Result<Vec<RawRow>> {
        let indices = names
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<_>>>()?;

        let mut rows = Vec::with_capacity(self.records.len());
        for (row, record) in self.records.iter().enumerate() {
            let mut values = Vec::with_capacity(indices.len());
            for (&index, name) in indices.iter().zip(names) {
                let cell = &record[index];
                let value = parse_cell(cell).map_err(|_| DataError::InvalidValue {
                    column: name.clone(),
                    row,
                    value: cell.clone(),
                })?;
                values.push(value);
            }
            rows.push(values);
        }
        Ok(rows)
    }

    /// 追加一列，长度必须与行数一致
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<String>) -> Result<()> {
        let name = name.into();
        if values.len() != self.records.len() {
            return Err(DataError::InvalidInput(format!(
                "column {} has {} values, expected {}",
                name,
                values.len(),
                self.records.len()
            ))
            .into());
        }
        self.headers.push(name);
        for (record, value) in self.records.iter_mut().zip(values) {
            record.push(value);
        }
        Ok(())
    }

    /// 写出为带表头的 CSV
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let write_failed = |e: &dyn std::fmt::Display| {
            DataError::WriteFailed(format!("{}: {}", path.display(), e))
        };

        let mut writer = csv::Writer::from_path(path).map_err(|e| write_failed(&e))?;
        writer
            .write_record(&self.headers)
            .map_err(|e| write_failed(&e))?;
        for record in &self.records {
            writer.write_record(record).map_err(|e| write_failed(&e))?;
        }
        writer.flush().map_err(|e| write_failed(&e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SensorForgeError;
    use tempfile::TempDir;

    const SAMPLE: &str = "class,aa_000,ab_000\nneg,76698,na\npos,33058,0\n";

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("na").unwrap(), None);
        assert_eq!(parse_cell("  ").unwrap(), None);
        assert_eq!(parse_cell("1.5").unwrap(), Some(1.5));
        assert!(parse_cell("abc").is_err());
    }

    #[test]
    fn test_parse_cell_missing_markers_and_non_finite() {
        for token in ["NA", "N/A", "null", "NaN", "nan", " nan "] {
            assert_eq!(parse_cell(token).unwrap(), None, "token {:?}", token);
        }
        for token in ["inf", "-inf", "infinity", "-Infinity"] {
            assert_eq!(parse_cell(token).unwrap(), None, "token {:?}", token);
        }
        assert_eq!(parse_cell("1e3").unwrap(), Some(1000.0));
    }

    #[test]
    fn test_feature_matrix_in_requested_order() {
        let frame = SensorFrame::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(frame.len(), 2);

        let names = vec!["ab_000".to_string(), "aa_000".to_string()];
        let matrix = frame.feature_matrix(&names).unwrap();
        assert_eq!(
            matrix,
            vec![vec![None, Some(76698.0)], vec![Some(0.0), Some(33058.0)]]
        );
    }

    #[test]
    fn test_missing_column_and_bad_value() {
        let frame = SensorFrame::from_reader(SAMPLE.as_bytes()).unwrap();
        let err = frame.feature_matrix(&["zz_999".to_string()]).unwrap_err();
        assert!(matches!(err, SensorForgeError::Data(DataError::MissingColumn(ref c)) if c == "zz_999"));

        let err = frame.feature_matrix(&["class".to_string()]).unwrap_err();
        assert!(matches!(
            err,
            SensorForgeError::Data(DataError::InvalidValue { row: 0, .. })
        ));
    }

    #[test]
    fn test_push_column_and_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut frame = SensorFrame::from_reader(SAMPLE.as_bytes()).unwrap();
        frame
            .push_column("prediction", vec!["0".to_string(), "1".to_string()])
            .unwrap();
        assert!(frame.push_column("bad", vec![]).is_err());
        frame.write_csv(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "class,aa_000,ab_000,prediction\nneg,76698,na,0\npos,33058,0,1\n"
        );
    }

    #[test]
    fn test_write_csv_failure_is_a_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.csv");

        let frame = SensorFrame::from_reader(SAMPLE.as_bytes()).unwrap();
        let err = frame.write_csv(&path).unwrap_err();
        assert!(matches!(
            err,
            SensorForgeError::Data(DataError::WriteFailed(ref msg)) if msg.contains("out.csv")
        ));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let err = SensorFrame::from_reader("a,b\n1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SensorForgeError::Data(DataError::Csv(_))));
    }
}
