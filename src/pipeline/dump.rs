//! 记录导出
//!
//! 将 CSV 转为 JSON 记录数组（每行一个对象），供下游数据库批量导入。

use crate::error::DataError;
use crate::pipeline::ingest::{parse_cell, SensorFrame};
use crate::Result;
use serde_json::{Map, Number, Value};
use std::path::Path;

/// 单元格转为 JSON 值：缺失值为 `null`，数值保持数值，其余为字符串
fn cell_to_value(cell: &str) -> Value {
    match parse_cell(cell) {
        Ok(None) => Value::Null,
        Ok(Some(v)) => Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(cell.to_string())),
        Err(_) => Value::String(cell.to_string()),
    }
}

/// 数据表转为 JSON 记录
pub fn frame_to_records(frame: &SensorFrame) -> Vec<Value> {
    frame
        .records()
        .iter()
        .map(|record| {
            let object: Map<String, Value> = frame
                .headers()
                .iter()
                .zip(record)
                .map(|(header, cell)| (header.clone(), cell_to_value(cell)))
                .collect();
            Value::Object(object)
        })
        .collect()
}

/// 读取 CSV 并写出 JSON 记录文件，返回记录数
pub fn dump_csv_to_json(input: &Path, output: &Path) -> Result<usize> {
    let frame = SensorFrame::from_csv_path(input)?;
    tracing::info!("Rows and columns: ({}, {})", frame.len(), frame.headers().len());

    let records = frame_to_records(&frame);
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| DataError::WriteFailed(format!("{}: {}", parent.display(), e)))?;
    }
    let file = std::fs::File::create(output)
        .map_err(|e| DataError::WriteFailed(format!("{}: {}", output.display(), e)))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &records)
        .map_err(|e| DataError::WriteFailed(format!("{}: {}", output.display(), e)))?;

    tracing::info!("Dumped {} records to {}", records.len(), output.display());
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_frame_to_records() {
        let frame =
            SensorFrame::from_reader("class,aa_000,ab_000\nneg,76698,na\n".as_bytes()).unwrap();
        let records = frame_to_records(&frame);
        assert_eq!(
            records,
            vec![json!({"class": "neg", "aa_000": 76698.0, "ab_000": null})]
        );
    }

    #[test]
    fn test_dump_csv_to_json() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("sensors.csv");
        let output = temp_dir.path().join("dump").join("sensors.json");
        std::fs::write(&input, "class,aa_000\npos,1\nneg,2\n").unwrap();

        assert_eq!(dump_csv_to_json(&input, &output).unwrap(), 2);
        let value: Value = serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["class"], json!("neg"));
    }
}
