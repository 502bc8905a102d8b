use crate::pipeline::dump::dump_csv_to_json;
use crate::Result;
use std::path::Path;

/// 导出 JSON 记录
pub fn dump(input: &Path, output: &Path) -> Result<()> {
    let count = dump_csv_to_json(input, output)?;
    println!("Dumped {} records to {}", count, output.display());
    Ok(())
}
