use crate::errors::GenerateError;
use crate::utils::models::RawCityRecord;

use csv::Writer;
use serde::Serialize;
use std::{ fs, path::Path };

// 从JSON文件读取城市数据（数组）
pub fn read_city_records<P>(filename: P) -> Result<Vec<RawCityRecord>, GenerateError>
    where P: AsRef<Path>
{
    let path = filename.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GenerateError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| GenerateError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

// 以缩进格式写入JSON（覆盖旧文件），上级目录不存在时自动创建
pub fn write_json_pretty<P, T>(filename: P, value: &T) -> Result<(), GenerateError>
    where P: AsRef<Path>, T: Serialize + ?Sized
{
    let path = filename.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_to_csv<P>(csv_file: P, records: Vec<Vec<String>>) -> Result<(), csv::Error>
    where P: AsRef<Path>
{
    let mut wtr = Writer::from_path(csv_file)?;
    for row in records {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
