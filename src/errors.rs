use std::path::PathBuf;
use thiserror::Error;

// 生成城市数据时的错误，都会导致构建失败
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read city records from {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse city records in {path}: {source}")]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize location records: {0}")]
    Serialize(#[from] serde_json::Error),
}

// 接口检测的内部错误（接口不可用不算在这里）
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to print report: {0}")]
    Output(#[from] std::io::Error),
}
