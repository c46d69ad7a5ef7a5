use thiserror::Error;
use std::path::Path;

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum MsgError {
    #[error("Invalid container layout: {0}")]
    InvalidLayout(String),

    #[error("Message entry {index} out of range (offset={offset}, length={length}, blob size={blob_len})")]
    EntryOutOfRange {
        index: usize,
        offset: u32,
        length: u32,
        blob_len: usize,
    },

    #[error("Message bytes are not valid Shift-JIS")]
    Decoding,

    #[error("Cannot encode message to Shift-JIS: {0}")]
    Encoding(String),

    #[error("Entry table size mismatch: table region holds {expected} entries, artifact has {actual}")]
    TableSizeMismatch { expected: usize, actual: usize },

    #[error("Malformed artifact: {0}")]
    MalformedArtifact(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 字节序列转十六进制字符串（小写，无分隔符）
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// 创建文件备份
pub fn create_backup(file_path: &Path) -> Result<std::path::PathBuf, MsgError> {
    if !file_path.exists() {
        return Err(MsgError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "原文件不存在"
        )));
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
    let backup_path = file_path.with_extension(format!("{}.bak", timestamp));

    std::fs::copy(file_path, &backup_path)
        .map_err(MsgError::IoError)?;

    Ok(backup_path)
}
