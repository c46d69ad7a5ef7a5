/// 导出文本 IO 实现
///
/// 提供基于文件系统的默认导出文本读写实现
use std::path::Path;

use super::traits::{ArtifactReader, ArtifactWriter};

/// 默认的导出文本读取器
#[derive(Debug, Clone, Default)]
pub struct DefaultArtifactReader;

impl ArtifactReader for DefaultArtifactReader {
    fn read(&self, path: &Path) -> Result<String, Box<dyn std::error::Error>> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// 默认的导出文本写入器
#[derive(Debug, Clone, Default)]
pub struct DefaultArtifactWriter;

impl ArtifactWriter for DefaultArtifactWriter {
    fn write(&self, content: &str, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
