/// 容器文件 IO 实现
///
/// 提供基于文件系统的默认容器读写实现
use std::path::Path;

use super::traits::{ContainerReader, ContainerWriter, RawContainerData};

/// 默认的容器文件读取器
#[derive(Debug, Clone, Default)]
pub struct DefaultContainerReader;

impl ContainerReader for DefaultContainerReader {
    fn read(&self, path: &Path) -> Result<RawContainerData, Box<dyn std::error::Error>> {
        let bytes = std::fs::read(path)?;
        Ok(RawContainerData { bytes })
    }
}

/// 默认的容器文件写入器
///
/// 目标文件已存在时先创建时间戳备份再覆盖。
#[derive(Debug, Clone, Default)]
pub struct DefaultContainerWriter;

impl ContainerWriter for DefaultContainerWriter {
    fn write(&self, data: &RawContainerData, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        if path.exists() {
            crate::utils::create_backup(path)?;
        }

        std::fs::write(path, &data.bytes)?;
        Ok(())
    }
}
