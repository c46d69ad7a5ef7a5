/// IO 抽象层 - trait 定义
///
/// 该模块定义了文件读写的抽象接口，支持依赖注入和测试 mock。
/// 核心操作只处理字节与文本，路径解析全部留在这一层之外的调用方。
use std::path::Path;

/// 容器文件原始数据
#[derive(Debug, Clone)]
pub struct RawContainerData {
    /// 文件的原始字节数据
    pub bytes: Vec<u8>,
}

/// 容器文件读取 trait
///
/// # 职责
/// - 从文件系统读取容器文件的原始字节数据
/// - 不负责解析，仅负责 IO
pub trait ContainerReader {
    /// 读取容器文件的原始数据
    fn read(&self, path: &Path) -> Result<RawContainerData, Box<dyn std::error::Error>>;
}

/// 容器文件写入 trait
///
/// # 职责
/// - 将重建后的容器字节写入文件系统
/// - 不负责重建，仅负责 IO
pub trait ContainerWriter {
    /// 写入容器文件数据
    fn write(&self, data: &RawContainerData, path: &Path) -> Result<(), Box<dyn std::error::Error>>;
}

/// 导出文本读取 trait
pub trait ArtifactReader {
    /// 读取导出文本文件（UTF-8）
    fn read(&self, path: &Path) -> Result<String, Box<dyn std::error::Error>>;
}

/// 导出文本写入 trait
pub trait ArtifactWriter {
    /// 写入导出文本文件（UTF-8）
    fn write(&self, content: &str, path: &Path) -> Result<(), Box<dyn std::error::Error>>;
}
