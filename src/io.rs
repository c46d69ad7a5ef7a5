/// IO 抽象层模块
///
/// 该模块提供了文件读写的抽象接口，遵循依赖倒置原则。
/// 支持依赖注入、测试 mock 和替换 IO 实现（如内存 IO 等）。
///
/// # 架构设计
///
/// - **traits**: 定义 Reader/Writer trait 接口
/// - **container_io**: 容器文件的默认实现
/// - **artifact_io**: 导出文本文件的默认实现
pub mod traits;
pub mod container_io;
pub mod artifact_io;

// === 导出 trait 定义 ===
pub use traits::{
    ArtifactReader, ArtifactWriter, ContainerReader, ContainerWriter, RawContainerData,
};

// === 导出默认实现 ===
pub use container_io::{DefaultContainerReader, DefaultContainerWriter};
pub use artifact_io::{DefaultArtifactReader, DefaultArtifactWriter};
