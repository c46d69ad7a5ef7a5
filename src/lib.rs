pub mod datatypes;
pub mod codec;
pub mod entry;
pub mod container;
pub mod artifact;
pub mod utils;
pub mod io;

// 重新导出主要结构
pub use codec::MessageCodec;
pub use container::{Container, ContainerLayout};
pub use entry::MessageEntry;
pub use artifact::{ExportedMessage, render_artifact, parse_artifact};
pub use utils::MsgError;

// 常量定义
pub const ENTRY_SIZE: usize = 8;
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
