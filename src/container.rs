use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::entry::{parse_entry_table, MessageEntry};
use crate::utils::MsgError;
use crate::ENTRY_SIZE;

pub mod export;
pub mod import;
pub mod stats;

pub use stats::ContainerStats;

/// 容器区域布局
///
/// 容器按三个逻辑区域划分：
/// - 前缀区 `[0, entries_start)`：不透明数据，原样保留
/// - 条目表区 `[entries_start, entries_end)`：固定 8 字节记录
/// - 消息数据区 `[msg_start, 文件末尾)`：所有消息字节的连续拼接
///
/// 区域边界由调用方提供，本库不做探测。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContainerLayout {
    /// 条目表起始偏移
    pub entries_start: usize,
    /// 条目表结束偏移（不含）
    pub entries_end: usize,
    /// 消息数据区起始偏移
    pub msg_start: usize,
}

impl ContainerLayout {
    pub fn new(entries_start: usize, entries_end: usize, msg_start: usize) -> Self {
        ContainerLayout { entries_start, entries_end, msg_start }
    }

    /// 条目表区域字节长度
    pub fn table_len(&self) -> usize {
        self.entries_end - self.entries_start
    }

    /// 条目数量
    pub fn entry_count(&self) -> usize {
        self.table_len() / ENTRY_SIZE
    }

    /// 校验布局与容器数据的一致性
    ///
    /// 消息数据区必须是文件的最后一个区域（导入时整段尾部替换
    /// 依赖这一点），因此 `msg_start` 不能越过文件末尾。
    pub fn validate(&self, data_len: usize) -> Result<(), MsgError> {
        if self.entries_start >= self.entries_end {
            return Err(MsgError::InvalidLayout(format!(
                "条目表区域为空或倒置: [{:#X}, {:#X})",
                self.entries_start, self.entries_end
            )));
        }
        if self.table_len() % ENTRY_SIZE != 0 {
            return Err(MsgError::InvalidLayout(format!(
                "条目表长度 {} 不是 {} 的整数倍",
                self.table_len(),
                ENTRY_SIZE
            )));
        }
        if self.entries_end > self.msg_start {
            return Err(MsgError::InvalidLayout(format!(
                "条目表区域 [{:#X}, {:#X}) 与消息数据区起点 {:#X} 重叠",
                self.entries_start, self.entries_end, self.msg_start
            )));
        }
        if self.msg_start > data_len {
            return Err(MsgError::InvalidLayout(format!(
                "消息数据区起点 {:#X} 超出容器大小 {:#X}",
                self.msg_start, data_len
            )));
        }
        Ok(())
    }
}

/// 消息容器
///
/// 持有完整的容器字节和区域布局。导出操作只读；
/// 导入操作在字节副本上整段替换条目表和消息数据区，
/// 原始数据保持不变。
pub struct Container {
    /// 容器的原始字节数据
    pub data: Vec<u8>,
    /// 区域布局
    pub layout: ContainerLayout,
}

impl Container {
    /// 从字节数据创建容器（校验布局）
    pub fn new(data: Vec<u8>, layout: ContainerLayout) -> Result<Self, MsgError> {
        layout.validate(data.len())?;
        Ok(Container { data, layout })
    }

    /// 从文件加载容器
    pub fn load(path: &Path, layout: ContainerLayout) -> Result<Self, MsgError> {
        let data = std::fs::read(path)?;
        Self::new(data, layout)
    }

    /// 解析条目表
    pub fn entries(&self) -> Result<Vec<MessageEntry>, MsgError> {
        parse_entry_table(&self.data[self.layout.entries_start..self.layout.entries_end])
    }

    /// 消息数据区
    pub fn blob(&self) -> &[u8] {
        &self.data[self.layout.msg_start..]
    }

    /// 按条目切出单条消息的字节
    pub fn message_bytes(&self, index: usize, entry: &MessageEntry) -> Result<&[u8], MsgError> {
        let blob = self.blob();
        if entry.end() > blob.len() {
            return Err(MsgError::EntryOutOfRange {
                index,
                offset: entry.offset,
                length: entry.length,
                blob_len: blob.len(),
            });
        }
        Ok(&blob[entry.offset as usize..entry.end()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> ContainerLayout {
        ContainerLayout::new(4, 12, 16)
    }

    /// 前缀 4 字节 + 1 条目的表 + 4 字节填充 + 数据区 "Hello"
    fn sample_data() -> Vec<u8> {
        let mut data = vec![0xEE; 4];
        data.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00]);
        data.extend_from_slice(&[0xEE; 4]);
        data.extend_from_slice(b"Hello");
        data
    }

    #[test]
    fn test_container_new() {
        let container = Container::new(sample_data(), sample_layout()).unwrap();
        let entries = container.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(container.message_bytes(0, &entries[0]).unwrap(), b"Hello");
    }

    #[test]
    fn test_layout_rejects_inverted_table() {
        let layout = ContainerLayout::new(12, 4, 16);
        assert!(layout.validate(32).is_err());
    }

    #[test]
    fn test_layout_rejects_partial_record() {
        let layout = ContainerLayout::new(4, 10, 16);
        assert!(layout.validate(32).is_err());
    }

    #[test]
    fn test_layout_rejects_table_past_blob() {
        let layout = ContainerLayout::new(4, 20, 16);
        assert!(layout.validate(32).is_err());
    }

    #[test]
    fn test_layout_rejects_blob_past_eof() {
        let layout = ContainerLayout::new(4, 12, 64);
        assert!(matches!(layout.validate(32), Err(MsgError::InvalidLayout(_))));
    }

    #[test]
    fn test_message_bytes_out_of_range() {
        let mut data = sample_data();
        // 把条目长度改成 6，超出 5 字节的数据区
        data[8] = 0x06;
        let container = Container::new(data, sample_layout()).unwrap();
        let entries = container.entries().unwrap();
        let result = container.message_bytes(0, &entries[0]);
        assert!(matches!(result, Err(MsgError::EntryOutOfRange { .. })));
    }
}
