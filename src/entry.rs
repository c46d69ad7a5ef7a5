use serde::{Serialize, Deserialize};
use std::io::Cursor;

use crate::datatypes::{read_u32, write_u32};
use crate::utils::MsgError;
use crate::ENTRY_SIZE;

/// 消息条目
///
/// 条目表中的固定 8 字节记录，两个小端 u32 字段。
/// `offset` 相对于消息数据区起点，`length` 为消息字节数。
/// 条目在表中的位置即消息索引，不单独存储。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry {
    /// 相对偏移量
    pub offset: u32,
    /// 消息字节长度
    pub length: u32,
}

impl MessageEntry {
    pub fn new(offset: u32, length: u32) -> Self {
        MessageEntry { offset, length }
    }

    /// 条目对应的数据区切片终点
    pub fn end(&self) -> usize {
        self.offset as usize + self.length as usize
    }
}

/// 解析条目表字节
///
/// 表长度必须是 8 的整数倍，不允许出现不完整记录。
pub fn parse_entry_table(table: &[u8]) -> Result<Vec<MessageEntry>, MsgError> {
    if table.len() % ENTRY_SIZE != 0 {
        return Err(MsgError::InvalidLayout(format!(
            "条目表长度 {} 不是 {} 的整数倍",
            table.len(),
            ENTRY_SIZE
        )));
    }

    let count = table.len() / ENTRY_SIZE;
    let mut cursor = Cursor::new(table);
    let mut entries = Vec::with_capacity(count);

    for _ in 0..count {
        let offset = read_u32(&mut cursor)?;
        let length = read_u32(&mut cursor)?;
        entries.push(MessageEntry { offset, length });
    }

    Ok(entries)
}

/// 序列化条目表
pub fn serialize_entry_table(entries: &[MessageEntry]) -> Result<Vec<u8>, MsgError> {
    let mut buffer = Vec::with_capacity(entries.len() * ENTRY_SIZE);
    for entry in entries {
        write_u32(&mut buffer, entry.offset)?;
        write_u32(&mut buffer, entry.length)?;
    }
    Ok(buffer)
}
