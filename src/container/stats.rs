use super::Container;
use crate::codec::MessageCodec;
use crate::utils::MsgError;

/// 容器统计信息
pub struct ContainerStats {
    pub total_size: usize,
    pub prefix_size: usize,
    pub table_size: usize,
    pub blob_size: usize,
    pub message_count: usize,
    pub undecodable_count: usize,
    pub average_message_length: f64,
}

impl std::fmt::Display for ContainerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== 容器统计信息 ===")?;
        writeln!(f, "总大小: {} 字节", self.total_size)?;
        writeln!(f, "前缀区: {} 字节", self.prefix_size)?;
        writeln!(f, "条目表: {} 字节", self.table_size)?;
        writeln!(f, "消息数据区: {} 字节", self.blob_size)?;
        writeln!(f, "消息数量: {}", self.message_count)?;
        writeln!(f, "无法解码: {}", self.undecodable_count)?;
        writeln!(f, "平均消息长度: {:.1} 字节", self.average_message_length)?;
        Ok(())
    }
}

impl Container {
    /// 获取统计信息
    pub fn get_stats(&self, codec: &MessageCodec) -> Result<ContainerStats, MsgError> {
        let entries = self.entries()?;
        let mut undecodable_count = 0;
        let mut total_message_bytes = 0usize;

        for (index, entry) in entries.iter().enumerate() {
            let bytes = self.message_bytes(index, entry)?;
            total_message_bytes += bytes.len();
            if codec.decode(bytes).is_err() {
                undecodable_count += 1;
            }
        }

        Ok(ContainerStats {
            total_size: self.data.len(),
            prefix_size: self.layout.entries_start,
            table_size: self.layout.table_len(),
            blob_size: self.blob().len(),
            message_count: entries.len(),
            undecodable_count,
            average_message_length: if entries.is_empty() {
                0.0
            } else {
                total_message_bytes as f64 / entries.len() as f64
            },
        })
    }
}
