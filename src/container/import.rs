use super::Container;
use crate::codec::MessageCodec;
use crate::entry::{serialize_entry_table, MessageEntry};
use crate::utils::MsgError;

impl Container {
    /// 将编辑后的消息文本回填为新容器字节
    ///
    /// 流程：逐条编码 → 校验条目数与表区域容量一致 → 从 0 起
    /// 连续累加偏移生成新条目表 → 在原始字节副本上覆盖条目表区域、
    /// 整段替换消息数据区尾部。任何一条编码失败都使整个导入失败，
    /// 不产生部分结果；原始数据始终不被修改。
    pub fn import_messages(
        &self,
        texts: &[String],
        codec: &MessageCodec,
    ) -> Result<Vec<u8>, MsgError> {
        // 条目表区域大小在容器内固定，消息数量必须吻合
        let expected = self.layout.entry_count();
        if texts.len() != expected {
            return Err(MsgError::TableSizeMismatch {
                expected,
                actual: texts.len(),
            });
        }

        // 先完成全部编码，再碰任何输出字节
        let mut entries = Vec::with_capacity(texts.len());
        let mut blob = Vec::new();
        let mut current_offset = 0u32;

        for text in texts {
            let encoded = codec.encode(text)?;
            let length = encoded.len() as u32;
            entries.push(MessageEntry::new(current_offset, length));
            current_offset += length;
            blob.extend_from_slice(&encoded);
        }

        let table = serialize_entry_table(&entries)?;

        // 尾部替换：消息数据区是文件最后一个区域（布局校验已保证）
        let mut output = self.data.clone();
        output[self.layout.entries_start..self.layout.entries_end].copy_from_slice(&table);
        output.truncate(self.layout.msg_start);
        output.extend_from_slice(&blob);

        Ok(output)
    }
}
