use super::Container;
use crate::artifact::ExportedMessage;
use crate::codec::MessageCodec;
use crate::utils::MsgError;

impl Container {
    /// 导出全部消息为可读文本
    ///
    /// 按条目表顺序解码每条消息。单条消息解码失败只影响该条目，
    /// 降级为解析失败占位符继续导出；条目本身越界属于表结构损坏，
    /// 整个导出终止。
    pub fn export_messages(&self, codec: &MessageCodec) -> Result<Vec<ExportedMessage>, MsgError> {
        let entries = self.entries()?;
        let mut messages = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let bytes = self.message_bytes(index, entry)?;
            let text = codec.decode_lossy(bytes);
            let recoverable = !MessageCodec::is_placeholder(&text);
            messages.push(ExportedMessage::new(index, text, recoverable));
        }

        Ok(messages)
    }
}
