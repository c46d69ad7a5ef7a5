use serde::{Serialize, Deserialize};

use crate::utils::MsgError;

/// 参考行标记（不可编辑的原文行）
pub const REFERENCE_MARK: char = '◇';
/// 编辑行标记（导入时读取的行）
pub const EDITABLE_MARK: char = '◆';

/// 导出的单条消息
///
/// 此结构用于消息的导出与回填：
/// - 导出时：`text` 为容器中解码出的原始文本
/// - 导入时：`text` 为编辑后要写回容器的新文本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedMessage {
    /// 消息索引（条目表顺序，从 0 开始）
    pub index: usize,
    /// 可读标记文本
    pub text: String,
    /// 是否可逆向编码（解析失败占位符为 false）
    pub recoverable: bool,
}

impl ExportedMessage {
    pub fn new(index: usize, text: String, recoverable: bool) -> Self {
        ExportedMessage { index, text, recoverable }
    }
}

/// 渲染双行格式文本
///
/// 每条消息三行：
/// `◇{索引:08X}◇{文本}` 参考行、`◆{索引:08X}◆{文本}` 编辑行、空行。
/// 索引为 8 位零填充大写十六进制。
pub fn render_artifact(messages: &[ExportedMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        output.push_str(&format!(
            "{mark}{index:08X}{mark}{text}\n",
            mark = REFERENCE_MARK,
            index = message.index,
            text = message.text
        ));
        output.push_str(&format!(
            "{mark}{index:08X}{mark}{text}\n\n",
            mark = EDITABLE_MARK,
            index = message.index,
            text = message.text
        ));
    }
    output
}

/// 解析双行格式文本，提取编辑行内容
///
/// 只读取 `◆` 开头的行，文本取第二个 `◆` 之后的部分并去除首尾空白；
/// 行内嵌的索引仅供人工对照，输出顺序由行在文件中的出现顺序决定。
/// 参考行和空行一律忽略。
pub fn parse_artifact(content: &str) -> Result<Vec<String>, MsgError> {
    let mut messages = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        if !line.starts_with(EDITABLE_MARK) {
            continue;
        }

        let parts: Vec<&str> = line.splitn(3, EDITABLE_MARK).collect();
        if parts.len() != 3 {
            return Err(MsgError::MalformedArtifact(format!(
                "第 {} 行缺少第二个 '{}' 标记: {}",
                line_no + 1,
                EDITABLE_MARK,
                line
            )));
        }

        messages.push(parts[2].trim().to_string());
    }

    Ok(messages)
}
