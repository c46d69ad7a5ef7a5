use regex::Regex;

use crate::datatypes::{decode_sjis, encode_sjis};
use crate::utils::{to_hex, MsgError};

/// 解析失败占位符前缀
///
/// 带此前缀的文本是诊断信息而非消息内容，不可逆向编码。
pub const PLACEHOLDER_PREFIX: &str = "【无法解析：";

/// 双字段控制序列（字节侧）：0x07 0x01 + 字段1 + 0x0A + 字段2 + 0x00
const DUAL_BYTES_RULE: &str = r"\x07\x01([^\x07\x01]+?)\x0A([^\x0A]+?)\x00";
/// 单字段控制序列（字节侧）：0x07 0x08 + 字段 + 0x00
const SINGLE_BYTES_RULE: &str = r"\x07\x08([^\x07\x08]+?)\x00";
/// 双字段标记（文本侧）：[字段1](字段2)
const DUAL_TEXT_RULE: &str = r"\[([^\[]+?)\]\(([^)]+?)\)";
/// 单字段标记（文本侧）：{字段}
const SINGLE_TEXT_RULE: &str = r"\{([^{}]+?)\}";

/// 简单控制符替换表：(可读标记, 控制字符)
///
/// 各条目的标记互不重叠，表内顺序不影响结果。
const SIMPLE_RULES: &[(&str, &str)] = &[
    ("[c]", "\x07\x04"),
    ("[z]", "\x07\x06"),
    ("[s]", "\x07\x09"),
    ("[n]", "\x0A"),
    ("[r]", "\x0D"),
];

/// 消息编解码器
///
/// 负责单条二进制消息（Shift-JIS 文本 + 嵌入控制序列）与
/// 人类可读标记文本之间的双向无损转换。
///
/// # 规则顺序不变量
///
/// 转义规则是一个有序列表，复杂规则必须先于简单规则执行：
/// 双字段序列内部的 0x0A 分隔符如果先被简单规则替换成 `[n]`，
/// 复杂序列就无法再匹配。两条复杂规则的字段均排除 0x07，
/// 因此互相不会跨越对方的前导字节，彼此顺序无关。
/// 编码方向按相反顺序应用同一组规则。
pub struct MessageCodec {
    dual_bytes: Regex,
    single_bytes: Regex,
    dual_text: Regex,
    single_text: Regex,
}

impl MessageCodec {
    /// 创建编解码器（编译全部模式）
    pub fn new() -> Self {
        MessageCodec {
            dual_bytes: Regex::new(DUAL_BYTES_RULE).expect("内置模式必定合法"),
            single_bytes: Regex::new(SINGLE_BYTES_RULE).expect("内置模式必定合法"),
            dual_text: Regex::new(DUAL_TEXT_RULE).expect("内置模式必定合法"),
            single_text: Regex::new(SINGLE_TEXT_RULE).expect("内置模式必定合法"),
        }
    }

    /// 解码一条消息为可读标记文本
    ///
    /// 字节不是合法 Shift-JIS 时返回 `MsgError::Decoding`。
    pub fn decode(&self, bytes: &[u8]) -> Result<String, MsgError> {
        let raw = decode_sjis(bytes)?;

        // 复杂规则先行（见结构体文档的顺序不变量）
        let pass1 = self.dual_bytes.replace_all(&raw, "[${1}](${2})");
        let pass2 = self.single_bytes.replace_all(&pass1, "{${1}}");

        let mut text = pass2.into_owned();
        for (token, ctrl) in SIMPLE_RULES {
            text = text.replace(ctrl, token);
        }
        Ok(text)
    }

    /// 解码一条消息，失败时降级为占位符
    ///
    /// 占位符携带原始字节的十六进制转储，便于人工定位，
    /// 但不是合法的编码输入，重新编码不会还原原始字节。
    pub fn decode_lossy(&self, bytes: &[u8]) -> String {
        match self.decode(bytes) {
            Ok(text) => text,
            Err(_) => format!("{}{}】", PLACEHOLDER_PREFIX, to_hex(bytes)),
        }
    }

    /// 将可读标记文本编码回二进制消息
    ///
    /// 文本含无法映射到 Shift-JIS 的字符，或输入本身是解析失败
    /// 占位符时，返回 `MsgError::Encoding`。
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, MsgError> {
        if Self::is_placeholder(text) {
            return Err(MsgError::Encoding(
                "解析失败占位符不能重新编码，请先修正或删除该条目".to_string(),
            ));
        }

        let pass1 = self.dual_text.replace_all(text, "\x07\x01${1}\x0A${2}\x00");
        let pass2 = self.single_text.replace_all(&pass1, "\x07\x08${1}\x00");

        let mut expanded = pass2.into_owned();
        for (token, ctrl) in SIMPLE_RULES {
            expanded = expanded.replace(token, ctrl);
        }
        encode_sjis(&expanded)
    }

    /// 检查文本是否为解析失败占位符
    pub fn is_placeholder(text: &str) -> bool {
        text.starts_with(PLACEHOLDER_PREFIX)
    }
}

impl Default for MessageCodec {
    fn default() -> Self {
        Self::new()
    }
}
