use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Write};
use encoding_rs::SHIFT_JIS;

use crate::utils::MsgError;

// 基础整数类型读取函数
pub fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32, std::io::Error> {
    cursor.read_u32::<LittleEndian>()
}

// 基础整数类型写入函数
pub fn write_u32(writer: &mut dyn Write, value: u32) -> Result<(), std::io::Error> {
    writer.write_u32::<LittleEndian>(value)
}

/// Shift-JIS 解码
///
/// 游戏内文本使用固定的 Shift-JIS 双字节编码，
/// 控制字符（0x00、0x07、0x0A 等）在该编码下解码为同值的单字符，
/// 因此整条消息可以先整体解码、再在字符串域做转义处理。
pub fn decode_sjis(data: &[u8]) -> Result<String, MsgError> {
    let (decoded, _, had_errors) = SHIFT_JIS.decode(data);
    if had_errors {
        return Err(MsgError::Decoding);
    }
    Ok(decoded.into_owned())
}

/// Shift-JIS 编码
///
/// 文本中存在无法映射到 Shift-JIS 的字符时返回错误，
/// 不允许编码器用替代序列静默顶替。
pub fn encode_sjis(text: &str) -> Result<Vec<u8>, MsgError> {
    let (encoded, _, had_errors) = SHIFT_JIS.encode(text);
    if had_errors {
        return Err(MsgError::Encoding(format!("文本包含无法编码的字符: {:?}", text)));
    }
    Ok(encoded.into_owned())
}
