/// 容器导出/回填的端到端集成测试
///
/// 构造一个合成容器文件，完整跑一遍 导出 -> 编辑 -> 回填 流程。
use std::path::Path;

use msg_extractor::io::{
    ArtifactReader, ArtifactWriter, ContainerReader, ContainerWriter,
    DefaultArtifactReader, DefaultArtifactWriter, DefaultContainerReader, DefaultContainerWriter,
    RawContainerData,
};
use msg_extractor::{
    parse_artifact, render_artifact, Container, ContainerLayout, MessageCodec, MsgError,
};
use tempfile::TempDir;

/// 构造合成容器：16 字节前缀 + 3 条目的表 + 消息数据区
fn build_sample_container() -> (Vec<u8>, ContainerLayout) {
    let codec = MessageCodec::new();

    let message_bytes = vec![
        codec.encode("こんにちは、提督。").unwrap(),
        codec.encode("[攻撃](突撃)を選択[n]してください").unwrap(),
        codec.encode("{作戦}開始[c][r]").unwrap(),
    ];

    let prefix = vec![0x90u8; 16];
    let entries_start = prefix.len();
    let entries_end = entries_start + message_bytes.len() * 8;
    let msg_start = entries_end;

    let mut data = prefix;
    let mut offset = 0u32;
    for bytes in &message_bytes {
        data.extend_from_slice(&offset.to_le_bytes());
        data.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
        offset += bytes.len() as u32;
    }
    for bytes in &message_bytes {
        data.extend_from_slice(bytes);
    }

    (data, ContainerLayout::new(entries_start, entries_end, msg_start))
}

fn write_container(path: &Path, bytes: &[u8]) {
    DefaultContainerWriter
        .write(&RawContainerData { bytes: bytes.to_vec() }, path)
        .unwrap();
}

#[test]
fn test_unedited_roundtrip_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let container_path = temp_dir.path().join("exec.org.dat");
    let artifact_path = temp_dir.path().join("exec.msg.txt");
    let output_path = temp_dir.path().join("new_exec.dat");

    let (original, layout) = build_sample_container();
    write_container(&container_path, &original);

    // 导出
    let codec = MessageCodec::new();
    let raw = DefaultContainerReader.read(&container_path).unwrap();
    let container = Container::new(raw.bytes, layout).unwrap();
    let messages = container.export_messages(&codec).unwrap();
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|m| m.recoverable));

    DefaultArtifactWriter
        .write(&render_artifact(&messages), &artifact_path)
        .unwrap();

    // 未经编辑直接回填
    let content = DefaultArtifactReader.read(&artifact_path).unwrap();
    let texts = parse_artifact(&content).unwrap();
    let rebuilt = container.import_messages(&texts, &codec).unwrap();
    write_container(&output_path, &rebuilt);

    // 新容器与原容器逐字节一致
    let reloaded = DefaultContainerReader.read(&output_path).unwrap();
    assert_eq!(reloaded.bytes, original);
}

#[test]
fn test_edited_import_replaces_message() {
    let (original, layout) = build_sample_container();
    let codec = MessageCodec::new();
    let container = Container::new(original, layout).unwrap();

    let messages = container.export_messages(&codec).unwrap();
    let mut content = render_artifact(&messages);
    // 模拟手工编辑：只改 ◆ 行，◇ 行保持原文
    content = content.replace("◆00000000◆こんにちは、提督。", "◆00000000◆やあ、提督。");

    let texts = parse_artifact(&content).unwrap();
    let rebuilt = container.import_messages(&texts, &codec).unwrap();

    let new_container = Container::new(rebuilt, layout).unwrap();
    let reexported = new_container.export_messages(&codec).unwrap();
    assert_eq!(reexported[0].text, "やあ、提督。");
    // 其余消息不受影响
    assert_eq!(reexported[1].text, messages[1].text);
    assert_eq!(reexported[2].text, messages[2].text);

    // 偏移保持连续累加
    let entries = new_container.entries().unwrap();
    assert_eq!(entries[0].offset, 0);
    assert_eq!(entries[1].offset, entries[0].length);
    assert_eq!(entries[2].offset, entries[0].length + entries[1].length);
}

#[test]
fn test_deleted_line_fails_before_any_write() {
    let (original, layout) = build_sample_container();
    let codec = MessageCodec::new();
    let container = Container::new(original, layout).unwrap();

    let messages = container.export_messages(&codec).unwrap();
    let content = render_artifact(&messages);

    // 删掉一个消息块，条目数与表区域容量不再吻合
    let truncated: Vec<&str> = content.lines().skip(3).collect();
    let texts = parse_artifact(&truncated.join("\n")).unwrap();
    assert_eq!(texts.len(), 2);

    let result = container.import_messages(&texts, &codec);
    assert!(matches!(
        result,
        Err(MsgError::TableSizeMismatch { expected: 3, actual: 2 })
    ));
}

#[test]
fn test_placeholder_blocks_import() {
    // 容器内夹一条坏消息：导出降级为占位符，原样回填被拒绝
    let codec = MessageCodec::new();
    let bad_message: &[u8] = &[0x81, 0xFF];

    let prefix_len = 4usize;
    let mut data = vec![0u8; prefix_len];
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&(bad_message.len() as u32).to_le_bytes());
    data.extend_from_slice(bad_message);
    let layout = ContainerLayout::new(prefix_len, prefix_len + 8, prefix_len + 8);

    let container = Container::new(data, layout).unwrap();
    let messages = container.export_messages(&codec).unwrap();
    assert!(!messages[0].recoverable);

    let texts = parse_artifact(&render_artifact(&messages)).unwrap();
    let result = container.import_messages(&texts, &codec);
    assert!(matches!(result, Err(MsgError::Encoding(_))));
}

#[test]
fn test_stats_reports_container_shape() {
    let (original, layout) = build_sample_container();
    let total = original.len();
    let container = Container::new(original, layout).unwrap();

    let stats = container.get_stats(&MessageCodec::new()).unwrap();
    assert_eq!(stats.message_count, 3);
    assert_eq!(stats.undecodable_count, 0);
    assert_eq!(stats.prefix_size, 16);
    assert_eq!(stats.table_size, 24);
    assert_eq!(stats.total_size, total);
    assert_eq!(
        stats.prefix_size + stats.table_size + stats.blob_size,
        stats.total_size
    );
}
