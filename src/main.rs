use clap::Parser;
use std::path::{Path, PathBuf};

use msg_extractor::io::{
    ArtifactReader, ArtifactWriter, ContainerReader, ContainerWriter,
    DefaultArtifactReader, DefaultArtifactWriter, DefaultContainerReader, DefaultContainerWriter,
    RawContainerData,
};
use msg_extractor::{parse_artifact, render_artifact, Container, ContainerLayout, MessageCodec};

#[derive(Parser)]
#[command(name = "msg_extractor")]
#[command(about = "从固定布局的游戏数据容器中提取/回填可翻译消息")]
#[command(version)]
struct Cli {
    /// 输入容器文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 条目表起始偏移（支持 0x 前缀十六进制）
    #[arg(long, value_parser = parse_offset)]
    entries_start: usize,

    /// 条目表结束偏移（不含，支持 0x 前缀十六进制）
    #[arg(long, value_parser = parse_offset)]
    entries_end: usize,

    /// 消息数据区起始偏移（支持 0x 前缀十六进制）
    #[arg(long, value_parser = parse_offset)]
    msg_start: usize,

    /// 输出文件路径
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 应用编辑模式：从编辑后的文本文件回填，生成新容器
    #[arg(long)]
    apply_edits: Option<PathBuf>,

    /// 以JSON格式导出（默认双行文本格式）
    #[arg(long)]
    json: bool,

    /// 显示容器统计信息
    #[arg(long)]
    stats: bool,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    validate_input(&cli.input)?;

    let layout = ContainerLayout::new(cli.entries_start, cli.entries_end, cli.msg_start);
    let raw = DefaultContainerReader.read(&cli.input)?;
    let container = Container::new(raw.bytes, layout)?;
    let codec = MessageCodec::new();

    if cli.stats {
        println!("{}", container.get_stats(&codec)?);
        return Ok(());
    }

    if let Some(edits_path) = &cli.apply_edits {
        return handle_import(&cli, &container, &codec, edits_path);
    }

    // 默认模式：消息导出
    handle_export(&cli, &container, &codec)
}

/// 解析偏移量参数（十进制或 0x 前缀十六进制，允许下划线分隔）
fn parse_offset(s: &str) -> Result<usize, String> {
    let cleaned = s.trim().replace('_', "");
    let parsed = if let Some(hex) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        usize::from_str_radix(hex, 16)
    } else {
        cleaned.parse()
    };
    parsed.map_err(|_| format!("无效的偏移量: {}", s))
}

/// 验证输入文件
fn validate_input(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("输入文件不存在: {:?}", input).into());
    }
    Ok(())
}

/// 处理消息导出
fn handle_export(
    cli: &Cli,
    container: &Container,
    codec: &MessageCodec,
) -> Result<(), Box<dyn std::error::Error>> {
    let messages = container.export_messages(codec)?;

    let (content, default_ext) = if cli.json {
        (serde_json::to_string_pretty(&messages)?, "msg.json")
    } else {
        (render_artifact(&messages), "msg.txt")
    };

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension(default_ext));

    DefaultArtifactWriter.write(&content, &output_path)?;

    if !cli.quiet {
        let placeholder_count = messages.iter().filter(|m| !m.recoverable).count();
        println!("导出完成: {} 条消息 -> {:?}", messages.len(), output_path);
        if placeholder_count > 0 {
            println!(
                "警告: {} 条消息无法解码，已写入占位符（回填前需人工处理）",
                placeholder_count
            );
        }
    }

    Ok(())
}

/// 处理编辑回填
fn handle_import(
    cli: &Cli,
    container: &Container,
    codec: &MessageCodec,
    edits_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if !edits_path.exists() {
        return Err(format!("编辑文件不存在: {:?}", edits_path).into());
    }

    let content = DefaultArtifactReader.read(edits_path)?;
    let texts = parse_artifact(&content)?;
    let rebuilt = container.import_messages(&texts, codec)?;

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("new.dat"));

    DefaultContainerWriter.write(&RawContainerData { bytes: rebuilt }, &output_path)?;

    if !cli.quiet {
        println!("回填完成: {} 条消息 -> {:?}", texts.len(), output_path);
    }

    Ok(())
}
