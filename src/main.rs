//! danger-slack CLI
//!
//! 把 Danger 的 review 结果报告到 Slack

use anyhow::Result;
use clap::{Parser, Subcommand};
use danger_slack::cli::{handle_preview, handle_send, PreviewArgs, SendArgs};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "danger-slack")]
#[command(about = "danger-slack - 把 Danger 的 review 结果报告到 Slack")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 组装消息并发送到 Slack webhook
    Send(SendArgs),
    /// 打印组装后的消息 JSON（不需要 webhook 地址）
    Preview(PreviewArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    // 例如: RUST_LOG=debug danger-slack send ...
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("danger_slack=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Send(args) => handle_send(args).await?,
        Commands::Preview(args) => handle_preview(args)?,
    }

    Ok(())
}
