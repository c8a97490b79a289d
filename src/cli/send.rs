// src/cli/send.rs
//! send / preview 命令处理
//!
//! 宿主（CI 脚本）把 Danger DSL 和结果导出为 JSON 文件，
//! 这里读取后组装 Slack 消息并发送或打印。

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::output::format_message;
use crate::danger::{DangerDsl, ReviewResults};
use crate::pr::PrProvider;
use crate::slack::{
    build_message, report, ResolvedOptions, SlackOptions, SlackWebhookClient, WebhookConfig,
};

/// 输入文件参数
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Danger DSL JSON 文件（如 {"github": {"pr": {...}}}）
    #[arg(long)]
    pub dsl: PathBuf,
    /// Danger 结果 JSON 文件（fails / warnings / messages / markdowns）
    #[arg(long)]
    pub results: PathBuf,
    /// 配置文件路径 (默认: ~/.config/danger-slack/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// 消息选项，覆盖配置文件中的同名字段
#[derive(Args, Debug, Clone, Default)]
pub struct MessageArgs {
    /// Incoming webhook 地址
    #[arg(long, env = "DANGER_SLACK_WEBHOOK_URL")]
    pub webhook_url: Option<String>,
    /// 自定义文本，替换整个报告
    #[arg(long)]
    pub text: Option<String>,
    /// 显示名称 (默认: DangerJS)
    #[arg(long)]
    pub username: Option<String>,
    /// 固定 emoji，不再按结果动态选择
    #[arg(long)]
    pub icon_emoji: Option<String>,
    /// 头像图片地址
    #[arg(long)]
    pub icon_url: Option<String>,
    /// 目标频道，如 #ci
    #[arg(long)]
    pub channel: Option<String>,
    /// PR 来源平台: github | bitbucket_server
    #[arg(long)]
    pub pr_provider: Option<PrProvider>,
}

impl From<MessageArgs> for SlackOptions {
    fn from(args: MessageArgs) -> Self {
        SlackOptions {
            webhook_url: args.webhook_url,
            text: args.text,
            username: args.username,
            icon_emoji: args.icon_emoji,
            icon_url: args.icon_url,
            channel: args.channel,
            pr_provider: args.pr_provider,
        }
    }
}

/// send 命令参数
#[derive(Args, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub message: MessageArgs,
    /// 请求超时（秒）
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,
    /// Dry-run 模式（校验并打印，不发送）
    #[arg(long)]
    pub dry_run: bool,
}

/// preview 命令参数
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub message: MessageArgs,
}

/// 处理 send 命令
pub async fn handle_send(args: SendArgs) -> Result<()> {
    let options = load_options(args.input.config.as_deref(), args.message)?;
    let (dsl, results) = load_inputs(&args.input)?;

    if args.dry_run {
        options.webhook_url()?;
        let message = build_message(&dsl, &results, &options)?;
        eprintln!("[DRY-RUN] Would send to Slack webhook");
        println!("{}", format_message(&message)?);
        return Ok(());
    }

    let client = SlackWebhookClient::new(WebhookConfig {
        timeout_secs: args.timeout_secs,
    })?;
    report(&client, &dsl, &results, &options).await?;
    Ok(())
}

/// 处理 preview 命令
pub fn handle_preview(args: PreviewArgs) -> Result<()> {
    let options = load_options(args.input.config.as_deref(), args.message)?;
    let (dsl, results) = load_inputs(&args.input)?;

    let message = build_message(&dsl, &results, &options)?;
    println!("{}", format_message(&message)?);
    Ok(())
}

/// 合并配置文件与命令行参数
pub fn load_options(config: Option<&Path>, overrides: MessageArgs) -> Result<ResolvedOptions> {
    let base = match config {
        Some(path) => {
            info!(path = %path.display(), "Loading config");
            SlackOptions::from_file(path)?
        }
        None => SlackOptions::load_default()?.unwrap_or_default(),
    };

    Ok(base.merge(overrides.into()).resolve())
}

fn load_inputs(input: &InputArgs) -> Result<(DangerDsl, ReviewResults)> {
    let dsl: DangerDsl = read_json(&input.dsl)?;
    let results: ReviewResults = read_json(&input.results)?;
    Ok((dsl, results))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
