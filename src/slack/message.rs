//! Slack 消息组装
//!
//! 输出结构对应 Slack incoming webhook 的 JSON：
//! ```json
//! {
//!   "text": "<url|*PR#42* - title> by <profile|login>\nbody",
//!   "username": "DangerJS",
//!   "icon_emoji": ":rage:",
//!   "attachments": [
//!     { "color": "danger", "fallback": "Fails (1)", "title": "Fails (1)", "text": "• ...", "mrkdwn_in": ["text"] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::attachment::{note_block, violation_block, Attachment};
use super::indicator::select_indicator;
use super::options::{ResolvedOptions, DEFAULT_ICON_EMOJI};
use crate::danger::ReviewResults;
use crate::pr::PullRequest;

/// 结果全部为空时追加的提示
pub const NO_OUTPUT: &str = "No output to show.";

/// Slack webhook 消息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// 根据 PR、review 结果和配置组装消息
///
/// 设置了 `text` 时只发送该文本，不生成 PR 标题行和 attachment。
pub fn compose(
    pr: &PullRequest,
    results: &ReviewResults,
    options: &ResolvedOptions,
) -> SlackMessage {
    let mut icon_emoji = options
        .icon_emoji
        .clone()
        .unwrap_or_else(|| DEFAULT_ICON_EMOJI.to_string());

    let (text, attachments) = match &options.text {
        Some(custom) => (custom.clone(), Vec::new()),
        None => {
            if options.icon_emoji.is_none() {
                icon_emoji = select_indicator(&results.failures, &results.warnings)
                    .as_str()
                    .to_string();
            }
            report_body(pr, results)
        }
    };

    SlackMessage {
        text,
        username: Some(options.username.clone()),
        icon_emoji: Some(icon_emoji),
        icon_url: options.icon_url.clone(),
        channel: options.channel.clone(),
        attachments,
    }
}

fn report_body(pr: &PullRequest, results: &ReviewResults) -> (String, Vec<Attachment>) {
    let pr_info = format!("<{}|*PR#{}* - {}>", pr.url, pr.number, pr.title);
    let pr_author = format!("<{}|{}>", pr.author.profile_url, pr.author.login);
    let mut text = format!("{} by {}\n{}", pr_info, pr_author, pr.body);

    // notes 单独存在时同样视为无输出
    if results.has_no_violations() {
        text.push('\n');
        text.push_str(NO_OUTPUT);
        return (text, Vec::new());
    }

    let mut attachments = Vec::new();
    if !results.failures.is_empty() {
        attachments.push(violation_block("Fails", "danger", &results.failures));
    }
    if !results.warnings.is_empty() {
        attachments.push(violation_block("Warnings", "warning", &results.warnings));
    }
    if !results.informational.is_empty() {
        attachments.push(violation_block("Messages", "#999", &results.informational));
    }
    if !results.notes.is_empty() {
        attachments.push(note_block("Comments", "#EEE", &results.notes));
    }

    (text, attachments)
}
