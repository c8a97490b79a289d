//! Slack attachment 格式化

use serde::{Deserialize, Serialize};

use crate::danger::Violation;

/// 列表项前缀
const BULLET: &str = "• ";

/// Slack 消息中的一个 attachment 区块
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// 语义颜色（"danger" / "warning"）或十六进制颜色
    pub color: String,
    /// 不支持富文本时展示的纯文本
    pub fallback: String,
    pub title: String,
    pub text: String,
    /// 需要按 markdown 渲染的字段
    pub mrkdwn_in: Vec<String>,
}

impl Attachment {
    fn markdown(color: &str, title: String, text: String) -> Self {
        Self {
            color: color.to_string(),
            fallback: title.clone(),
            title,
            text,
            mrkdwn_in: vec!["text".to_string()],
        }
    }
}

/// 违规列表 → attachment，标题带数量，如 `Fails (3)`
pub fn violation_block(title: &str, color: &str, violations: &[Violation]) -> Attachment {
    let title = format!("{} ({})", title, violations.len());
    let text = violations
        .iter()
        .map(|v| format!("{}{}", BULLET, v.message))
        .collect::<Vec<_>>()
        .join("\n");

    Attachment::markdown(color, title, text)
}

/// markdown 备注 → attachment，原样按行拼接
pub fn note_block(title: &str, color: &str, notes: &[String]) -> Attachment {
    Attachment::markdown(color, title.to_string(), notes.join("\n"))
}
