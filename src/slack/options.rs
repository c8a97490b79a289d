//! Slack 报告配置
//!
//! 配置来源按优先级从低到高：默认值 → 配置文件 → 命令行/环境变量。
//! 所有来源先合并成 [`SlackOptions`]，再一次性解析为不可变的 [`ResolvedOptions`]。

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SlackError};
use crate::pr::PrProvider;

pub const DEFAULT_USERNAME: &str = "DangerJS";
pub const DEFAULT_ICON_EMOJI: &str = ":open_mouth:";

/// 原始配置（字段名与 danger-plugin-slack 的 options 保持一致）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackOptions {
    /// Incoming webhook 地址
    #[serde(alias = "url")]
    pub webhook_url: Option<String>,
    /// 自定义消息文本，设置后替换整个报告
    pub text: Option<String>,
    #[serde(alias = "displayName")]
    pub username: Option<String>,
    pub icon_emoji: Option<String>,
    pub icon_url: Option<String>,
    /// 目标频道，如 `#ci`
    pub channel: Option<String>,
    #[serde(alias = "prdsl")]
    pub pr_provider: Option<PrProvider>,
}

impl SlackOptions {
    /// 从 JSON 配置文件加载
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SlackError::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            SlackError::Configuration(format!("invalid config {}: {}", path.display(), e))
        })
    }

    /// 默认配置文件路径 `~/.config/danger-slack/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config/danger-slack/config.json"))
    }

    /// 加载默认配置文件，不存在时返回 `None`
    pub fn load_default() -> Result<Option<Self>> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading default config");
                Self::from_file(&path).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// 用 `overrides` 中已设置的字段覆盖当前配置
    pub fn merge(self, overrides: SlackOptions) -> Self {
        Self {
            webhook_url: overrides.webhook_url.or(self.webhook_url),
            text: overrides.text.or(self.text),
            username: overrides.username.or(self.username),
            icon_emoji: overrides.icon_emoji.or(self.icon_emoji),
            icon_url: overrides.icon_url.or(self.icon_url),
            channel: overrides.channel.or(self.channel),
            pr_provider: overrides.pr_provider.or(self.pr_provider),
        }
    }

    /// 解析为最终配置；空字符串视为未设置，webhook 地址额外去除首尾空白
    pub fn resolve(self) -> ResolvedOptions {
        ResolvedOptions {
            webhook_url: self
                .webhook_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            text: non_empty(self.text),
            username: non_empty(self.username).unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            icon_emoji: non_empty(self.icon_emoji),
            icon_url: non_empty(self.icon_url),
            channel: non_empty(self.channel),
            pr_provider: self.pr_provider.unwrap_or_default(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 解析后的配置，组装消息期间只读
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    webhook_url: Option<String>,
    pub text: Option<String>,
    pub username: String,
    /// 显式指定的 emoji；为 `None` 时按结果动态选择
    pub icon_emoji: Option<String>,
    pub icon_url: Option<String>,
    pub channel: Option<String>,
    pub pr_provider: PrProvider,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        SlackOptions::default().resolve()
    }
}

impl ResolvedOptions {
    /// 投递前校验 webhook 地址
    pub fn webhook_url(&self) -> Result<&str> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| SlackError::Configuration("webhookUrl is required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = ResolvedOptions::default();
        assert_eq!(options.username, "DangerJS");
        assert_eq!(options.icon_emoji, None);
        assert_eq!(options.pr_provider, PrProvider::GitHub);
        assert!(options.text.is_none());
    }

    #[test]
    fn test_missing_webhook_url() {
        let err = ResolvedOptions::default().webhook_url().unwrap_err();
        assert!(matches!(err, SlackError::Configuration(_)));
    }

    #[test]
    fn test_empty_webhook_url_is_missing() {
        let options = SlackOptions {
            webhook_url: Some("  ".to_string()),
            ..Default::default()
        }
        .resolve();
        assert!(options.webhook_url().is_err());
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let options = SlackOptions {
            username: Some(String::new()),
            text: Some(String::new()),
            ..Default::default()
        }
        .resolve();
        assert_eq!(options.username, "DangerJS");
        assert!(options.text.is_none());
    }

    #[test]
    fn test_whitespace_values_are_kept() {
        let options = SlackOptions {
            text: Some(" ".to_string()),
            username: Some(" ".to_string()),
            channel: Some(" ".to_string()),
            ..Default::default()
        }
        .resolve();
        assert_eq!(options.text.as_deref(), Some(" "));
        assert_eq!(options.username, " ");
        assert_eq!(options.channel.as_deref(), Some(" "));
    }

    #[test]
    fn test_webhook_url_is_trimmed() {
        let options = SlackOptions {
            webhook_url: Some(" https://hooks.slack.com/x \n".to_string()),
            ..Default::default()
        }
        .resolve();
        assert_eq!(options.webhook_url().unwrap(), "https://hooks.slack.com/x");
    }

    #[test]
    fn test_merge_overrides_win() {
        let file = SlackOptions {
            webhook_url: Some("https://hooks.slack.com/file".to_string()),
            channel: Some("#file".to_string()),
            username: Some("FileBot".to_string()),
            ..Default::default()
        };
        let cli = SlackOptions {
            channel: Some("#cli".to_string()),
            ..Default::default()
        };
        let options = file.merge(cli).resolve();
        assert_eq!(options.webhook_url().unwrap(), "https://hooks.slack.com/file");
        assert_eq!(options.channel.as_deref(), Some("#cli"));
        assert_eq!(options.username, "FileBot");
    }

    #[test]
    fn test_from_file_camel_case_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{
                "webhookUrl": "https://hooks.slack.com/services/T/B/X",
                "iconEmoji": ":robot_face:",
                "iconUrl": "https://example.com/icon.png",
                "channel": "#ci",
                "prdsl": "bitbucket_server"
            }}"##
        )
        .unwrap();

        let options = SlackOptions::from_file(file.path()).unwrap().resolve();
        assert_eq!(
            options.webhook_url().unwrap(),
            "https://hooks.slack.com/services/T/B/X"
        );
        assert_eq!(options.icon_emoji.as_deref(), Some(":robot_face:"));
        assert_eq!(options.icon_url.as_deref(), Some("https://example.com/icon.png"));
        assert_eq!(options.channel.as_deref(), Some("#ci"));
        assert_eq!(options.pr_provider, PrProvider::BitbucketServer);
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = SlackOptions::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SlackError::Configuration(_)));
    }
}
