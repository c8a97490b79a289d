//! Slack 报告
//!
//! 1. `options`：合并并解析配置
//! 2. `indicator`：根据结果严重程度选择 emoji
//! 3. `attachment`：把一类结果格式化为 attachment
//! 4. `message`：组装完整的 webhook 消息
//! 5. `webhook`：投递接口与 reqwest 实现
//!
//! # 使用示例
//! ```ignore
//! use danger_slack::slack::{report, SlackOptions, SlackWebhookClient, WebhookConfig};
//!
//! let options = SlackOptions::default().merge(cli_options).resolve();
//! let client = SlackWebhookClient::new(WebhookConfig::default())?;
//! report(&client, &dsl, &results, &options).await?;
//! ```

pub mod attachment;
pub mod indicator;
pub mod message;
pub mod options;
pub mod report;
pub mod webhook;

pub use attachment::{note_block, violation_block, Attachment};
pub use indicator::{select_indicator, Indicator};
pub use message::{compose, SlackMessage};
pub use options::{ResolvedOptions, SlackOptions};
pub use report::{build_message, report};
pub use webhook::{SlackWebhookClient, WebhookConfig, WebhookSender};
