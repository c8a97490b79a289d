//! danger-slack - 把 Danger 的 review 结果通过 Incoming Webhook 报告到 Slack

pub mod cli;
pub mod danger;
pub mod error;
pub mod pr;
pub mod slack;

pub use danger::{DangerDsl, ReviewResults, Violation};
pub use error::SlackError;
pub use pr::{normalize, PrAuthor, PrNumber, PrProvider, PullRequest};
pub use slack::{
    build_message, compose, report, select_indicator, Attachment, Indicator, ResolvedOptions,
    SlackMessage, SlackOptions, SlackWebhookClient, WebhookConfig, WebhookSender,
};
