//! 把一次 Danger 运行的结果报告到 Slack

use tracing::{debug, info};

use super::message::{compose, SlackMessage};
use super::options::ResolvedOptions;
use super::webhook::WebhookSender;
use crate::danger::{DangerDsl, ReviewResults};
use crate::error::Result;
use crate::pr::normalize;

/// 从 Danger DSL 中取出 PR 并组装消息，不发送
pub fn build_message(
    dsl: &DangerDsl,
    results: &ReviewResults,
    options: &ResolvedOptions,
) -> Result<SlackMessage> {
    let raw_pr = dsl.pull_request(&options.pr_provider)?;
    let pr = normalize(&options.pr_provider, raw_pr)?;
    debug!(provider = %options.pr_provider, number = %pr.number, "Normalized pull request");

    Ok(compose(&pr, results, options))
}

/// 组装并发送消息
///
/// webhook 地址在组装前校验；任一步失败都不会发出请求。
pub async fn report<S: WebhookSender>(
    sender: &S,
    dsl: &DangerDsl,
    results: &ReviewResults,
    options: &ResolvedOptions,
) -> Result<SlackMessage> {
    let webhook_url = options.webhook_url()?;
    let message = build_message(dsl, results, options)?;

    info!(
        failures = results.failures.len(),
        warnings = results.warnings.len(),
        messages = results.informational.len(),
        markdowns = results.notes.len(),
        "Reporting Danger results to Slack"
    );
    sender.send(webhook_url, &message).await?;

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlackError;
    use crate::slack::options::SlackOptions;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<(String, SlackMessage)>>,
    }

    impl WebhookSender for RecordingSender {
        async fn send(&self, webhook_url: &str, message: &SlackMessage) -> Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((webhook_url.to_string(), message.clone()));
            Ok(())
        }
    }

    fn dsl() -> DangerDsl {
        DangerDsl::new(json!({
            "github": {
                "pr": {
                    "number": 1,
                    "title": "Title",
                    "body": "",
                    "html_url": "https://github.com/acme/app/pull/1",
                    "user": { "login": "octocat", "html_url": "https://github.com/octocat" }
                }
            }
        }))
    }

    #[tokio::test]
    async fn test_report_sends_once() {
        let sender = RecordingSender::default();
        let options = SlackOptions {
            webhook_url: Some("https://hooks.slack.com/services/T/B/X".to_string()),
            ..Default::default()
        }
        .resolve();

        let message = report(&sender, &dsl(), &ReviewResults::default(), &options)
            .await
            .unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://hooks.slack.com/services/T/B/X");
        assert_eq!(sent[0].1, message);
    }

    #[tokio::test]
    async fn test_report_without_webhook_does_not_send() {
        let sender = RecordingSender::default();
        let err = report(&sender, &dsl(), &ReviewResults::default(), &ResolvedOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, SlackError::Configuration(_)));
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_build_message_missing_provider() {
        let options = SlackOptions {
            pr_provider: Some("bitbucket_server".to_string().into()),
            ..Default::default()
        }
        .resolve();
        let err = build_message(&dsl(), &ReviewResults::default(), &options).unwrap_err();
        assert!(matches!(err, SlackError::MalformedInput { .. }));
    }
}
