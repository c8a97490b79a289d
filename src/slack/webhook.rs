//! Slack Incoming Webhook 客户端
//!
//! 通过 HTTP POST 把 [`SlackMessage`] 发送到 webhook 地址，不做重试。

use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::{error, info};

use super::message::SlackMessage;
use crate::error::{Result, SlackError};

/// Webhook 投递接口
pub trait WebhookSender {
    /// 发送一次消息，成功或失败只报告一次
    fn send(
        &self,
        webhook_url: &str,
        message: &SlackMessage,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Webhook 客户端配置
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// 超时时间 (秒)
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// 基于 reqwest 的 Slack webhook 客户端
#[derive(Debug)]
pub struct SlackWebhookClient {
    client: Client,
}

impl SlackWebhookClient {
    /// 创建新的 Webhook 客户端
    pub fn new(config: WebhookConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SlackError::Delivery(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl WebhookSender for SlackWebhookClient {
    async fn send(&self, webhook_url: &str, message: &SlackMessage) -> Result<()> {
        let response = self
            .client
            .post(webhook_url)
            .json(message)
            .send()
            .await
            .map_err(|e| SlackError::Delivery(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Slack webhook returned error");
            return Err(SlackError::Delivery(format!("HTTP {}: {}", status, body)));
        }

        info!(
            attachments = message.attachments.len(),
            channel = ?message.channel,
            "Slack message sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_config_default() {
        let config = WebhookConfig::default();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_client_builds() {
        assert!(SlackWebhookClient::new(WebhookConfig { timeout_secs: 5 }).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_delivery_error() {
        let client = SlackWebhookClient::new(WebhookConfig { timeout_secs: 2 }).unwrap();
        // URL 无法解析，请求在建立连接前就失败
        let err = client
            .send("not a url", &SlackMessage::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SlackError::Delivery(_)));
    }
}
