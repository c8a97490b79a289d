//! 统一错误类型

use thiserror::Error;

/// danger-slack 的错误类型
#[derive(Debug, Error)]
pub enum SlackError {
    /// 配置错误（缺少 webhook URL、配置文件无法解析等）
    #[error("configuration error: {0}")]
    Configuration(String),

    /// PR 描述缺少所选 provider 要求的字段
    #[error("malformed pull request: missing field `{field}`")]
    MalformedInput { field: String },

    /// Webhook 投递失败，原样返回给调用方
    #[error("delivery failed: {0}")]
    Delivery(String),
}

impl SlackError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SlackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_path() {
        let err = SlackError::missing("links.self[0].href");
        assert_eq!(
            err.to_string(),
            "malformed pull request: missing field `links.self[0].href`"
        );
    }

    #[test]
    fn test_configuration_message() {
        let err = SlackError::Configuration("webhookUrl is required".to_string());
        assert!(err.to_string().contains("webhookUrl"));
    }
}
