//! 将各平台的 PR JSON 转换为 [`PullRequest`]

use serde_json::Value;
use tracing::warn;

use super::{PrAuthor, PrNumber, PrProvider, PullRequest};
use crate::error::{Result, SlackError};

/// 按 provider 规范化 PR
///
/// 未识别的 provider 会把输入当作 GitHub 结构透传，并记录一条 warning。
pub fn normalize(provider: &PrProvider, pr: &Value) -> Result<PullRequest> {
    match provider {
        PrProvider::GitHub => from_github(pr),
        PrProvider::BitbucketServer => from_bitbucket_server(pr),
        PrProvider::Other(tag) => {
            warn!(provider = %tag, "Unrecognized PR provider, treating input as canonical");
            from_github(pr)
        }
    }
}

fn from_github(pr: &Value) -> Result<PullRequest> {
    Ok(PullRequest {
        number: required_number(pr, "/number", "number")?,
        title: required_str(pr, "/title", "title")?,
        body: optional_str(pr, "/body").unwrap_or_default(),
        url: required_str(pr, "/html_url", "html_url")?,
        author: PrAuthor {
            login: required_str(pr, "/user/login", "user.login")?,
            profile_url: required_str(pr, "/user/html_url", "user.html_url")?,
        },
    })
}

fn from_bitbucket_server(pr: &Value) -> Result<PullRequest> {
    let profile_url = optional_str(pr, "/author/user/emailAddress")
        .filter(|email| !email.is_empty())
        .map(|email| format!("mailto: {}", email))
        .unwrap_or_default();

    Ok(PullRequest {
        number: required_number(pr, "/id", "id")?,
        title: required_str(pr, "/title", "title")?,
        body: optional_str(pr, "/description").unwrap_or_default(),
        url: required_str(pr, "/links/self/0/href", "links.self[0].href")?,
        author: PrAuthor {
            login: required_str(pr, "/author/user/name", "author.user.name")?,
            profile_url,
        },
    })
}

fn required_str(pr: &Value, pointer: &str, field: &str) -> Result<String> {
    optional_str(pr, pointer).ok_or_else(|| SlackError::missing(field))
}

fn optional_str(pr: &Value, pointer: &str) -> Option<String> {
    pr.pointer(pointer)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

fn required_number(pr: &Value, pointer: &str, field: &str) -> Result<PrNumber> {
    match pr.pointer(pointer) {
        Some(Value::Number(n)) => Ok(n
            .as_i64()
            .map(PrNumber::Int)
            .unwrap_or_else(|| PrNumber::Text(n.to_string()))),
        Some(Value::String(s)) => Ok(PrNumber::Text(s.clone())),
        _ => Err(SlackError::missing(field)),
    }
}
