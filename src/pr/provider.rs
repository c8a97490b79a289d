//! PR provider 标签

use serde::Deserialize;
use std::convert::Infallible;
use std::str::FromStr;

/// Danger DSL 中 PR 的来源平台
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum PrProvider {
    #[default]
    GitHub,
    BitbucketServer,
    /// 未识别的标签，输入按已规范化的 PR 透传
    Other(String),
}

impl PrProvider {
    /// Danger DSL 里对应的顶层 key
    pub fn as_str(&self) -> &str {
        match self {
            PrProvider::GitHub => "github",
            PrProvider::BitbucketServer => "bitbucket_server",
            PrProvider::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for PrProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for PrProvider {
    fn from(tag: String) -> Self {
        let tag = tag.trim();
        match tag {
            "github" => PrProvider::GitHub,
            "bitbucket_server" => PrProvider::BitbucketServer,
            _ => PrProvider::Other(tag.to_string()),
        }
    }
}

impl FromStr for PrProvider {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PrProvider::from(s.to_string()))
    }
}
